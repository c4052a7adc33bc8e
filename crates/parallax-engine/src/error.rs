//! Construction-time errors.
//!
//! Scene construction validates every numeric input up front; once a scene
//! exists, ticking and input handling are infallible.

use std::fmt;

/// Why a configuration field was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldProblem {
    /// Required field was not provided.
    Missing,
    /// Raw text could not be parsed as the expected type.
    Unparsable { raw: String, expected: &'static str },
    /// Parsed to NaN or an infinity.
    NonFinite(f32),
    /// Parsed, but outside the accepted range.
    OutOfRange { value: f32, constraint: &'static str },
}

/// One offending configuration field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIssue {
    /// Field path, e.g. `"blur-factor"` or `"moveables[2].depth"`.
    pub field: String,
    pub problem: FieldProblem,
}

impl FieldIssue {
    pub(crate) fn new(field: impl Into<String>, problem: FieldProblem) -> Self {
        Self { field: field.into(), problem }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.problem {
            FieldProblem::Missing => write!(f, "`{}` is missing", self.field),
            FieldProblem::Unparsable { raw, expected } => {
                write!(f, "`{}` = {raw:?} is not a valid {expected}", self.field)
            }
            FieldProblem::NonFinite(v) => write!(f, "`{}` = {v} is not finite", self.field),
            FieldProblem::OutOfRange { value, constraint } => {
                write!(f, "`{}` = {value} must be {constraint}", self.field)
            }
        }
    }
}

/// Malformed or missing configuration.
///
/// Lists every offending field, not only the first one found.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub issues: Vec<FieldIssue>,
}

impl ConfigError {
    /// Returns `Err` when `issues` is non-empty.
    pub(crate) fn check(issues: Vec<FieldIssue>) -> Result<(), ConfigError> {
        if issues.is_empty() { Ok(()) } else { Err(ConfigError { issues }) }
    }

    /// Returns `true` if `field` is among the offending fields.
    pub fn mentions(&self, field: &str) -> bool {
        self.issues.iter().any(|i| i.field == field)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid parallax configuration: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigError {}

/// A value outside the mathematical domain of the transform.
///
/// Depth is a distance from the camera; zero or negative depth makes
/// `1 / sqrt(depth)` and the angle formula undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainError {
    pub field: String,
    pub value: f32,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` = {} is outside the domain: depth must be > 0", self.field, self.value)
    }
}

impl std::error::Error for DomainError {}

/// Any error raised while building a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    Config(ConfigError),
    Domain(DomainError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Config(e) => e.fmt(f),
            SceneError::Domain(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Config(e) => Some(e),
            SceneError::Domain(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SceneError {
    fn from(e: ConfigError) -> Self {
        SceneError::Config(e)
    }
}

impl From<DomainError> for SceneError {
    fn from(e: DomainError) -> Self {
        SceneError::Domain(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_lists_every_field() {
        let err = ConfigError {
            issues: vec![
                FieldIssue::new("depth", FieldProblem::Missing),
                FieldIssue::new(
                    "blur-factor",
                    FieldProblem::Unparsable { raw: "abc".into(), expected: "number" },
                ),
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("`depth` is missing"));
        assert!(msg.contains("`blur-factor` = \"abc\" is not a valid number"));
        assert!(err.mentions("depth"));
        assert!(!err.mentions("fov"));
    }

    #[test]
    fn check_passes_without_issues() {
        assert!(ConfigError::check(Vec::new()).is_ok());
    }

    #[test]
    fn domain_error_message_names_field() {
        let err = DomainError { field: "moveables[0].depth".into(), value: 0.0 };
        assert!(err.to_string().contains("moveables[0].depth"));
    }
}
