//! Scene configuration.
//!
//! Values are read once at construction. Two entry points:
//! - typed structs ([`SceneConfig`], [`MoveableConfig`]) for code-built scenes
//! - string attribute maps ([`AttributeSource`]) for scenes described as markup
//!   data attributes or loaded from files
//!
//! Both paths end in the same validation, so a bad value is reported as a
//! [`ConfigError`](crate::error::ConfigError) naming the field instead of
//! flowing through the transform as NaN.

mod attributes;

pub use attributes::{AttributeSource, keys};

use crate::camera::MotionConfig;
use crate::coords::{Vec2, Viewport};
use crate::error::{ConfigError, DomainError, FieldIssue, FieldProblem};
use crate::transform::DEFAULT_HORIZONTAL_FOV_DEGREES;

/// Per-moveable configuration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MoveableConfig {
    /// Start position in world space.
    pub start: Vec2,
    /// Distance from the camera; must be > 0.
    pub depth: f32,
}

impl MoveableConfig {
    pub const fn new(x: f32, y: f32, depth: f32) -> Self {
        Self { start: Vec2::new(x, y), depth }
    }

    /// Collects non-finite values under `prefix`.
    pub(crate) fn collect_issues(&self, prefix: &str, issues: &mut Vec<FieldIssue>) {
        push_if_non_finite(issues, format!("{prefix}{}", keys::START_X), self.start.x);
        push_if_non_finite(issues, format!("{prefix}{}", keys::START_Y), self.start.y);
        push_if_non_finite(issues, format!("{prefix}{}", keys::DEPTH), self.depth);
    }

    /// Rejects zero or negative depth.
    pub(crate) fn check_domain(&self, prefix: &str) -> Result<(), DomainError> {
        if self.depth > 0.0 {
            Ok(())
        } else {
            Err(DomainError { field: format!("{prefix}{}", keys::DEPTH), value: self.depth })
        }
    }
}

/// Scene-wide configuration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SceneConfig {
    /// Largest camera target offset per axis, in world units.
    pub max_scroll: Vec2,
    /// Depth up to which moveables stay sharp.
    pub blur_threshold: f32,
    /// Blur per unit of depth past the threshold.
    pub blur_factor: f32,
    /// Relax the depth scale while a moveable is hovered.
    pub scale_on_hover: bool,
    /// Horizontal field of view, in degrees.
    pub fov_degrees: f32,
    /// Send the camera target back to the origin when the pointer leaves.
    pub recenter_on_leave: bool,
    /// Initial camera position (and target).
    pub camera_start: Vec2,
    pub motion: MotionConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            max_scroll: Vec2::new(1.0, 1.0),
            blur_threshold: 2.0,
            blur_factor: 1.0,
            scale_on_hover: false,
            fov_degrees: DEFAULT_HORIZONTAL_FOV_DEGREES,
            recenter_on_leave: false,
            camera_start: Vec2::zero(),
            motion: MotionConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut issues = Vec::new();
        self.collect_issues(&mut issues);
        ConfigError::check(issues)
    }

    pub(crate) fn collect_issues(&self, issues: &mut Vec<FieldIssue>) {
        push_if_non_finite(issues, keys::MAX_SCROLL_X.to_string(), self.max_scroll.x);
        push_if_non_finite(issues, keys::MAX_SCROLL_Y.to_string(), self.max_scroll.y);
        push_if_non_finite(issues, keys::BLUR_THRESHOLD.to_string(), self.blur_threshold);
        push_if_non_finite(issues, keys::BLUR_FACTOR.to_string(), self.blur_factor);
        push_if_non_finite(issues, keys::CAMERA_X.to_string(), self.camera_start.x);
        push_if_non_finite(issues, keys::CAMERA_Y.to_string(), self.camera_start.y);

        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            issues.push(FieldIssue::new(
                keys::FOV,
                FieldProblem::OutOfRange { value: self.fov_degrees, constraint: "in (0, 180)" },
            ));
        }

        if let Err(e) = self.motion.validate() {
            issues.extend(e.issues);
        }
    }
}

/// Checks the container the scene is laid out in.
pub(crate) fn collect_container_issues(container: Viewport, issues: &mut Vec<FieldIssue>) {
    if container.is_valid() {
        return;
    }
    for (field, value) in [("container.width", container.width), ("container.height", container.height)] {
        if !(value.is_finite() && value > 0.0) {
            issues.push(FieldIssue::new(field, FieldProblem::OutOfRange { value, constraint: "> 0" }));
        }
    }
}

fn push_if_non_finite(issues: &mut Vec<FieldIssue>, field: String, value: f32) {
    if !value.is_finite() {
        issues.push(FieldIssue::new(field, FieldProblem::NonFinite(value)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_config_is_valid() {
        assert!(SceneConfig::default().validate().is_ok());
    }

    #[test]
    fn nan_fields_are_reported_by_name() {
        let cfg = SceneConfig { blur_factor: f32::NAN, fov_degrees: 180.0, ..Default::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.mentions("blur-factor"));
        assert!(err.mentions("fov"));
        assert_eq!(err.issues.len(), 2);
    }

    #[test]
    fn depth_domain_is_checked_separately() {
        let m = MoveableConfig::new(0.0, 0.0, -1.0);
        let mut issues = Vec::new();
        m.collect_issues("moveables[0].", &mut issues);
        assert!(issues.is_empty());
        let err = m.check_domain("moveables[0].").unwrap_err();
        assert_eq!(err.field, "moveables[0].depth");
    }

    #[test]
    fn container_must_have_area() {
        let mut issues = Vec::new();
        collect_container_issues(Viewport::new(0.0, 10.0), &mut issues);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "container.width");

        issues.clear();
        collect_container_issues(Viewport::new(1280.0, 720.0), &mut issues);
        assert!(issues.is_empty());
    }
}
