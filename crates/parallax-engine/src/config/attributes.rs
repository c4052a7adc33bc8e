use std::collections::{BTreeMap, HashMap};

use crate::camera::MotionConfig;
use crate::coords::Vec2;
use crate::error::{ConfigError, FieldIssue, FieldProblem};
use crate::transform::DEFAULT_HORIZONTAL_FOV_DEGREES;

use super::{MoveableConfig, SceneConfig};

/// Attribute names, as they appear on elements (`data-` prefix omitted).
pub mod keys {
    pub const START_X: &str = "start-x";
    pub const START_Y: &str = "start-y";
    pub const DEPTH: &str = "depth";

    pub const MAX_SCROLL_X: &str = "max-scroll-x";
    pub const MAX_SCROLL_Y: &str = "max-scroll-y";
    pub const BLUR_THRESHOLD: &str = "blur-threshold";
    pub const BLUR_FACTOR: &str = "blur-factor";
    pub const SCALE_ON_HOVER: &str = "scale-on-hover";
    pub const FOV: &str = "fov";
    pub const RECENTER_ON_LEAVE: &str = "recenter-on-leave";
    pub const CAMERA_X: &str = "camera-x";
    pub const CAMERA_Y: &str = "camera-y";

    pub const STEPS_PER_SECOND: &str = "steps-per-second";
    pub const EASE_FACTOR: &str = "ease-factor";
    pub const MAX_TRAVEL: &str = "max-travel-per-frame";
    pub const DEAD_ZONE: &str = "dead-zone";
}

/// Read-only string attributes of one element.
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl AttributeSource for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl AttributeSource for BTreeMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl AttributeSource for [(&str, &str)] {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }
}

/// Reads typed fields from an attribute source, collecting every problem.
struct FieldReader<'a, S: AttributeSource + ?Sized> {
    src: &'a S,
    prefix: &'a str,
    issues: Vec<FieldIssue>,
}

impl<'a, S: AttributeSource + ?Sized> FieldReader<'a, S> {
    fn new(src: &'a S, prefix: &'a str) -> Self {
        Self { src, prefix, issues: Vec::new() }
    }

    fn field(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }

    fn parse_f32(&mut self, key: &str, raw: &str) -> Option<f32> {
        match raw.trim().parse::<f32>() {
            Ok(v) if v.is_finite() => Some(v),
            Ok(v) => {
                self.issues.push(FieldIssue::new(self.field(key), FieldProblem::NonFinite(v)));
                None
            }
            Err(_) => {
                self.issues.push(FieldIssue::new(
                    self.field(key),
                    FieldProblem::Unparsable { raw: raw.to_string(), expected: "number" },
                ));
                None
            }
        }
    }

    /// Missing or bad values yield `0.0`; the recorded issue fails `finish`.
    fn required_f32(&mut self, key: &str) -> f32 {
        match self.src.attribute(key) {
            Some(raw) => self.parse_f32(key, raw).unwrap_or(0.0),
            None => {
                self.issues.push(FieldIssue::new(self.field(key), FieldProblem::Missing));
                0.0
            }
        }
    }

    fn optional_f32(&mut self, key: &str, default: f32) -> f32 {
        match self.src.attribute(key) {
            Some(raw) => self.parse_f32(key, raw).unwrap_or(default),
            None => default,
        }
    }

    /// Boolean attribute: present-and-empty counts as `true`.
    fn optional_bool(&mut self, key: &str, default: bool) -> bool {
        let Some(raw) = self.src.attribute(key) else {
            return default;
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "true" | "1" | "yes" | "on" => true,
            "false" | "0" | "no" | "off" => false,
            _ => {
                self.issues.push(FieldIssue::new(
                    self.field(key),
                    FieldProblem::Unparsable { raw: raw.to_string(), expected: "boolean" },
                ));
                default
            }
        }
    }

    fn finish(self) -> Result<(), ConfigError> {
        ConfigError::check(self.issues)
    }
}

impl MoveableConfig {
    /// Parses `start-x`, `start-y` and `depth`; all three are required.
    ///
    /// `prefix` is prepended to field names in errors (e.g. `"moveables[3]."`).
    /// Depth sign is not checked here; scene construction reports it as a
    /// domain error.
    pub fn from_attributes<S>(src: &S, prefix: &str) -> Result<Self, ConfigError>
    where
        S: AttributeSource + ?Sized,
    {
        let mut r = FieldReader::new(src, prefix);
        let x = r.required_f32(keys::START_X);
        let y = r.required_f32(keys::START_Y);
        let depth = r.required_f32(keys::DEPTH);
        r.finish()?;
        Ok(MoveableConfig { start: Vec2::new(x, y), depth })
    }
}

impl SceneConfig {
    /// Parses the container attributes.
    ///
    /// Required: `max-scroll-x`, `max-scroll-y`, `blur-threshold`, `blur-factor`.
    /// Optional: `scale-on-hover` (false), `fov` (100), `recenter-on-leave`
    /// (false), `camera-x`/`camera-y` (0), and the motion overrides.
    pub fn from_attributes<S>(src: &S) -> Result<Self, ConfigError>
    where
        S: AttributeSource + ?Sized,
    {
        let defaults = MotionConfig::default();
        let mut r = FieldReader::new(src, "");

        let max_scroll = Vec2::new(r.required_f32(keys::MAX_SCROLL_X), r.required_f32(keys::MAX_SCROLL_Y));
        let blur_threshold = r.required_f32(keys::BLUR_THRESHOLD);
        let blur_factor = r.required_f32(keys::BLUR_FACTOR);
        let scale_on_hover = r.optional_bool(keys::SCALE_ON_HOVER, false);
        let fov_degrees = r.optional_f32(keys::FOV, DEFAULT_HORIZONTAL_FOV_DEGREES);
        let recenter_on_leave = r.optional_bool(keys::RECENTER_ON_LEAVE, false);
        let camera_start = Vec2::new(r.optional_f32(keys::CAMERA_X, 0.0), r.optional_f32(keys::CAMERA_Y, 0.0));

        let motion = MotionConfig {
            steps_per_second: r.optional_f32(keys::STEPS_PER_SECOND, defaults.steps_per_second),
            ease_factor: r.optional_f32(keys::EASE_FACTOR, defaults.ease_factor),
            max_travel_per_frame: r.optional_f32(keys::MAX_TRAVEL, defaults.max_travel_per_frame),
            dead_zone: r.optional_f32(keys::DEAD_ZONE, defaults.dead_zone),
        };

        r.finish()?;

        let cfg = SceneConfig {
            max_scroll,
            blur_threshold,
            blur_factor,
            scale_on_hover,
            fov_degrees,
            recenter_on_leave,
            camera_start,
            motion,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &[(&str, &str)] = &[
        ("max-scroll-x", "0.8"),
        ("max-scroll-y", "0.4"),
        ("blur-threshold", "3"),
        ("blur-factor", "1.5"),
    ];

    // ── scene ─────────────────────────────────────────────────────────────

    #[test]
    fn parses_required_scene_fields_with_defaults() {
        let cfg = SceneConfig::from_attributes(SCENE).unwrap();
        assert_eq!(cfg.max_scroll, Vec2::new(0.8, 0.4));
        assert_eq!(cfg.blur_threshold, 3.0);
        assert_eq!(cfg.blur_factor, 1.5);
        assert!(!cfg.scale_on_hover);
        assert_eq!(cfg.fov_degrees, 100.0);
        assert_eq!(cfg.motion, MotionConfig::default());
    }

    #[test]
    fn parses_optional_scene_fields() {
        let mut attrs: HashMap<String, String> =
            SCENE.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        attrs.insert("scale-on-hover".into(), "".into());
        attrs.insert("fov".into(), "75".into());
        attrs.insert("recenter-on-leave".into(), "false".into());
        attrs.insert("ease-factor".into(), "0.5".into());

        let cfg = SceneConfig::from_attributes(&attrs).unwrap();
        assert!(cfg.scale_on_hover);
        assert_eq!(cfg.fov_degrees, 75.0);
        assert!(!cfg.recenter_on_leave);
        assert_eq!(cfg.motion.ease_factor, 0.5);
    }

    #[test]
    fn reports_every_bad_scene_field() {
        let attrs: &[(&str, &str)] = &[
            ("max-scroll-x", "wide"),
            ("blur-threshold", "NaN"),
            ("blur-factor", "1"),
            ("scale-on-hover", "maybe"),
        ];
        let err = SceneConfig::from_attributes(attrs).unwrap_err();
        assert!(err.mentions("max-scroll-x"));
        assert!(err.mentions("max-scroll-y"));
        assert!(err.mentions("blur-threshold"));
        assert!(err.mentions("scale-on-hover"));
        assert!(!err.mentions("blur-factor"));
        assert_eq!(
            err.issues[1].problem,
            FieldProblem::Missing,
        );
    }

    #[test]
    fn out_of_range_fov_is_rejected_after_parsing() {
        let mut attrs: Vec<(&str, &str)> = SCENE.to_vec();
        attrs.push(("fov", "0"));
        let err = SceneConfig::from_attributes(attrs.as_slice()).unwrap_err();
        assert!(err.mentions("fov"));
    }

    // ── moveable ──────────────────────────────────────────────────────────

    #[test]
    fn parses_moveable() {
        let attrs: &[(&str, &str)] = &[("start-x", "-0.5"), ("start-y", " 0.25 "), ("depth", "3")];
        let m = MoveableConfig::from_attributes(attrs, "").unwrap();
        assert_eq!(m, MoveableConfig::new(-0.5, 0.25, 3.0));
    }

    #[test]
    fn moveable_errors_carry_prefix() {
        let attrs: &[(&str, &str)] = &[("start-x", "0"), ("depth", "far")];
        let err = MoveableConfig::from_attributes(attrs, "moveables[4].").unwrap_err();
        assert!(err.mentions("moveables[4].start-y"));
        assert!(err.mentions("moveables[4].depth"));
        assert_eq!(err.issues.len(), 2);
    }

    #[test]
    fn zero_depth_parses_as_config() {
        let attrs: &[(&str, &str)] = &[("start-x", "0"), ("start-y", "0"), ("depth", "0")];
        assert_eq!(MoveableConfig::from_attributes(attrs, "").unwrap().depth, 0.0);
    }
}
