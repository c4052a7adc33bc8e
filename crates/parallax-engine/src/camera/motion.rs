use std::time::Duration;

use crate::coords::Vec2;
use crate::error::{ConfigError, FieldIssue, FieldProblem};
use crate::time::{TickHandle, TickSource};

use super::Camera;

/// Nominal tick rate of the camera loop.
pub const STEPS_PER_SECOND: f32 = 240.0;
/// Easing time constant, in seconds.
pub const EASE_FACTOR: f32 = 0.25;
/// Upper bound on camera displacement per tick, in world units.
pub const MAX_TRAVEL_PER_FRAME: f32 = 0.05;
/// Steps smaller than this are skipped, in world units.
pub const DEAD_ZONE: f32 = 1e-5;

/// Tuning for the camera easing loop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MotionConfig {
    pub steps_per_second: f32,
    pub ease_factor: f32,
    pub max_travel_per_frame: f32,
    pub dead_zone: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            steps_per_second: STEPS_PER_SECOND,
            ease_factor: EASE_FACTOR,
            max_travel_per_frame: MAX_TRAVEL_PER_FRAME,
            dead_zone: DEAD_ZONE,
        }
    }
}

impl MotionConfig {
    /// Seconds covered by one tick.
    #[inline]
    pub fn frame_seconds(&self) -> f32 {
        1.0 / self.steps_per_second
    }

    /// Tick interval, or `None` when `1 / steps_per_second` is not a
    /// representable non-zero `Duration`.
    #[inline]
    pub fn tick_interval(&self) -> Option<Duration> {
        Duration::try_from_secs_f32(self.frame_seconds()).ok().filter(|d| !d.is_zero())
    }

    /// Tick interval handed to the tick source.
    ///
    /// Saturates for configurations `validate` would reject.
    #[inline]
    pub fn frame_duration(&self) -> Duration {
        self.tick_interval().unwrap_or(Duration::MAX)
    }

    /// Checks that every value is finite and positive, and that one step can
    /// never carry the camera past its target.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut issues = Vec::new();
        let fields = [
            ("motion.steps-per-second", self.steps_per_second),
            ("motion.ease-factor", self.ease_factor),
            ("motion.max-travel-per-frame", self.max_travel_per_frame),
            ("motion.dead-zone", self.dead_zone),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                issues.push(FieldIssue::new(field, FieldProblem::NonFinite(value)));
            } else if value <= 0.0 {
                issues.push(FieldIssue::new(
                    field,
                    FieldProblem::OutOfRange { value, constraint: "> 0" },
                ));
            }
        }

        if issues.is_empty() && self.tick_interval().is_none() {
            issues.push(FieldIssue::new(
                "motion.steps-per-second",
                FieldProblem::OutOfRange {
                    value: self.steps_per_second,
                    constraint: "a rate whose tick interval fits a Duration",
                },
            ));
        }

        if issues.is_empty() && self.ease_factor < self.frame_seconds() {
            issues.push(FieldIssue::new(
                "motion.ease-factor",
                FieldProblem::OutOfRange {
                    value: self.ease_factor,
                    constraint: ">= one tick (1 / steps-per-second)",
                },
            ));
        }

        ConfigError::check(issues)
    }
}

/// Running state of the tick loop.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MotionState {
    Idle,
    Running(TickHandle),
}

/// Result of one easing step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Step {
    /// Camera moved by `delta`; `capped` is set when the speed limit applied.
    Moved { delta: Vec2, capped: bool },
    /// Step fell inside the dead zone; nothing changed.
    Settled,
}

impl Step {
    #[inline]
    pub fn moved(&self) -> bool {
        matches!(self, Step::Moved { .. })
    }
}

/// Owns the camera and advances it toward its target once per tick.
///
/// Each step is computed purely from the current position and target; no
/// velocity is carried between ticks.
#[derive(Debug, Clone)]
pub struct MotionController {
    camera: Camera,
    config: MotionConfig,
    state: MotionState,
}

impl MotionController {
    pub fn new(camera: Camera, config: MotionConfig) -> Self {
        Self { camera, config, state: MotionState::Idle }
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> MotionState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.state, MotionState::Running(_))
    }

    /// Replaces the target. The next tick picks it up.
    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.camera.target = target;
    }

    /// Idle → Running. Returns `false` if already running.
    pub fn resume<T: TickSource>(&mut self, ticker: &mut T) -> bool {
        if self.is_running() {
            return false;
        }
        let handle = ticker.schedule(self.config.frame_duration());
        self.state = MotionState::Running(handle);
        log::info!("camera loop resumed ({:?})", handle);
        true
    }

    /// Running → Idle. Returns `false` if already idle.
    pub fn pause<T: TickSource>(&mut self, ticker: &mut T) -> bool {
        let MotionState::Running(handle) = self.state else {
            return false;
        };
        ticker.cancel(handle);
        self.state = MotionState::Idle;
        log::info!("camera loop paused ({:?})", handle);
        true
    }

    /// Whether a tick carrying `handle` belongs to the live schedule.
    #[inline]
    pub fn accepts(&self, handle: TickHandle) -> bool {
        self.state == MotionState::Running(handle)
    }

    /// Advances the camera one tick toward its target.
    pub fn perform_step(&mut self) -> Step {
        let cfg = &self.config;
        let mut delta =
            (self.camera.target - self.camera.position) / cfg.ease_factor * cfg.frame_seconds();
        let magnitude = delta.length();

        let capped = magnitude > cfg.max_travel_per_frame;
        if capped {
            delta = delta.with_length(cfg.max_travel_per_frame);
        } else if magnitude < cfg.dead_zone {
            return Step::Settled;
        }

        self.camera.position += delta;
        log::trace!(
            "camera step delta=({:.5},{:.5}) pos=({:.5},{:.5}){}",
            delta.x,
            delta.y,
            self.camera.position.x,
            self.camera.position.y,
            if capped { " capped" } else { "" }
        );
        Step::Moved { delta, capped }
    }
}
