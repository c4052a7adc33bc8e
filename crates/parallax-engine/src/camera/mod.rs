//! Camera state and the frame-stepped motion controller.

mod motion;

pub use motion::{
    MotionConfig, MotionController, MotionState, Step, DEAD_ZONE, EASE_FACTOR,
    MAX_TRAVEL_PER_FRAME, STEPS_PER_SECOND,
};

use crate::coords::Vec2;
use crate::transform::FieldOfView;

/// The single scene camera.
///
/// `position` is continuous state advanced by the motion controller;
/// `target` is written by input (or any caller) and only read by the step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec2,
    pub target: Vec2,
    pub fov: FieldOfView,
}

impl Camera {
    /// Camera resting at `position` with the target on the same spot.
    pub fn at(position: Vec2, fov: FieldOfView) -> Self {
        Self { position, target: position, fov }
    }

    /// Remaining distance to the target.
    #[inline]
    pub fn distance_to_target(&self) -> f32 {
        (self.target - self.position).length()
    }
}
