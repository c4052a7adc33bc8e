//! Scene: moveables, their render surfaces, and the camera that moves them.
//!
//! Responsibilities:
//! - compute each moveable's depth parameters and initial placement once
//! - assign a depth-based stacking order once
//! - re-place every moveable whenever the camera moves
//! - route pointer input to the camera target and hover to the visual toggle

mod container;
mod moveable;
mod stacking;
mod surface;

pub use container::ParallaxScene;
pub use moveable::{Moveable, MoveableId};
pub use stacking::{assign_stacking_orders, StackingOrder};
pub use surface::RenderSurface;
