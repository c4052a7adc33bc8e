//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code translates platform events into `InputEvent`s; the scene turns
//! pointer motion into camera targets through [`PointerTargetAdapter`].

pub(crate) mod platform;
mod state;
mod target;
mod types;

pub use state::InputState;
pub use target::PointerTargetAdapter;
pub use types::{InputEvent, Key, KeyState, PointerMoveEvent};
