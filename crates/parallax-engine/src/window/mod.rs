//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GPU layer.
//! The loop sleeps until input arrives or the app's next timer deadline.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
