//! Parallax engine crate.
//!
//! Depth-based parallax scenes: a virtual camera eases toward a
//! pointer-driven target and every moveable is re-projected through a
//! perspective transform each step. The platform + GPU runtime pieces that
//! put a scene on screen live alongside the scene model.

pub mod camera;
pub mod config;
pub mod coords;
pub mod depth;
pub mod error;
pub mod scene;
pub mod time;
pub mod transform;

pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod window;
