//! Coordinate and geometry types shared by the parallax core and the platform layer.
//!
//! Spaces in use:
//! - World space: scene units, camera and moveable start positions live here.
//! - Render space: normalized `[-1, 1]` per axis across the container, +Y down.
//! - Logical pixels: DPI-aware window coordinates, origin top-left, +Y down.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
