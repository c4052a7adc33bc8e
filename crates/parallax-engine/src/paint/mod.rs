//! Paint model shared between the studio and the sprite renderer.
//!
//! Colors are linear premultiplied RGBA.

pub mod color;

pub use color::Color;
