//! GPU rendering subsystem.
//!
//! Moveables are drawn as sprites: flat rounded cards with a depth-derived
//! scale and a soft-edge blur. Each frame the application fills a
//! [`SpriteList`] and hands it to the [`SpriteRenderer`].
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.

mod ctx;
mod list;
mod sprite;

pub use ctx::{RenderCtx, RenderTarget};
pub use list::{Sprite, SpriteList};
pub use sprite::SpriteRenderer;
