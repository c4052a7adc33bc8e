//! Coordinate transform: world space → camera-relative polar → render space.
//!
//! Forward pipeline evaluated for every moveable whenever the camera moves:
//!
//! ```text
//! (world, depth, camera) --to_polar--> Polar --to_render(fov)--> render [-1, 1]
//!                                                    --place(size)--> percent offsets
//! ```
//!
//! All functions are pure and deterministic.

mod fov;
mod projection;

pub use fov::{FieldOfView, DEFAULT_HORIZONTAL_FOV_DEGREES};
pub use projection::{place, project, to_polar, Polar, RenderPlacement};
