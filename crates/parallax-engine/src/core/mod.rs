//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the application driving a scene. Input arrives as translated events, timer
//! wake-ups as deadlines, and drawing happens inside a per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl, Wake};
pub use ctx::{FrameCtx, WindowCtx};
