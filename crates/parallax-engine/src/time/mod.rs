//! Time subsystem.
//!
//! The camera step runs on a periodic tick. The core only needs "run every
//! `D` until cancelled", expressed by [`TickSource`]. Hosts drive ticks from
//! whichever primitive they have:
//! - [`IntervalTicker`] turns the schedule into deadlines for an event loop
//!   that can sleep until a given instant (the window runtime does this)
//! - [`ManualTicker`] fires ticks on demand (tests, headless stepping)

mod interval;
mod manual;
mod source;

pub use interval::{DueTicks, IntervalTicker};
pub use manual::ManualTicker;
pub use source::{TickHandle, TickSource};
