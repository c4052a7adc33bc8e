use std::time::Instant;

use crate::input::{InputEvent, InputState};

use super::ctx::{FrameCtx, WindowCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Answer to a runtime wake-up.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Wake {
    /// Request a redraw of the window.
    pub redraw: bool,
    /// Next instant the app wants to be woken; `None` sleeps until input.
    pub next_deadline: Option<Instant>,
}

impl Wake {
    /// Nothing to draw and nothing scheduled.
    #[inline]
    pub const fn idle() -> Self {
        Self { redraw: false, next_deadline: None }
    }
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called for every translated input event, after `input` has been updated.
    fn on_input(
        &mut self,
        window: &WindowCtx<'_>,
        input: &InputState,
        event: &InputEvent,
    ) -> AppControl {
        let _ = (window, input, event);
        AppControl::Continue
    }

    /// Called whenever the loop is about to sleep.
    ///
    /// Apps with timers drain due ticks here and report their next deadline.
    fn on_wake(&mut self, now: Instant) -> Wake {
        let _ = now;
        Wake::idle()
    }

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
