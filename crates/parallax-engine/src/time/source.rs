use std::time::Duration;

/// Identifies one periodic schedule.
///
/// Handles are never reused, so a tick delivered for a cancelled schedule can be
/// recognized and dropped.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TickHandle(u64);

impl TickHandle {
    #[inline]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Periodic scheduling primitive.
///
/// `schedule` starts delivering ticks every `interval`; `cancel` stops them.
/// Cancelling an unknown or already-cancelled handle is a no-op.
pub trait TickSource {
    fn schedule(&mut self, interval: Duration) -> TickHandle;
    fn cancel(&mut self, handle: TickHandle);
}
