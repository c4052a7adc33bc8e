use std::time::Duration;

use super::{TickHandle, TickSource};

/// Tick source that only fires when asked.
///
/// Records every schedule and cancel so callers can assert on the timer traffic.
#[derive(Debug, Default)]
pub struct ManualTicker {
    next_id: u64,
    active: Vec<(TickHandle, Duration)>,
    scheduled: u32,
    cancelled: u32,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handles that would receive a tick right now.
    ///
    /// Empty when nothing is scheduled.
    pub fn fire(&self) -> Vec<TickHandle> {
        self.active.iter().map(|(h, _)| *h).collect()
    }

    pub fn is_active(&self) -> bool {
        !self.active.is_empty()
    }

    /// Interval of the most recently scheduled live handle.
    pub fn interval(&self) -> Option<Duration> {
        self.active.last().map(|(_, d)| *d)
    }

    pub fn scheduled_count(&self) -> u32 {
        self.scheduled
    }

    pub fn cancelled_count(&self) -> u32 {
        self.cancelled
    }
}

impl TickSource for ManualTicker {
    fn schedule(&mut self, interval: Duration) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle::from_raw(self.next_id);
        self.active.push((handle, interval));
        self.scheduled += 1;
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        let before = self.active.len();
        self.active.retain(|(h, _)| *h != handle);
        if self.active.len() != before {
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_live_handles() {
        let mut t = ManualTicker::new();
        assert!(t.fire().is_empty());

        let h = t.schedule(Duration::from_millis(4));
        assert_eq!(t.fire(), vec![h]);
        assert_eq!(t.interval(), Some(Duration::from_millis(4)));

        t.cancel(h);
        assert!(t.fire().is_empty());
        assert!(!t.is_active());
    }

    #[test]
    fn cancelling_twice_counts_once() {
        let mut t = ManualTicker::new();
        let h = t.schedule(Duration::from_millis(4));
        t.cancel(h);
        t.cancel(h);
        assert_eq!(t.cancelled_count(), 1);
    }

    #[test]
    fn handles_are_unique() {
        let mut t = ManualTicker::new();
        let a = t.schedule(Duration::from_millis(1));
        t.cancel(a);
        let b = t.schedule(Duration::from_millis(1));
        assert_ne!(a, b);
    }
}
