use std::time::{Duration, Instant};

use super::{TickHandle, TickSource};

/// Ticks owed to a schedule at a given instant.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DueTicks {
    pub handle: TickHandle,
    pub count: u32,
}

#[derive(Debug, Clone)]
struct Schedule {
    handle: TickHandle,
    interval: Duration,
    next: Instant,
}

/// Fixed-interval scheduler expressed as deadlines.
///
/// Intended usage:
/// - ask [`next_deadline`](Self::next_deadline) and sleep until then
/// - on wake, call [`due`](Self::due) and deliver that many ticks
///
/// Holds at most one schedule; scheduling again replaces it.
///
/// Catch-up is clamped: after a long stall (debugger, minimized window) at most
/// `max_catch_up` ticks are reported and the phase restarts from `now`.
#[derive(Debug, Clone)]
pub struct IntervalTicker {
    current: Option<Schedule>,
    next_id: u64,
    max_catch_up: u32,
}

impl IntervalTicker {
    pub fn new() -> Self {
        Self::with_max_catch_up(8)
    }

    pub fn with_max_catch_up(max_catch_up: u32) -> Self {
        debug_assert!(max_catch_up >= 1);
        Self {
            current: None,
            next_id: 0,
            max_catch_up: max_catch_up.max(1),
        }
    }

    /// Schedules with an explicit phase origin; the first tick is due at
    /// `start + interval`.
    pub fn schedule_from(&mut self, interval: Duration, start: Instant) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle::from_raw(self.next_id);
        let interval = interval.max(Duration::from_micros(100));
        if let Some(old) = self.current.take() {
            log::debug!("interval ticker: schedule {:?} replaced", old.handle);
        }
        self.current = Some(Schedule {
            handle,
            interval,
            next: start + interval,
        });
        handle
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Instant at which the next tick is due, if anything is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(|s| s.next)
    }

    /// Consumes the ticks due at `now`.
    ///
    /// Returns `None` if nothing is scheduled or the next deadline is in the future.
    pub fn due(&mut self, now: Instant) -> Option<DueTicks> {
        let sched = self.current.as_mut()?;
        if now < sched.next {
            return None;
        }

        let behind = now.saturating_duration_since(sched.next);
        let owed = 1 + (behind.as_nanos() / sched.interval.as_nanos()) as u64;

        let count = if owed > self.max_catch_up as u64 {
            log::debug!("interval ticker: dropping {} ticks after stall", owed - self.max_catch_up as u64);
            sched.next = now + sched.interval;
            self.max_catch_up
        } else {
            sched.next += sched.interval * owed as u32;
            owed as u32
        };

        Some(DueTicks { handle: sched.handle, count })
    }
}

impl Default for IntervalTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for IntervalTicker {
    fn schedule(&mut self, interval: Duration) -> TickHandle {
        self.schedule_from(interval, Instant::now())
    }

    fn cancel(&mut self, handle: TickHandle) {
        if self.current.as_ref().is_some_and(|s| s.handle == handle) {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(4);

    #[test]
    fn nothing_due_before_first_deadline() {
        let start = Instant::now();
        let mut t = IntervalTicker::new();
        t.schedule_from(STEP, start);
        assert_eq!(t.next_deadline(), Some(start + STEP));
        assert_eq!(t.due(start + Duration::from_millis(3)), None);
    }

    #[test]
    fn reports_elapsed_ticks_and_advances_phase() {
        let start = Instant::now();
        let mut t = IntervalTicker::new();
        let h = t.schedule_from(STEP, start);

        let due = t.due(start + Duration::from_millis(13));
        assert_eq!(due, Some(DueTicks { handle: h, count: 3 }));
        assert_eq!(t.next_deadline(), Some(start + Duration::from_millis(16)));
    }

    #[test]
    fn catch_up_is_clamped_after_stall() {
        let start = Instant::now();
        let mut t = IntervalTicker::with_max_catch_up(4);
        t.schedule_from(STEP, start);

        let now = start + Duration::from_secs(2);
        let due = t.due(now).map(|d| d.count);
        assert_eq!(due, Some(4));
        assert_eq!(t.next_deadline(), Some(now + STEP));
    }

    #[test]
    fn cancel_stops_deadlines() {
        let start = Instant::now();
        let mut t = IntervalTicker::new();
        let h = t.schedule_from(STEP, start);
        t.cancel(h);
        assert_eq!(t.next_deadline(), None);
        assert_eq!(t.due(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn cancel_of_stale_handle_keeps_current_schedule() {
        let start = Instant::now();
        let mut t = IntervalTicker::new();
        let old = t.schedule_from(STEP, start);
        let new = t.schedule_from(STEP, start);
        t.cancel(old);
        assert!(t.is_active());
        assert_eq!(t.due(start + STEP).map(|d| d.handle), Some(new));
    }
}
