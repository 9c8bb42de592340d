//! Fixed-interval tick source.
//!
//! The runner polls the clock between key events. Every elapsed interval
//! yields one `Action::Tick(count)` with a strictly increasing count. After a
//! long stall (terminal suspended, slow frame) at most `MAX_CATCH_UP` ticks are
//! emitted and the schedule resynchronises to `now`.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;

use crate::types::Action;

/// Upper bound on ticks emitted by a single poll
pub const MAX_CATCH_UP: usize = 8;

#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    next_due: Instant,
    count: u64,
}

impl TickClock {
    /// First tick is due one interval after `now`
    pub fn new(interval: Duration, now: Instant) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        Self {
            interval,
            next_due: now + interval,
            count: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of ticks emitted so far
    pub fn count(&self) -> u64 {
        self.count
    }

    /// How long the caller may block waiting for input
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Emit every tick that has come due by `now`
    pub fn poll(&mut self, now: Instant) -> ArrayVec<Action, MAX_CATCH_UP> {
        let mut ticks = ArrayVec::new();
        while self.next_due <= now {
            if ticks.is_full() {
                self.next_due = now + self.interval;
                break;
            }
            self.count += 1;
            ticks.push(Action::Tick(self.count));
            self.next_due += self.interval;
        }
        ticks
    }
}
