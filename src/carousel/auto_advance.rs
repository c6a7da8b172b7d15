//! Re-armable auto-advance timer.
//!
//! The timer is a deadline, not a running task: the event loop sleeps until the
//! earliest armed deadline and then polls. Dropping or disarming it is all the
//! cancellation there is, so nothing can fire after its owner is gone.

use std::time::{Duration, Instant};

/// One-shot deadline that re-arms itself after every fire.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    interval: Duration,
    deadline: Option<Instant>,
}

impl AutoAdvance {
    /// Create a disarmed timer.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Start a full interval from `now`, discarding any partially elapsed one.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Fire at most once if the deadline has passed.
    ///
    /// A fire re-arms from `now`, so a late poll never produces catch-up ticks.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.arm(now);
                true
            }
            _ => false,
        }
    }
}
