// SPDX-License-Identifier: MPL-2.0
//! Carousel autoplay scheduling.
//!
//! The driver owns no timer of its own. The pager polls it from its tick with
//! the current instant, which keeps it deterministic and means dropping the
//! schedule is all it takes to cancel.

use std::time::{Duration, Instant};

/// Delay added after a user interaction settles before autoplay resumes.
pub const AUTOPLAY_COOLDOWN: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Schedule {
    /// Autoplay disabled or disposed.
    Off,
    /// Enabled but no tick scheduled yet; the first poll arms it.
    Unarmed,
    Due(Instant),
    /// A user interaction is in progress.
    Suspended,
    /// Interaction ended; waiting for its animation to finish.
    AwaitingSettle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayDriver {
    interval: Duration,
    schedule: Schedule,
}

impl AutoplayDriver {
    /// Autoplay only runs when enabled and there is more than one page.
    #[must_use]
    pub fn new(enabled: bool, page_count: usize, interval: Duration) -> Self {
        let schedule = if enabled && page_count > 1 {
            Schedule::Unarmed
        } else {
            Schedule::Off
        };
        Self { interval, schedule }
    }

    /// Returns `true` when a tick is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.schedule {
            Schedule::Unarmed => {
                self.schedule = Schedule::Due(now + self.interval);
                false
            }
            Schedule::Due(due) if now >= due => {
                let mut next = due + self.interval;
                if next <= now {
                    next = now + self.interval;
                }
                self.schedule = Schedule::Due(next);
                true
            }
            _ => false,
        }
    }

    /// Drops the pending tick while the user interacts.
    pub fn suspend(&mut self) {
        if self.schedule != Schedule::Off {
            self.schedule = Schedule::Suspended;
        }
    }

    /// The interaction ended; resume once its animation completes.
    pub fn release(&mut self) {
        if self.schedule == Schedule::Suspended {
            self.schedule = Schedule::AwaitingSettle;
        }
    }

    /// Reschedules after the interaction's animation finished at `now`.
    pub fn on_settled(&mut self, now: Instant) {
        if self.schedule == Schedule::AwaitingSettle {
            self.schedule = Schedule::Due(now + AUTOPLAY_COOLDOWN + self.interval);
        }
    }

    /// Cancels all scheduling for good.
    pub fn cancel(&mut self) {
        self.schedule = Schedule::Off;
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.schedule != Schedule::Off
    }

    #[must_use]
    pub fn is_suspended(&self) -> bool {
        matches!(
            self.schedule,
            Schedule::Suspended | Schedule::AwaitingSettle
        )
    }

    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        match self.schedule {
            Schedule::Due(due) => Some(due),
            _ => None,
        }
    }
}

/// Next enabled page after `active_index`, wrapping to the start.
///
/// Returns `None` when every other page is disabled.
#[must_use]
pub fn next_enabled_index(
    active_index: usize,
    page_count: usize,
    is_disabled: impl Fn(usize) -> bool,
) -> Option<usize> {
    (1..page_count)
        .map(|step| (active_index + step) % page_count)
        .find(|&index| !is_disabled(index))
}
