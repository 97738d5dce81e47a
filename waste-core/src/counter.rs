//! The "seconds wasted" counter.
//!
//! Advances in whole seconds only. When the event loop stalls, every full
//! second that passed is added at once and the sub-second remainder is
//! dropped, so the count never runs ahead of the wall clock.

use std::time::{Duration, Instant};

pub const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct WasteCounter {
    count: u64,
    last_tick: Instant,
}

impl WasteCounter {
    pub fn start(now: Instant) -> Self {
        Self {
            count: 0,
            last_tick: now,
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Advance the counter. Returns the new count when at least one second
    /// elapsed since the previous tick, `None` otherwise.
    pub fn tick(&mut self, now: Instant) -> Option<u64> {
        let elapsed = now.saturating_duration_since(self.last_tick);
        if elapsed < TICK {
            return None;
        }

        self.last_tick = now;
        let whole = u64::try_from(elapsed.as_millis() / 1000).unwrap_or(u64::MAX);
        self.count = self.count.saturating_add(whole);

        tracing::trace!(count = self.count, elapsed_ms = elapsed.as_millis() as u64, "tick");
        Some(self.count)
    }

    /// When the next tick is due.
    pub fn next_due(&self) -> Instant {
        self.last_tick + TICK
    }

    /// Decimal text drawn on screen.
    pub fn label(&self) -> String {
        self.count.to_string()
    }
}
