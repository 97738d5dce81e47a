//! Fixed frame-rate pacing.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    budget: Option<Duration>,
}

impl FramePacer {
    /// Budget is `1000 / fps` whole milliseconds. `fps == 0` disables pacing.
    pub fn from_fps(fps: u32) -> Self {
        let budget = (fps > 0).then(|| Duration::from_millis(u64::from(1000 / fps)));
        Self { budget }
    }

    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    /// Time still left in the frame that began at `frame_started`.
    /// `None` once the budget is spent (or when unpaced).
    pub fn remaining(&self, frame_started: Instant, now: Instant) -> Option<Duration> {
        let budget = self.budget?;
        let spent = now.saturating_duration_since(frame_started);
        budget.checked_sub(spent).filter(|left| !left.is_zero())
    }

    /// Earliest instant the next frame may start.
    pub fn deadline(&self, frame_started: Instant) -> Instant {
        match self.budget {
            Some(budget) => frame_started + budget,
            None => frame_started,
        }
    }
}
