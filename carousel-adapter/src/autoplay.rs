/// A periodic source of "next" requests, sampled by the host clock.
///
/// The ticker holds no timer itself. The host calls [`Autoplay::tick`] from whatever loop it
/// already runs (a frame callback, an interval, a TUI event loop).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Autoplay {
    pub period_ms: u64,
    last_fire_ms: u64,
    paused: bool,
}

impl Autoplay {
    pub fn new(period_ms: u64, now_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            last_fire_ms: now_ms,
            paused: false,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resumes ticking; the next fire is one full period after `now_ms`.
    pub fn resume(&mut self, now_ms: u64) {
        self.paused = false;
        self.last_fire_ms = now_ms;
    }

    /// When the next fire is due, or `None` while paused.
    pub fn next_due_ms(&self) -> Option<u64> {
        if self.paused {
            return None;
        }
        Some(self.last_fire_ms.saturating_add(self.period_ms))
    }

    /// Returns `true` when a period has elapsed since the last fire.
    ///
    /// Fires at most once per call. The cadence stays fixed while the host keeps up; after a
    /// stall of two or more periods the missed fires collapse into one and the cadence restarts
    /// at `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(due) = self.next_due_ms() else {
            return false;
        };
        if now_ms < due {
            return false;
        }
        if now_ms.saturating_sub(self.last_fire_ms) >= self.period_ms.saturating_mul(2) {
            self.last_fire_ms = now_ms;
        } else {
            self.last_fire_ms = due;
        }
        true
    }
}
