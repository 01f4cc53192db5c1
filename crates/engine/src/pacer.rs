/// Fixed-interval tick scheduling.
///
/// The host calls [`TickPacer::should_tick`] as often as it likes; only calls
/// at least `interval_ms` after the previous tick are let through. Early
/// calls are not an error, the caller just reschedules.
#[derive(Debug, Clone)]
pub struct TickPacer {
    interval_ms: u64,
    last_tick_ms: u64,
    has_ticked: bool,
}

impl TickPacer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_tick_ms: 0,
            has_ticked: false,
        }
    }

    /// Decide whether a tick is due at `now_ms`, and record it if so.
    pub fn should_tick(&mut self, now_ms: u64) -> bool {
        if self.has_ticked && now_ms.saturating_sub(self.last_tick_ms) < self.interval_ms {
            return false;
        }
        self.has_ticked = true;
        self.last_tick_ms = now_ms;
        true
    }

    /// Milliseconds until the next tick is due (0 if it already is).
    pub fn ms_until_next(&self, now_ms: u64) -> u64 {
        if !self.has_ticked {
            return 0;
        }
        let due = self.last_tick_ms.saturating_add(self.interval_ms);
        due.saturating_sub(now_ms)
    }
}
