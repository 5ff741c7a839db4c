use crate::easing::Easing;

/// A single animated scalar timeline.
///
/// Created finished; `start_scroll` arms it with a start value, a delta and a
/// duration. The actual start time is captured on the first
/// `compute_scroll_offset` call, so callers never need a clock of their own.
/// Once `duration` has elapsed the timeline snaps to its eased final value and
/// yields it forever; the only way to restart is a new `start_scroll`.
#[derive(Debug, Clone)]
pub struct PositionScroller {
    easing: Easing,
    start: f32,
    delta: f32,
    start_time_ms: Option<u64>,
    duration_ms: u64,
    curr: f32,
    finished: bool,
}

impl PositionScroller {
    pub fn new(easing: Easing) -> Self {
        Self {
            easing,
            start: 0.0,
            delta: 0.0,
            start_time_ms: None,
            duration_ms: 0,
            curr: 0.0,
            finished: true,
        }
    }

    /// Arms a new scroll from `start` over `delta` lasting `duration_ms`.
    /// Replaces whatever timeline was active before.
    pub fn start_scroll(&mut self, start: f32, delta: f32, duration_ms: u64) {
        self.start = start;
        self.delta = delta;
        self.duration_ms = duration_ms;
        self.start_time_ms = None;
        self.curr = start;
        self.finished = false;
    }

    /// Advances the timeline to `now_ms`. Returns false when the timeline had
    /// already finished before this call; the current value is then stale and
    /// callers should rely on `final_value`.
    pub fn compute_scroll_offset(&mut self, now_ms: u64) -> bool {
        if self.finished {
            return false;
        }

        let start_time = *self.start_time_ms.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(start_time);
        if elapsed < self.duration_ms {
            let fraction = elapsed as f32 / self.duration_ms as f32;
            self.curr = self.start + self.delta * self.easing.transform(fraction);
        } else {
            self.curr = self.final_value();
            self.finished = true;
        }
        true
    }

    pub fn curr(&self) -> f32 {
        self.curr
    }

    /// The value the timeline settles on: the eased end of the curve. For
    /// monotone curves this is `start + delta`; for out-and-back curves such
    /// as [`Easing::Peek`] it is the start value again.
    pub fn final_value(&self) -> f32 {
        self.start + self.delta * self.easing.transform(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Jumps to the final value and marks the timeline finished. Calling this
    /// on a finished or never-started timeline is a no-op.
    pub fn abort_animation(&mut self) {
        if !self.finished {
            self.curr = self.final_value();
            self.finished = true;
        }
    }
}

#[cfg(test)]
#[path = "tests/scroller_tests.rs"]
mod tests;
