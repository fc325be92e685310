use std::time::Duration;

/// Sampling state of a capture session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CadenceState {
    Idle,
    Sampling { last_evaluated_at: Duration },
}

/// Fixed-rate admission of detection updates to the quality gate.
///
/// Updates arriving before the interval has elapsed since the last
/// admission are dropped, not queued, so evaluation cost stays bounded
/// whatever the detector's frame rate. Times are positions on the
/// session's monotonic clock.
#[derive(Clone, Debug)]
pub struct CadenceController {
    interval: Duration,
    state: CadenceState,
}

impl CadenceController {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: CadenceState::Idle,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> CadenceState {
        self.state
    }

    pub fn is_sampling(&self) -> bool {
        matches!(self.state, CadenceState::Sampling { .. })
    }

    /// Begins (or restarts) sampling with `now` as the baseline.
    pub fn start(&mut self, now: Duration) {
        self.state = CadenceState::Sampling {
            last_evaluated_at: now,
        };
    }

    pub fn stop(&mut self) {
        self.state = CadenceState::Idle;
    }

    /// Decides whether the update observed at `now` is evaluated, advancing
    /// the baseline when it is. Always `false` while idle.
    pub fn admit(&mut self, now: Duration) -> bool {
        match self.state {
            CadenceState::Idle => false,
            CadenceState::Sampling { last_evaluated_at } => {
                if now.saturating_sub(last_evaluated_at) < self.interval {
                    return false;
                }
                self.state = CadenceState::Sampling {
                    last_evaluated_at: now,
                };
                true
            }
        }
    }
}
