/// Time sources for driving the animation
use std::time::{Duration, Instant};

/// Supplies frame timestamps
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by `Instant::now`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to, for deterministic frame sequences
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, by: Duration) {
        self.offset += by;
    }

    /// Step backwards, never before the clock's origin
    pub fn rewind(&mut self, by: Duration) {
        self.offset = self.offset.saturating_sub(by);
    }

    pub fn elapsed(&self) -> Duration {
        self.offset
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset
    }
}
