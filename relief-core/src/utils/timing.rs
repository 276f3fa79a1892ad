use std::time::{Duration, Instant};

/// Implements a simple wall-clock timer used to bound solver search.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed time since start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Returns elapsed time in milliseconds.
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed().as_millis()
    }

    /// Returns true if the given budget is exhausted.
    pub fn is_expired(&self, budget: Duration) -> bool {
        self.elapsed() >= budget
    }
}
