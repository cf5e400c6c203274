//! Move timing.
//!
//! Time limits are advisory: the driver cannot interrupt an agent, it can
//! only measure how long the call took once it returns. All measurement
//! goes through [`Clock`] so tests can substitute a fake clock.

use std::fmt;
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock: fmt::Debug {
    /// Time elapsed since some fixed origin.
    fn now(&self) -> Duration;
}

/// Wall-clock time from [`Instant`].
///
/// Unlike process CPU time this also counts time an agent spends blocked
/// (sleeping, waiting on I/O).
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    origin: Instant,
}

impl WallClock {
    /// Create a clock whose origin is now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Remaining-time query handed to an agent for one move.
#[derive(Debug, Clone, Copy)]
pub struct TimeLeft<'a> {
    clock: &'a dyn Clock,
    started: Duration,
    limit_ms: u64,
}

impl<'a> TimeLeft<'a> {
    /// Start timing a move now. A limit of zero means unlimited.
    #[must_use]
    pub fn start(clock: &'a dyn Clock, limit_ms: u64) -> Self {
        Self {
            clock,
            started: clock.now(),
            limit_ms,
        }
    }

    /// Whether a limit is being enforced.
    #[must_use]
    pub const fn is_limited(&self) -> bool {
        self.limit_ms > 0
    }

    /// Time spent since the move started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_sub(self.started)
    }

    /// Milliseconds left before the deadline.
    ///
    /// Goes negative once the deadline has passed. Without a limit this is
    /// always `i64::MAX`.
    #[must_use]
    pub fn millis(&self) -> i64 {
        if !self.is_limited() {
            return i64::MAX;
        }
        let elapsed = i64::try_from(self.elapsed().as_millis()).unwrap_or(i64::MAX);
        i64::try_from(self.limit_ms)
            .unwrap_or(i64::MAX)
            .saturating_sub(elapsed)
    }

    /// Whether a limited move has used up its budget.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.is_limited() && self.millis() <= 0
    }
}
