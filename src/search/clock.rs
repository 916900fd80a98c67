use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// A monotonic time source for the search deadline.
pub trait Clock: Send + Sync {
    /// Time elapsed since the clock's own origin.
    fn now(&self) -> Duration;
}

/// Wall-clock time measured from when the clock was created.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that advances by a fixed tick every time it is read.
///
/// The search reads the clock once when it starts and once per iteration,
/// so a tick of `t` makes every iteration cost exactly `t`.
pub struct ManualClock {
    nanos: AtomicU64,
    tick: u64,
}

impl ManualClock {
    pub fn new(tick: Duration) -> Self {
        Self {
            nanos: AtomicU64::new(0),
            tick: tick.as_nanos() as u64,
        }
    }

    /// The current reading without advancing the clock.
    pub fn peek(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::Relaxed))
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.fetch_add(self.tick, Ordering::Relaxed))
    }
}
