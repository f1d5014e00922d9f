//! Monotonic time sources.
//!
//! Every measurement in this workspace goes through the `Clock` trait so tests
//! can substitute a deterministic clock. Production code uses `MonotonicClock`.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// A monotonic time source.
///
/// `now()` returns the time elapsed since an arbitrary epoch fixed at clock
/// construction. Implementations must never go backwards; wall-clock
/// adjustments must not be observable through this trait.
pub trait Clock {
    /// Current reading of the clock.
    fn now(&self) -> Duration;
}

/// Production clock backed by `std::time::Instant`.
///
/// `Instant` is guaranteed monotonic by the standard library, so system time
/// changes during a measurement cannot skew it.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    /// Create a clock whose epoch is the moment of construction.
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Deterministic clock for tests.
///
/// Time only moves when `advance` is called, and only forward. Clones share
/// the same underlying counter, so a test can keep one handle while the code
/// under test owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock reading zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `step`.
    pub fn advance(&self, step: Duration) {
        self.nanos
            .fetch_add(step.as_nanos() as u64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::SeqCst))
    }
}
