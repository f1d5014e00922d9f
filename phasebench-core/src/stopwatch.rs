//! Restartable stopwatch for cumulative and per-phase readings.

use std::time::Duration;

use crate::clock::{Clock, MonotonicClock};

/// Measures elapsed time since construction or the last reset.
///
/// Unlike [`ScopeTimer`](crate::ScopeTimer) this type reports nothing on its
/// own; callers read the elapsed value and decide what to do with it.
/// [`lap_ms`](Stopwatch::lap_ms) supports the measure-and-restart pattern
/// used when timing consecutive phases in a loop.
#[derive(Debug, Clone)]
pub struct Stopwatch<C: Clock = MonotonicClock> {
    clock: C,
    start: Duration,
}

impl Stopwatch {
    /// Start a stopwatch on the monotonic system clock.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Stopwatch<C> {
    /// Start a stopwatch on an explicit clock.
    pub fn with_clock(clock: C) -> Self {
        let start = clock.now();
        Self { clock, start }
    }

    /// Elapsed time since start or the last reset.
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_sub(self.start)
    }

    /// Elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }

    /// Restart from now without reading.
    pub fn reset(&mut self) {
        self.start = self.clock.now();
    }

    /// Elapsed milliseconds, then restart from now.
    pub fn lap_ms(&mut self) -> f64 {
        let ms = self.elapsed_ms();
        self.reset();
        ms
    }
}
