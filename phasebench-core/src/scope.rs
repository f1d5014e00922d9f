//! Scoped interval timer with exactly-once reporting.
//!
//! A `ScopeTimer` measures a sequence of named intervals within one lexical
//! scope. Opening an interval prints `enter <name>`; closing it prints
//! `leave <name> <elapsed>ms`. An interval still open when the timer goes out
//! of scope is closed by the drop glue, on every exit path including panics.

use std::io::{self, Write};
use std::time::Duration;

use crate::clock::{Clock, MonotonicClock};

/// Timer for a sequence of named intervals within one scope.
///
/// Each interval's start timestamp is held by the timer instance itself, so
/// independent timers never interfere with each other, nested or not.
///
/// State machine per interval: open on construction or [`restart`], closed by
/// [`finish`], [`restart`], or drop. Every opened interval is reported exactly
/// once; finishing an already-finished timer is a no-op.
///
/// ```text
/// enter phase1
/// leave phase1 10.042ms
/// enter phase2
/// leave phase2 20.187ms
/// ```
///
/// [`restart`]: ScopeTimer::restart
/// [`finish`]: ScopeTimer::finish
pub struct ScopeTimer<C: Clock = MonotonicClock, W: Write = io::Stdout> {
    name: String,
    start: Duration,
    finished: bool,
    clock: C,
    out: W,
}

impl ScopeTimer {
    /// Open an interval named `name`, reporting to stdout.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_parts(MonotonicClock::new(), io::stdout(), name)
    }
}

impl<C: Clock, W: Write> ScopeTimer<C, W> {
    /// Open an interval with an explicit clock and output sink.
    ///
    /// `name` must be non-empty.
    pub fn with_parts(clock: C, out: W, name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "interval name must be non-empty");
        let start = clock.now();
        let mut timer = Self {
            name,
            start,
            finished: false,
            clock,
            out,
        };
        timer.emit_enter();
        timer
    }

    /// Name of the current interval.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the current interval has been closed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Elapsed time of the current interval so far. Does not close it.
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_sub(self.start)
    }

    /// Close the current interval (if still open), then open a new interval
    /// named `name` starting now.
    ///
    /// Emits one `leave` line for the closed interval (when one was open)
    /// followed by one `enter` line for the new interval. `name` must be
    /// non-empty.
    pub fn restart(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug_assert!(!name.is_empty(), "interval name must be non-empty");
        if !self.finished {
            self.emit_leave();
        }
        self.name = name;
        self.finished = false;
        self.start = self.clock.now();
        self.emit_enter();
    }

    /// Close the current interval and report it.
    ///
    /// On an already-finished timer this is a no-op: the contract is exactly
    /// one report per opened interval, and a second report would be computed
    /// from a stale start timestamp.
    pub fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        self.emit_leave();
    }

    fn emit_enter(&mut self) {
        // Console reporting is not a fallible operation in this contract,
        // and the drop path could not surface an error anyway.
        let _ = writeln!(self.out, "enter {}", self.name);
    }

    fn emit_leave(&mut self) {
        let ms = self.elapsed().as_secs_f64() * 1000.0;
        let _ = writeln!(self.out, "leave {} {:.3}ms", self.name, ms);
    }
}

impl<C: Clock, W: Write> Drop for ScopeTimer<C, W> {
    fn drop(&mut self) {
        self.finish();
    }
}
