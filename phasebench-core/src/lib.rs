#![warn(missing_docs)]
//! PhaseBench Core - Timing Primitives
//!
//! This crate provides the measurement layer:
//! - `Clock` abstraction: a monotonic production clock plus a manual test clock
//! - `ScopeTimer` for named intervals with exactly-once reporting
//! - `Stopwatch` for cumulative and per-phase readings
//! - A warmup-then-measure benchmark loop collecting per-iteration samples

mod bench;
mod clock;
mod scope;
mod stopwatch;

pub use bench::{BenchConfig, BenchResult, run, run_with_clock};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use scope::ScopeTimer;
pub use stopwatch::Stopwatch;
