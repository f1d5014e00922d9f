#![warn(missing_docs)]
//! # PhaseBench
//!
//! Scoped benchmark timing for phase-structured pipelines.
//!
//! PhaseBench grew out of timing exploratory pipeline experiments, where a
//! program runs a handful of named phases in sequence and the interesting
//! output is one wall-clock line per phase:
//!
//! ```text
//! enter planar
//! leave planar 12.481ms
//! enter interleaved
//! leave interleaved 9.934ms
//! ```
//!
//! - **Exactly-once reporting**: every opened interval is reported exactly
//!   once, even when the owning scope unwinds early.
//! - **Monotonic timing**: all measurements go through a monotonic clock, so
//!   wall-clock adjustments can never produce negative or skewed readings.
//! - **Deterministic tests**: every timing type accepts an injected clock.
//! - **Sampled benchmarking**: a warmup-then-measure loop with summary
//!   statistics and human/JSON reports.
//!
//! ## Quick start
//!
//! ```ignore
//! use phasebench::prelude::*;
//!
//! let mut timer = ScopeTimer::new("phase1");
//! run_phase_one();
//! timer.restart("phase2");
//! run_phase_two();
//! // dropping the timer reports phase2
//! ```

// Re-export timing primitives
pub use phasebench_core::{
    BenchConfig, BenchResult, Clock, ManualClock, MonotonicClock, ScopeTimer, Stopwatch, run,
    run_with_clock,
};

// Re-export statistics
pub use phasebench_stats::{SummaryStatistics, compute_summary, percentile};

// Re-export reporting
pub use phasebench_report::{
    BenchEntry, OutputFormat, Report, ReportError, ReportMeta, format_duration, format_ms,
    render_human, to_json, write_report,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        BenchConfig, OutputFormat, Report, ScopeTimer, Stopwatch, compute_summary, render_human,
        run, write_report,
    };
}
