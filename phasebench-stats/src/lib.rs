#![warn(missing_docs)]
//! PhaseBench Stats - Summary Statistics
//!
//! Computes summary statistics over benchmark samples: central tendency,
//! spread, extremes, and tail percentiles.

mod summary;

pub use summary::{SummaryStatistics, compute_summary, percentile};
