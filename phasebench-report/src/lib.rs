#![warn(missing_docs)]
//! PhaseBench Report - Result Rendering
//!
//! Turns benchmark results into output:
//! - Human-readable terminal table
//! - JSON (machine-readable)

mod format;
mod json;
mod report;

pub use format::{format_duration, format_ms};
pub use json::{ReportError, to_json};
pub use report::{BenchEntry, Report, ReportMeta, render_human, write_report};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Human,
    /// JSON with full schema
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
