//! Report Data Structures

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use phasebench_core::BenchResult;
use phasebench_stats::compute_summary;
use serde::{Deserialize, Serialize};

use crate::OutputFormat;
use crate::format::format_duration;
use crate::json::{ReportError, to_json};

/// Complete benchmark report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub entries: Vec<BenchEntry>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub version: String,
    pub generated_at: DateTime<Utc>,
}

/// Individual benchmark entry in the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchEntry {
    pub name: String,
    pub iterations: u64,
    pub sample_count: usize,
    /// Best (minimum) sample in nanoseconds
    pub best_ns: u64,
    pub mean_ns: f64,
    pub median_ns: f64,
    pub std_dev_ns: f64,
    pub min_ns: f64,
    pub max_ns: f64,
    pub p95_ns: f64,
    pub p99_ns: f64,
}

impl Report {
    /// Build a report from benchmark results, stamping the current time.
    pub fn new(results: &[BenchResult]) -> Self {
        Self {
            meta: ReportMeta {
                version: env!("CARGO_PKG_VERSION").to_string(),
                generated_at: Utc::now(),
            },
            entries: results.iter().map(BenchEntry::from_result).collect(),
        }
    }
}

impl BenchEntry {
    /// Summarize one benchmark result.
    pub fn from_result(result: &BenchResult) -> Self {
        let summary = compute_summary(&result.samples_f64());
        Self {
            name: result.name.clone(),
            iterations: result.iterations,
            sample_count: summary.sample_count,
            best_ns: result.best_ns(),
            mean_ns: summary.mean,
            median_ns: summary.median,
            std_dev_ns: summary.std_dev,
            min_ns: summary.min,
            max_ns: summary.max,
            p95_ns: summary.p95,
            p99_ns: summary.p99,
        }
    }
}

/// Write an aligned table of all entries.
pub fn render_human(report: &Report, out: &mut dyn Write) -> io::Result<()> {
    writeln!(
        out,
        "{:<24} {:>10} {:>12} {:>12} {:>12} {:>12}",
        "benchmark", "iters", "best", "mean", "median", "p99"
    )?;
    for entry in &report.entries {
        writeln!(
            out,
            "{:<24} {:>10} {:>12} {:>12} {:>12} {:>12}",
            entry.name,
            entry.iterations,
            format_duration(entry.best_ns as f64),
            format_duration(entry.mean_ns),
            format_duration(entry.median_ns),
            format_duration(entry.p99_ns),
        )?;
    }
    Ok(())
}

/// Render `report` in the requested format.
pub fn write_report(
    report: &Report,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Human => render_human(report, out)?,
        OutputFormat::Json => writeln!(out, "{}", to_json(report)?)?,
    }
    Ok(())
}
