//! JSON report generation.

use thiserror::Error;

use crate::report::Report;

/// Errors from report rendering.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Output sink failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize a report to pretty-printed JSON.
pub fn to_json(report: &Report) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}
