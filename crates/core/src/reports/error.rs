//! Report error types.

use thiserror::Error;

/// Errors that can occur while rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// CSV encoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writing the output buffer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
