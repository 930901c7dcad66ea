//! Error types for report writing.

use std::path::PathBuf;

use custclean_transform::CleanError;
use thiserror::Error;

/// Errors that can occur while writing pipeline outputs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    /// Failed to write a CSV file.
    #[error("Failed to write CSV {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to write a report file.
    #[error("Failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report payload could not be serialized.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// The table handed to a writer is not a cleaned customer table.
    #[error("Cannot write cleaned table: {0}")]
    Table(#[from] CleanError),
}

/// Result type for report writing.
pub type Result<T> = std::result::Result<T, ReportError>;
