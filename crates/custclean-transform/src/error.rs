//! Error types for the cleaner.

use custclean_model::SchemaError;
use thiserror::Error;

/// Errors that abort a cleaning call.
#[derive(Debug, Error)]
pub enum CleanError {
    /// An expected column is absent from the input table.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A cleaned table holds a value that cannot become a record.
    #[error("row {row}: column '{column}' is missing or invalid")]
    InvalidRecord { row: usize, column: &'static str },

    /// Building or reading a DataFrame failed.
    #[error("DataFrame operation failed: {message}")]
    Frame { message: String },
}

impl From<polars::prelude::PolarsError> for CleanError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Frame {
            message: err.to_string(),
        }
    }
}

/// A single cell that could not be read as its column's type.
///
/// Never escapes a cleaning call: the cell is coerced to null and the
/// owning rule decides what happens next.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot read '{raw}' as {expected}")]
pub struct ParseFailure {
    pub raw: String,
    pub expected: &'static str,
}

impl ParseFailure {
    pub fn new(raw: impl Into<String>, expected: &'static str) -> Self {
        Self {
            raw: raw.into(),
            expected,
        }
    }
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;
