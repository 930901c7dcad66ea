use thiserror::Error;

/// Table shape problems that make a cleaning run impossible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("required column '{column}' not found")]
    MissingColumn { column: String },
}

pub type Result<T> = std::result::Result<T, SchemaError>;
