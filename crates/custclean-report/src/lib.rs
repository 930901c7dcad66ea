//! Output writers for the cleaning pipeline.
//!
//! - **Cleaned CSV**: the typed cleaned table in canonical column order
//! - **Text report**: a labelled, human-readable summary of one run
//! - **JSON report**: the same counters with schema and generation metadata

mod cleaned;
mod error;
mod summary;

pub use cleaned::write_cleaned_csv;
pub use error::{ReportError, Result};
pub use summary::{
    REPORT_SCHEMA, REPORT_SCHEMA_VERSION, render_report_text, write_report_json,
    write_report_text,
};
