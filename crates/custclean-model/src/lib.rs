//! Data model for the customer cleaning pipeline.
//!
//! Holds the typed [`CustomerRecord`], the canonical column layout shared by
//! every crate in the workspace, and the [`CleaningReport`] produced by one
//! cleaning run.

pub mod customer;
pub mod error;
pub mod missing;
pub mod quality;
pub mod report;

pub use customer::{AGE_MAX, AGE_MIN, CustomerColumn, CustomerRecord};
pub use error::{Result, SchemaError};
pub use missing::{NA_VALUES, is_na_spelling};
pub use quality::{QualityIssue, QualityReport, QualityRule};
pub use report::CleaningReport;
