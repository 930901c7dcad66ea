//! Customer table cleaning.
//!
//! [`clean_customers`] takes a raw customer DataFrame, runs the fixed rule
//! sequence (name, email, signup date, country, age, purchase amount,
//! loyalty tier, deduplication, final missing-value drop) and returns a new
//! typed DataFrame together with a [`CleaningReport`] of every correction.
//!
//! # Example
//!
//! ```ignore
//! use custclean_transform::clean_customers;
//!
//! let (cleaned, report) = clean_customers(&raw)?;
//! assert_eq!(report.rows_output + report.rows_dropped, report.rows_input);
//! ```
//!
//! [`CleaningReport`]: custclean_model::CleaningReport

pub mod cleaner;
pub mod coerce;
pub mod error;
pub mod frame;
pub mod normalization;

pub use cleaner::clean_customers;
pub use error::{CleanError, ParseFailure, Result};
pub use frame::{records_from_frame, records_to_frame};
