//! Quality checks for cleaned customer tables.
//!
//! [`check_cleaned`] re-verifies the guarantees of the cleaner on a table
//! read back from disk: every column present, no missing values, valid and
//! unique emails, parsable signup dates, ages within bounds, non-negative
//! purchase amounts and no `UNKNOWN` loyalty tier.

mod checks;

pub use checks::{MAX_SAMPLES, check_cleaned};
