//! Customer data ingestion utilities.
//!
//! Finds raw customer CSV files in a directory and loads them into Polars
//! DataFrames with every column kept as text, so that the cleaner sees the
//! cells exactly as they were written.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use custclean_ingest::{discover_files, read_customer_csv};
//!
//! for path in discover_files(Path::new("data/raw"), "dirty")? {
//!     let df = read_customer_csv(&path)?;
//!     println!("{}: {} rows", path.display(), df.height());
//! }
//! ```

mod csv;
mod discovery;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    MAX_CSV_FILE_SIZE, NA_VALUES, check_file_size_with_limit, read_customer_csv, validate_encoding,
};

// === File Discovery ===
pub use discovery::{cleaned_file_name, discover_files, list_csv_files};
