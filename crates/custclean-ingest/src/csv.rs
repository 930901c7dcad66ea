//! CSV loading for raw customer files.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::{CsvParseOptions, CsvReadOptions, DataFrame, NullValues, SerReader};

use crate::error::{IngestError, Result};

pub use custclean_model::NA_VALUES;

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

fn open_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Check file size against a limit, returning the size on success.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<u64> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(metadata.len())
}

/// Reject UTF-16 input; UTF-8 with or without BOM is accepted.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

/// Reads a customer CSV file into a DataFrame.
///
/// The first line is the header. Schema inference is disabled so every
/// column arrives as `String`; empty fields and [`NA_VALUES`] become nulls.
/// Whitespace is kept as written. Typing is left to the cleaner, which
/// knows what each column should hold.
pub fn read_customer_csv(path: &Path) -> Result<DataFrame> {
    let size = check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)?;
    if size == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    validate_encoding(path)?;

    let null_values = NullValues::AllColumns(
        NA_VALUES
            .iter()
            .map(|value| (*value).into())
            .collect(),
    );
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_parse_options(CsvParseOptions::default().with_null_values(Some(null_values)))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.width() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded customer csv"
    );
    Ok(df)
}
