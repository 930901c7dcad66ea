//! Cleaned CSV writer.

use std::path::Path;

use custclean_model::CustomerColumn;
use custclean_transform::normalization::numeric::format_numeric;
use custclean_transform::records_from_frame;
use polars::prelude::DataFrame;

use crate::error::{ReportError, Result};

/// Write a cleaned customer table as CSV.
///
/// Columns follow the canonical order; dates are written as `YYYY-MM-DD`
/// and amounts without trailing zeros. A table with no rows still gets its
/// header line.
pub fn write_cleaned_csv(path: &Path, df: &DataFrame) -> Result<()> {
    let records = records_from_frame(df)?;
    let csv_error = |source| ReportError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    writer
        .write_record(CustomerColumn::names())
        .map_err(csv_error)?;
    for record in &records {
        writer
            .write_record([
                record.full_name.clone(),
                record.email.clone(),
                record.signup_date.format("%Y-%m-%d").to_string(),
                record.country.clone(),
                record.age.to_string(),
                format_numeric(record.last_purchase_amount),
                record.loyalty_tier.clone(),
            ])
            .map_err(csv_error)?;
    }
    writer.flush().map_err(|source| ReportError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), rows = records.len(), "wrote cleaned csv");
    Ok(())
}
