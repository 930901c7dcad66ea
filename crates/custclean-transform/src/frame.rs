//! Conversions between customer DataFrames and [`CustomerRecord`]s.

use custclean_model::{CustomerColumn, CustomerRecord, SchemaError};
use polars::prelude::{AnyValue, Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};

use crate::coerce::{cell_text, parse_date, parse_number, parse_whole_number};
use crate::error::{CleanError, Result};
use crate::normalization::datetime::epoch_days;

/// Borrowed handles on the seven customer columns of a frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SourceColumns<'a> {
    pub full_name: &'a Column,
    pub email: &'a Column,
    pub signup_date: &'a Column,
    pub country: &'a Column,
    pub age: &'a Column,
    pub last_purchase_amount: &'a Column,
    pub loyalty_tier: &'a Column,
}

impl<'a> SourceColumns<'a> {
    /// Look up every customer column, failing on the first one absent.
    pub fn from_frame(df: &'a DataFrame) -> std::result::Result<Self, SchemaError> {
        let lookup = move |column: CustomerColumn| {
            df.column(column.as_str())
                .map_err(|_| SchemaError::MissingColumn {
                    column: column.as_str().to_string(),
                })
        };
        Ok(Self {
            full_name: lookup(CustomerColumn::FullName)?,
            email: lookup(CustomerColumn::Email)?,
            signup_date: lookup(CustomerColumn::SignupDate)?,
            country: lookup(CustomerColumn::Country)?,
            age: lookup(CustomerColumn::Age)?,
            last_purchase_amount: lookup(CustomerColumn::LastPurchaseAmount)?,
            loyalty_tier: lookup(CustomerColumn::LoyaltyTier)?,
        })
    }
}

/// Cell at `idx`, null when out of bounds.
pub(crate) fn cell(column: &Column, idx: usize) -> AnyValue<'_> {
    column.get(idx).unwrap_or(AnyValue::Null)
}

/// Column names of `df` that are not customer columns.
pub fn extra_columns(df: &DataFrame) -> Vec<String> {
    let known = CustomerColumn::names();
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .filter(|name| !known.contains(&name.as_str()))
        .collect()
}

/// Build a typed customer frame in canonical column order.
///
/// Column types: `String` for text, `Date` for `signup_date`, `Int64` for
/// `age`, `Float64` for `last_purchase_amount`.
pub fn records_to_frame(records: &[CustomerRecord]) -> Result<DataFrame> {
    let days: Vec<i32> = records
        .iter()
        .map(|record| epoch_days(record.signup_date))
        .collect();
    let signup_date = Series::new(CustomerColumn::SignupDate.as_str().into(), days)
        .cast(&DataType::Date)?
        .into_column();
    let ages: Vec<i64> = records.iter().map(|record| record.age).collect();
    let amounts: Vec<f64> = records
        .iter()
        .map(|record| record.last_purchase_amount)
        .collect();

    let columns = vec![
        text_column(
            CustomerColumn::FullName,
            records.iter().map(|record| record.full_name.as_str()),
        ),
        text_column(
            CustomerColumn::Email,
            records.iter().map(|record| record.email.as_str()),
        ),
        signup_date,
        text_column(
            CustomerColumn::Country,
            records.iter().map(|record| record.country.as_str()),
        ),
        Column::new(CustomerColumn::Age.as_str().into(), ages),
        Column::new(CustomerColumn::LastPurchaseAmount.as_str().into(), amounts),
        text_column(
            CustomerColumn::LoyaltyTier,
            records.iter().map(|record| record.loyalty_tier.as_str()),
        ),
    ];
    DataFrame::new(columns).map_err(Into::into)
}

fn text_column<'a>(column: CustomerColumn, values: impl Iterator<Item = &'a str>) -> Column {
    Column::new(column.as_str().into(), values.collect::<Vec<&str>>())
}

/// Read a cleaned customer frame back into records.
///
/// Every cell must be present and readable as its column type; the first
/// offending cell is reported as [`CleanError::InvalidRecord`].
pub fn records_from_frame(df: &DataFrame) -> Result<Vec<CustomerRecord>> {
    let source = SourceColumns::from_frame(df)?;
    let invalid = |row: usize, column: CustomerColumn| CleanError::InvalidRecord {
        row,
        column: column.as_str(),
    };

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let full_name = cell_text(cell(source.full_name, row))
            .ok_or_else(|| invalid(row, CustomerColumn::FullName))?;
        let email = cell_text(cell(source.email, row))
            .ok_or_else(|| invalid(row, CustomerColumn::Email))?;
        let signup_date = parse_date(cell(source.signup_date, row))
            .ok()
            .flatten()
            .ok_or_else(|| invalid(row, CustomerColumn::SignupDate))?;
        let country = cell_text(cell(source.country, row))
            .ok_or_else(|| invalid(row, CustomerColumn::Country))?;
        let age = parse_whole_number(cell(source.age, row))
            .ok()
            .flatten()
            .ok_or_else(|| invalid(row, CustomerColumn::Age))?;
        let last_purchase_amount = parse_number(cell(source.last_purchase_amount, row))
            .ok()
            .flatten()
            .ok_or_else(|| invalid(row, CustomerColumn::LastPurchaseAmount))?;
        let loyalty_tier = cell_text(cell(source.loyalty_tier, row))
            .ok_or_else(|| invalid(row, CustomerColumn::LoyaltyTier))?;
        records.push(CustomerRecord {
            full_name,
            email,
            signup_date,
            country,
            age: age as i64,
            last_purchase_amount,
            loyalty_tier,
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(email: &str, age: i64) -> CustomerRecord {
        CustomerRecord {
            full_name: "Alice Martin".to_string(),
            email: email.to_string(),
            signup_date: NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
            country: "FR".to_string(),
            age,
            last_purchase_amount: 12.5,
            loyalty_tier: "GOLD".to_string(),
        }
    }

    #[test]
    fn frame_has_canonical_layout() {
        let df = records_to_frame(&[record("a@test.com", 30)]).unwrap();
        let names: Vec<String> = df
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, CustomerColumn::names());
        assert_eq!(df.column("signup_date").unwrap().dtype(), &DataType::Date);
        assert_eq!(df.column("age").unwrap().dtype(), &DataType::Int64);
        assert_eq!(
            df.column("last_purchase_amount").unwrap().dtype(),
            &DataType::Float64
        );
    }

    #[test]
    fn records_survive_frame_conversion() {
        let records = vec![record("a@test.com", 30), record("b@test.com", 41)];
        let df = records_to_frame(&records).unwrap();
        assert_eq!(records_from_frame(&df).unwrap(), records);
    }

    #[test]
    fn empty_record_set_builds_empty_frame() {
        let df = records_to_frame(&[]).unwrap();
        assert_eq!(df.shape(), (0, 7));
    }

    #[test]
    fn missing_column_is_schema_error() {
        let df = DataFrame::new(vec![Column::new("full_name".into(), vec!["Alice"])]).unwrap();
        let err = records_from_frame(&df).unwrap_err();
        assert!(matches!(
            err,
            CleanError::Schema(SchemaError::MissingColumn { ref column }) if column == "email"
        ));
    }

    #[test]
    fn extra_columns_are_listed() {
        let mut df = records_to_frame(&[record("a@test.com", 30)]).unwrap();
        df.with_column(Column::new("notes".into(), vec!["vip"]))
            .unwrap();
        assert_eq!(extra_columns(&df), vec!["notes".to_string()]);
    }
}
