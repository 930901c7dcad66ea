//! Cell coercion from Polars `AnyValue`s to the semantic type of a column.
//!
//! Every parser returns `Result<Option<T>, ParseFailure>`: `Ok(None)` for a
//! missing cell, `Err` for a cell that is present but unreadable. Raw CSV
//! input arrives as strings, while tables built in memory (or re-read
//! cleaned output) may already hold numbers and dates, so every parser
//! accepts both. NA spellings such as `"NaN"` are turned into nulls by the
//! CSV reader, not here; only a floating-point NaN counts as missing.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use polars::prelude::AnyValue;

use crate::error::ParseFailure;
use crate::normalization::datetime::{date_from_epoch_days, parse_signup_datetime};
use crate::normalization::numeric::format_numeric;

/// Converts a cell to text, `None` for missing cells.
///
/// Strings are returned untouched (no trimming) so that rules can tell a
/// blank `" "` apart from a missing value.
pub fn cell_text(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::String(s) => Some(s.to_string()),
        AnyValue::StringOwned(s) => Some(s.to_string()),
        AnyValue::Int8(v) => Some(v.to_string()),
        AnyValue::Int16(v) => Some(v.to_string()),
        AnyValue::Int32(v) => Some(v.to_string()),
        AnyValue::Int64(v) => Some(v.to_string()),
        AnyValue::UInt8(v) => Some(v.to_string()),
        AnyValue::UInt16(v) => Some(v.to_string()),
        AnyValue::UInt32(v) => Some(v.to_string()),
        AnyValue::UInt64(v) => Some(v.to_string()),
        AnyValue::Float32(v) if v.is_nan() => None,
        AnyValue::Float64(v) if v.is_nan() => None,
        AnyValue::Float32(v) => Some(format_numeric(f64::from(v))),
        AnyValue::Float64(v) => Some(format_numeric(v)),
        AnyValue::Boolean(b) => Some(b.to_string()),
        AnyValue::Date(days) => {
            date_from_epoch_days(days).map(|date| date.format("%Y-%m-%d").to_string())
        }
        other => Some(other.to_string()),
    }
}

/// Reads a cell as a finite number. NaN is missing, infinities are failures.
pub fn parse_number(value: AnyValue<'_>) -> Result<Option<f64>, ParseFailure> {
    match read_number(value)? {
        Some(number) if number.is_infinite() => {
            Err(ParseFailure::new(number.to_string(), "finite number"))
        }
        other => Ok(other),
    }
}

/// Reads a purchase amount.
///
/// Like [`parse_number`], except that negative infinity is returned as is:
/// it is a negative amount and gets clipped like one.
pub fn parse_amount(value: AnyValue<'_>) -> Result<Option<f64>, ParseFailure> {
    match read_number(value)? {
        Some(number) if number.is_infinite() && number.is_sign_positive() => {
            Err(ParseFailure::new(number.to_string(), "finite number"))
        }
        other => Ok(other),
    }
}

/// Any numeric reading of a cell, infinities included. NaN is missing.
fn read_number(value: AnyValue<'_>) -> Result<Option<f64>, ParseFailure> {
    let number = match value {
        AnyValue::Null => return Ok(None),
        AnyValue::Int8(v) => f64::from(v),
        AnyValue::Int16(v) => f64::from(v),
        AnyValue::Int32(v) => f64::from(v),
        AnyValue::Int64(v) => v as f64,
        AnyValue::UInt8(v) => f64::from(v),
        AnyValue::UInt16(v) => f64::from(v),
        AnyValue::UInt32(v) => f64::from(v),
        AnyValue::UInt64(v) => v as f64,
        AnyValue::Float32(v) => f64::from(v),
        AnyValue::Float64(v) => v,
        AnyValue::String(s) => return read_number_text(s),
        AnyValue::StringOwned(s) => return read_number_text(s.as_str()),
        other => return Err(ParseFailure::new(other.to_string(), "number")),
    };
    Ok((!number.is_nan()).then_some(number))
}

fn read_number_text(raw: &str) -> Result<Option<f64>, ParseFailure> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseFailure::new(raw, "number"));
    }
    let number = trimmed
        .parse::<f64>()
        .map_err(|_| ParseFailure::new(raw, "number"))?;
    Ok((!number.is_nan()).then_some(number))
}

/// Reads a cell as a whole number. Fractional values are failures.
pub fn parse_whole_number(value: AnyValue<'_>) -> Result<Option<f64>, ParseFailure> {
    match parse_number(value)? {
        Some(number) if number.fract() != 0.0 => {
            Err(ParseFailure::new(number.to_string(), "whole number"))
        }
        other => Ok(other),
    }
}

/// Reads a cell as a signup timestamp. Plain dates read as midnight.
pub fn parse_datetime(value: AnyValue<'_>) -> Result<Option<NaiveDateTime>, ParseFailure> {
    match value {
        AnyValue::Null => Ok(None),
        AnyValue::Date(days) => date_from_epoch_days(days)
            .map(|date| Some(date.and_time(NaiveTime::MIN)))
            .ok_or_else(|| ParseFailure::new(days.to_string(), "date")),
        AnyValue::String(s) => parse_datetime_text(s),
        AnyValue::StringOwned(s) => parse_datetime_text(s.as_str()),
        other => parse_datetime_text(&other.to_string()),
    }
}

/// Reads a cell as a calendar date, dropping any time of day.
pub fn parse_date(value: AnyValue<'_>) -> Result<Option<NaiveDate>, ParseFailure> {
    Ok(parse_datetime(value)?.map(|datetime| datetime.date()))
}

fn parse_datetime_text(raw: &str) -> Result<Option<NaiveDateTime>, ParseFailure> {
    parse_signup_datetime(raw)
        .map(Some)
        .ok_or_else(|| ParseFailure::new(raw, "date"))
}
