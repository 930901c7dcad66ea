//! The customer cleaning pass.
//!
//! Rules run column by column in a fixed order. Later steps depend on
//! earlier ones: deduplication keys on the validated email, and the final
//! drop removes whatever the column rules left null.
//!
//! | Step | Column                 | Effect                                   | Counter                   |
//! |------|------------------------|------------------------------------------|---------------------------|
//! | 1    | `full_name`            | blank -> null                            | `empty_full_name` (`" "`) |
//! | 2    | `email`                | pattern mismatch or missing -> null      | `invalid_emails`          |
//! | 3    | `signup_date`          | unparsable -> null, then median fill     | `invalid_signup_dates`    |
//! | 4    | `country`              | upper-case + synonym map                 | -                         |
//! | 5    | `age`                  | unreadable -> null, clip to 16..=100     | `age_clipped_min`/`_max`  |
//! | 6    | `last_purchase_amount` | negative -> 0, missing -> 0.0            | `negative_purchase_fixed` |
//! | 7    | `loyalty_tier`         | `UNKNOWN` -> `BRONZE`                    | `unknown_loyalty`         |
//! | 8    | -                      | drop repeated emails, first kept         | `duplicates_removed`      |
//! | 9    | -                      | drop rows with any null left             | `rows_dropped_na`         |

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use custclean_model::{CleaningReport, CustomerColumn, CustomerRecord, is_na_spelling};
use polars::prelude::{Column, DataFrame};
use tracing::{debug, debug_span, trace, warn};

use crate::coerce::{cell_text, parse_amount, parse_datetime, parse_whole_number};
use crate::error::{ParseFailure, Result};
use crate::frame::{SourceColumns, cell, extra_columns, records_to_frame};
use crate::normalization::{
    AgeClip, BLANK_NAME, clip_age, fix_purchase_amount, is_blank_name, is_valid_email,
    median_datetime, replace_unknown_tier, standardize_country,
};

/// Clean a raw customer table.
///
/// The input is only read. Returns a new typed frame holding the rows that
/// survived every rule, in input order, and the report of what changed.
///
/// # Errors
///
/// [`CleanError::Schema`] when one of the seven customer columns is
/// missing; [`CleanError::Frame`] if the output frame cannot be built.
///
/// [`CleanError::Schema`]: crate::CleanError::Schema
/// [`CleanError::Frame`]: crate::CleanError::Frame
pub fn clean_customers(input: &DataFrame) -> Result<(DataFrame, CleaningReport)> {
    let source = SourceColumns::from_frame(input)?;
    let height = input.height();
    let span = debug_span!("clean_customers", rows_input = height);
    let _guard = span.enter();

    let extras = extra_columns(input);
    if !extras.is_empty() {
        warn!(columns = ?extras, "ignoring columns outside the customer layout");
    }

    let mut report = CleaningReport::new(height);
    let mut columns = CleanedColumns {
        full_name: clean_full_names(source.full_name, height, &mut report),
        email: clean_emails(source.email, height, &mut report),
        signup_date: clean_signup_dates(source.signup_date, height, &mut report),
        country: clean_countries(source.country, height),
        age: clean_ages(source.age, height, &mut report),
        last_purchase_amount: clean_purchase_amounts(
            source.last_purchase_amount,
            height,
            &mut report,
        ),
        loyalty_tier: clean_loyalty_tiers(source.loyalty_tier, height, &mut report),
    };

    let first_seen = first_email_occurrences(&columns.email, &mut report);

    let mut records = Vec::with_capacity(height);
    for (row, keep) in first_seen.into_iter().enumerate() {
        if !keep {
            continue;
        }
        match columns.take_record(row) {
            Some(record) => records.push(record),
            None => report.rows_dropped_na += 1,
        }
    }
    debug!(
        duplicates_removed = report.duplicates_removed,
        rows_dropped_na = report.rows_dropped_na,
        "row filters applied"
    );

    report.finish(records.len());
    let output = records_to_frame(&records)?;
    debug!(
        rows_output = report.rows_output,
        rows_dropped = report.rows_dropped,
        corrections = report.corrections(),
        "customer table cleaned"
    );
    Ok((output, report))
}

/// Per-column results of the cell rules, `None` where a cell is null.
struct CleanedColumns {
    full_name: Vec<Option<String>>,
    email: Vec<Option<String>>,
    signup_date: Vec<Option<NaiveDate>>,
    country: Vec<Option<String>>,
    age: Vec<Option<i64>>,
    last_purchase_amount: Vec<f64>,
    loyalty_tier: Vec<Option<String>>,
}

impl CleanedColumns {
    /// Move row `row` out as a record, or `None` if any column is null there.
    fn take_record(&mut self, row: usize) -> Option<CustomerRecord> {
        let (
            Some(full_name),
            Some(email),
            Some(signup_date),
            Some(country),
            Some(age),
            Some(loyalty_tier),
        ) = (
            self.full_name[row].take(),
            self.email[row].take(),
            self.signup_date[row],
            self.country[row].take(),
            self.age[row],
            self.loyalty_tier[row].take(),
        )
        else {
            return None;
        };
        Some(CustomerRecord {
            full_name,
            email,
            signup_date,
            country,
            age,
            last_purchase_amount: self.last_purchase_amount[row],
            loyalty_tier,
        })
    }
}

fn log_parse_failure(row: usize, column: CustomerColumn, failure: &ParseFailure) {
    trace!(
        row,
        column = column.as_str(),
        expected = failure.expected,
        "unreadable cell coerced to null"
    );
}

/// Text of a cell, `None` when missing or spelled like a missing value.
///
/// Cleaned text is written to CSV and read back, and the reader turns NA
/// spellings into nulls; such values are treated as missing up front.
fn present_text(column: &Column, row: usize) -> Option<String> {
    cell_text(cell(column, row)).filter(|text| !is_na_spelling(text))
}

fn clean_full_names(
    column: &Column,
    height: usize,
    report: &mut CleaningReport,
) -> Vec<Option<String>> {
    let values: Vec<Option<String>> = (0..height)
        .map(|row| match present_text(column, row) {
            Some(name) if is_blank_name(&name) => {
                if name == BLANK_NAME {
                    report.empty_full_name += 1;
                }
                None
            }
            other => other,
        })
        .collect();
    debug!(empty_full_name = report.empty_full_name, "full_name rule applied");
    values
}

fn clean_emails(
    column: &Column,
    height: usize,
    report: &mut CleaningReport,
) -> Vec<Option<String>> {
    let values: Vec<Option<String>> = (0..height)
        .map(|row| match cell_text(cell(column, row)) {
            Some(email) if is_valid_email(&email) => Some(email),
            _ => {
                report.invalid_emails += 1;
                None
            }
        })
        .collect();
    debug!(invalid_emails = report.invalid_emails, "email rule applied");
    values
}

fn clean_signup_dates(
    column: &Column,
    height: usize,
    report: &mut CleaningReport,
) -> Vec<Option<NaiveDate>> {
    let mut values: Vec<Option<NaiveDateTime>> = (0..height)
        .map(|row| match parse_datetime(cell(column, row)) {
            Ok(datetime) => datetime,
            Err(failure) => {
                log_parse_failure(row, CustomerColumn::SignupDate, &failure);
                None
            }
        })
        .collect();
    let parsed: Vec<NaiveDateTime> = values.iter().flatten().copied().collect();
    report.invalid_signup_dates = height - parsed.len();

    match median_datetime(&parsed) {
        Some(median) => {
            for value in values.iter_mut().filter(|value| value.is_none()) {
                *value = Some(median);
            }
            debug!(
                invalid_signup_dates = report.invalid_signup_dates,
                median = %median,
                "signup_date rule applied"
            );
        }
        None if height > 0 => {
            warn!(
                rows = height,
                "no signup_date could be parsed; every row will be dropped"
            );
        }
        None => {}
    }
    values
        .into_iter()
        .map(|value| value.map(|datetime| datetime.date()))
        .collect()
}

fn clean_countries(column: &Column, height: usize) -> Vec<Option<String>> {
    (0..height)
        .map(|row| {
            let country = standardize_country(&present_text(column, row)?);
            if is_na_spelling(&country) {
                trace!(row, "standardized country reads as missing");
                return None;
            }
            Some(country)
        })
        .collect()
}

fn clean_ages(column: &Column, height: usize, report: &mut CleaningReport) -> Vec<Option<i64>> {
    let values: Vec<Option<i64>> = (0..height)
        .map(|row| match parse_whole_number(cell(column, row)) {
            Ok(Some(age)) => {
                let (clipped, clip) = clip_age(age);
                match clip {
                    AgeClip::RaisedToMin => report.age_clipped_min += 1,
                    AgeClip::LoweredToMax => report.age_clipped_max += 1,
                    AgeClip::Unchanged => {}
                }
                Some(clipped)
            }
            Ok(None) => None,
            Err(failure) => {
                log_parse_failure(row, CustomerColumn::Age, &failure);
                None
            }
        })
        .collect();
    debug!(
        age_clipped_min = report.age_clipped_min,
        age_clipped_max = report.age_clipped_max,
        "age rule applied"
    );
    values
}

fn clean_purchase_amounts(column: &Column, height: usize, report: &mut CleaningReport) -> Vec<f64> {
    let values: Vec<f64> = (0..height)
        .map(|row| match parse_amount(cell(column, row)) {
            Ok(Some(amount)) => {
                let (fixed, was_negative) = fix_purchase_amount(amount);
                if was_negative {
                    report.negative_purchase_fixed += 1;
                }
                fixed
            }
            Ok(None) => 0.0,
            Err(failure) => {
                log_parse_failure(row, CustomerColumn::LastPurchaseAmount, &failure);
                0.0
            }
        })
        .collect();
    debug!(
        negative_purchase_fixed = report.negative_purchase_fixed,
        "last_purchase_amount rule applied"
    );
    values
}

fn clean_loyalty_tiers(
    column: &Column,
    height: usize,
    report: &mut CleaningReport,
) -> Vec<Option<String>> {
    let values: Vec<Option<String>> = (0..height)
        .map(|row| {
            present_text(column, row).map(|tier| {
                let (tier, replaced) = replace_unknown_tier(tier);
                if replaced {
                    report.unknown_loyalty += 1;
                }
                tier
            })
        })
        .collect();
    debug!(unknown_loyalty = report.unknown_loyalty, "loyalty_tier rule applied");
    values
}

/// Marks the first row of every email; later repeats are counted as
/// duplicates. Null emails never match one another.
fn first_email_occurrences(emails: &[Option<String>], report: &mut CleaningReport) -> Vec<bool> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(emails.len());
    emails
        .iter()
        .map(|email| match email {
            Some(email) if !seen.insert(email.as_str()) => {
                report.duplicates_removed += 1;
                false
            }
            _ => true,
        })
        .collect()
}
