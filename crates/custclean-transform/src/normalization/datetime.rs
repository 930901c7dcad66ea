//! Signup date parsing and median fill.
//!
//! Accepted inputs, tried in order:
//!
//! - ISO 8601 dates (`2023-01-15`) and slash variants (`2023/01/15`)
//! - US month-first dates (`01/15/2023`)
//! - month names (`15 January 2023`, `Jan 15, 2023`)
//! - date-times in the same layouts, with or without a `T` separator,
//!   fractional seconds or an RFC 3339 offset
//!
//! Timestamps keep their time of day until the median fill is done; the
//! cleaned column holds calendar days only.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// Days from 0001-01-01 (CE day 1) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d %B %Y", "%B %d, %Y", "%d %b %Y", "%b %d, %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parse a raw signup timestamp. Plain dates read as midnight.
pub fn parse_signup_datetime(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime);
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|datetime| datetime.naive_local())
}

/// Parse a raw signup date, returning the calendar day.
pub fn parse_signup_date(raw: &str) -> Option<NaiveDate> {
    parse_signup_datetime(raw).map(|datetime| datetime.date())
}

/// Median of the given timestamps.
///
/// For an even count this is the midpoint of the two middle timestamps.
/// Returns `None` for an empty slice.
pub fn median_datetime(values: &[NaiveDateTime]) -> Option<NaiveDateTime> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let len = sorted.len();
    match len {
        0 => None,
        _ if len % 2 == 1 => Some(sorted[len / 2]),
        _ => {
            let lower = sorted[len / 2 - 1];
            let upper = sorted[len / 2];
            lower.checked_add_signed((upper - lower) / 2)
        }
    }
}

/// Days since 1970-01-01, the physical representation of a Polars `Date`.
pub fn epoch_days(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

/// Inverse of [`epoch_days`]; `None` when out of chrono's range.
pub fn date_from_epoch_days(days: i32) -> Option<NaiveDate> {
    days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}
