//! Numeric normalization: age clipping and purchase amounts.

use custclean_model::{AGE_MAX, AGE_MIN};

/// What [`clip_age`] had to do to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeClip {
    Unchanged,
    RaisedToMin,
    LoweredToMax,
}

/// Clip a whole-number age into `AGE_MIN..=AGE_MAX`.
pub fn clip_age(age: f64) -> (i64, AgeClip) {
    if age < AGE_MIN as f64 {
        (AGE_MIN, AgeClip::RaisedToMin)
    } else if age > AGE_MAX as f64 {
        (AGE_MAX, AgeClip::LoweredToMax)
    } else {
        (age as i64, AgeClip::Unchanged)
    }
}

/// Replace a negative amount with zero. The flag reports a fix.
pub fn fix_purchase_amount(amount: f64) -> (f64, bool) {
    if amount < 0.0 {
        (0.0, true)
    } else {
        (amount, false)
    }
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
