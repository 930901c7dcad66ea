//! Per-value normalization rules.
//!
//! Each function here works on one already-coerced value; the column-level
//! sequencing and report accounting live in [`crate::cleaner`].

pub mod country;
pub mod datetime;
pub mod email;
pub mod numeric;
pub mod text;

pub use country::{COUNTRY_STANDARD, standardize_country};
pub use datetime::{median_datetime, parse_signup_date, parse_signup_datetime};
pub use email::{EMAIL_PATTERN, is_valid_email};
pub use numeric::{AgeClip, clip_age, fix_purchase_amount};
pub use text::{BLANK_NAME, BRONZE_TIER, UNKNOWN_TIER, is_blank_name, replace_unknown_tier};
