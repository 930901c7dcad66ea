//! Email address validation.

use std::sync::LazyLock;

use regex::Regex;

/// Word characters, dots and hyphens, `@`, a domain, a dot and a TLD.
pub const EMAIL_PATTERN: &str = r"^[\w.-]+@[\w.-]+\.\w+$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("Invalid email regex"));

/// Returns true if `value` matches [`EMAIL_PATTERN`] exactly.
///
/// Near misses are not repaired.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}
