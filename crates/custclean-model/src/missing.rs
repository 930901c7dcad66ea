//! Text spellings that stand for a missing value in customer files.

/// Cell spellings read as missing values, on top of empty fields.
///
/// The CSV reader turns these into nulls, so no cleaned text value may be
/// written with one of these spellings.
pub const NA_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True when `value` would be read back as a missing cell.
pub fn is_na_spelling(value: &str) -> bool {
    NA_VALUES.contains(&value)
}
