//! Country code standardization.

/// Spellings folded onto their two-letter code, matched after upper-casing.
pub const COUNTRY_STANDARD: &[(&str, &str)] = &[("FRANCE", "FR"), ("FRA", "FR"), ("USA", "US")];

/// Upper-case a country value and map known synonyms.
///
/// Values outside [`COUNTRY_STANDARD`] pass through upper-cased.
pub fn standardize_country(raw: &str) -> String {
    let upper = raw.to_uppercase();
    COUNTRY_STANDARD
        .iter()
        .find(|(synonym, _)| *synonym == upper)
        .map_or(upper, |(_, code)| (*code).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_synonyms() {
        assert_eq!(standardize_country("France"), "FR");
        assert_eq!(standardize_country("fra"), "FR");
        assert_eq!(standardize_country("usa"), "US");
    }

    #[test]
    fn upper_cases_unknown_values() {
        assert_eq!(standardize_country("de"), "DE");
        assert_eq!(standardize_country("US"), "US");
        assert_eq!(standardize_country("United Kingdom"), "UNITED KINGDOM");
    }
}
