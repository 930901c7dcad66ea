//! Cleaning report counters.

use serde::{Deserialize, Serialize};

/// Tally of everything one cleaning run changed or removed.
///
/// A fresh report is created per run. Totals are filled by
/// [`CleaningReport::finish`] once the output height is known, so that
/// `rows_output + rows_dropped == rows_input` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub rows_input: usize,
    pub empty_full_name: usize,
    pub invalid_emails: usize,
    pub invalid_signup_dates: usize,
    pub age_clipped_min: usize,
    pub age_clipped_max: usize,
    pub negative_purchase_fixed: usize,
    pub unknown_loyalty: usize,
    pub duplicates_removed: usize,
    pub rows_dropped_na: usize,
    pub rows_output: usize,
    pub rows_dropped: usize,
}

impl CleaningReport {
    pub fn new(rows_input: usize) -> Self {
        Self {
            rows_input,
            ..Self::default()
        }
    }

    /// Record the output height and derive the dropped total.
    pub fn finish(&mut self, rows_output: usize) {
        self.rows_output = rows_output;
        self.rows_dropped = self.rows_input.saturating_sub(rows_output);
    }

    /// Sum of the per-rule correction counters (totals excluded).
    pub fn corrections(&self) -> usize {
        self.correction_counters()
            .iter()
            .map(|(_, count)| count)
            .sum()
    }

    /// Returns true when no rule had to touch a single cell or row.
    pub fn is_clean(&self) -> bool {
        self.corrections() == 0
    }

    /// Per-rule counters with their report keys, in pipeline order.
    pub fn correction_counters(&self) -> [(&'static str, usize); 9] {
        [
            ("empty_full_name", self.empty_full_name),
            ("invalid_emails", self.invalid_emails),
            ("invalid_signup_dates", self.invalid_signup_dates),
            ("age_clipped_min", self.age_clipped_min),
            ("age_clipped_max", self.age_clipped_max),
            ("negative_purchase_fixed", self.negative_purchase_fixed),
            ("unknown_loyalty", self.unknown_loyalty),
            ("duplicates_removed", self.duplicates_removed),
            ("rows_dropped_na", self.rows_dropped_na),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_derives_dropped_rows() {
        let mut report = CleaningReport::new(10);
        report.finish(7);
        assert_eq!(report.rows_output, 7);
        assert_eq!(report.rows_dropped, 3);
        assert_eq!(report.rows_output + report.rows_dropped, report.rows_input);
    }

    #[test]
    fn corrections_exclude_totals() {
        let mut report = CleaningReport::new(5);
        report.invalid_emails = 2;
        report.duplicates_removed = 1;
        report.finish(2);
        assert_eq!(report.corrections(), 3);
        assert!(!report.is_clean());
    }

    #[test]
    fn fresh_report_is_clean() {
        assert!(CleaningReport::new(3).is_clean());
    }
}
