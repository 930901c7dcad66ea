//! Customer record layout.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Youngest age kept after clipping.
pub const AGE_MIN: i64 = 16;
/// Oldest age kept after clipping.
pub const AGE_MAX: i64 = 100;

/// The seven columns of a customer table, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CustomerColumn {
    FullName,
    Email,
    SignupDate,
    Country,
    Age,
    LastPurchaseAmount,
    LoyaltyTier,
}

impl CustomerColumn {
    /// All columns in canonical order.
    pub const ALL: [CustomerColumn; 7] = [
        CustomerColumn::FullName,
        CustomerColumn::Email,
        CustomerColumn::SignupDate,
        CustomerColumn::Country,
        CustomerColumn::Age,
        CustomerColumn::LastPurchaseAmount,
        CustomerColumn::LoyaltyTier,
    ];

    /// Column header as it appears in the CSV files.
    pub const fn as_str(self) -> &'static str {
        match self {
            CustomerColumn::FullName => "full_name",
            CustomerColumn::Email => "email",
            CustomerColumn::SignupDate => "signup_date",
            CustomerColumn::Country => "country",
            CustomerColumn::Age => "age",
            CustomerColumn::LastPurchaseAmount => "last_purchase_amount",
            CustomerColumn::LoyaltyTier => "loyalty_tier",
        }
    }

    /// Header names in canonical order.
    pub fn names() -> [&'static str; 7] {
        Self::ALL.map(Self::as_str)
    }
}

impl fmt::Display for CustomerColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cleaned customer row.
///
/// Every field is present: a record only exists once a row has survived
/// cleaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub full_name: String,
    pub email: String,
    pub signup_date: NaiveDate,
    pub country: String,
    pub age: i64,
    pub last_purchase_amount: f64,
    pub loyalty_tier: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names_follow_canonical_order() {
        assert_eq!(
            CustomerColumn::names(),
            [
                "full_name",
                "email",
                "signup_date",
                "country",
                "age",
                "last_purchase_amount",
                "loyalty_tier",
            ]
        );
    }

    #[test]
    fn column_display_matches_header() {
        assert_eq!(CustomerColumn::SignupDate.to_string(), "signup_date");
    }
}
