//! Findings of the post-clean quality check.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Invariant checked on a cleaned customer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityRule {
    MissingColumn,
    BlankName,
    InvalidEmail,
    InvalidSignupDate,
    AgeOutOfRange,
    NegativePurchase,
    UnknownLoyalty,
    DuplicateEmail,
    MissingValue,
}

impl QualityRule {
    /// Stable short code used in tables and JSON output.
    pub const fn code(self) -> &'static str {
        match self {
            QualityRule::MissingColumn => "CQ001",
            QualityRule::BlankName => "CQ002",
            QualityRule::InvalidEmail => "CQ003",
            QualityRule::InvalidSignupDate => "CQ004",
            QualityRule::AgeOutOfRange => "CQ005",
            QualityRule::NegativePurchase => "CQ006",
            QualityRule::UnknownLoyalty => "CQ007",
            QualityRule::DuplicateEmail => "CQ008",
            QualityRule::MissingValue => "CQ009",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            QualityRule::MissingColumn => "required column not found",
            QualityRule::BlankName => "full_name is blank",
            QualityRule::InvalidEmail => "email does not match the address pattern",
            QualityRule::InvalidSignupDate => "signup_date is not a valid date",
            QualityRule::AgeOutOfRange => "age outside 16..=100",
            QualityRule::NegativePurchase => "negative last_purchase_amount",
            QualityRule::UnknownLoyalty => "loyalty_tier still UNKNOWN",
            QualityRule::DuplicateEmail => "email appears more than once",
            QualityRule::MissingValue => "missing value",
        }
    }
}

impl fmt::Display for QualityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One failing rule with how often it failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityIssue {
    pub rule: QualityRule,
    /// Column the rule looked at.
    pub column: String,
    /// Number of offending rows (1 for a missing column).
    pub count: usize,
    /// A few offending values, for the console.
    pub examples: Vec<String>,
}

/// Quality findings for one cleaned file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    pub source: String,
    pub rows: usize,
    pub issues: Vec<QualityIssue>,
}

impl QualityReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Total offending rows across all issues.
    pub fn violation_count(&self) -> usize {
        self.issues.iter().map(|issue| issue.count).sum()
    }

    pub fn has_rule(&self, rule: QualityRule) -> bool {
        self.issues.iter().any(|issue| issue.rule == rule)
    }
}
