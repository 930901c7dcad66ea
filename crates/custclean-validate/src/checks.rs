//! Column checks run by [`check_cleaned`].

use std::collections::HashSet;

use custclean_model::{AGE_MAX, AGE_MIN, CustomerColumn, QualityIssue, QualityReport, QualityRule};
use custclean_transform::coerce::{cell_text, parse_date, parse_number, parse_whole_number};
use custclean_transform::normalization::{UNKNOWN_TIER, is_blank_name, is_valid_email};
use polars::prelude::{AnyValue, Column, DataFrame};

/// Offending values kept per issue.
pub const MAX_SAMPLES: usize = 5;

/// Check a cleaned customer table against the output guarantees.
///
/// Missing columns are reported once each and their value checks skipped.
pub fn check_cleaned(source: &str, df: &DataFrame) -> QualityReport {
    let mut issues = Vec::new();

    for column in CustomerColumn::ALL {
        let Ok(values) = df.column(column.as_str()) else {
            issues.push(QualityIssue {
                rule: QualityRule::MissingColumn,
                column: column.as_str().to_string(),
                count: 1,
                examples: vec![],
            });
            continue;
        };
        let texts = column_texts(values, df.height());

        let missing = texts.iter().filter(|value| value.is_none()).count();
        if missing > 0 {
            issues.push(QualityIssue {
                rule: QualityRule::MissingValue,
                column: column.as_str().to_string(),
                count: missing,
                examples: vec![],
            });
        }

        let findings = match column {
            CustomerColumn::FullName => {
                collect_failures(QualityRule::BlankName, column, values, |_, text| {
                    is_blank_name(text)
                })
            }
            CustomerColumn::Email => {
                collect_failures(QualityRule::InvalidEmail, column, values, |_, text| {
                    !is_valid_email(text)
                })
                .into_iter()
                .chain(duplicate_emails(&texts))
                .collect()
            }
            CustomerColumn::SignupDate => {
                collect_failures(QualityRule::InvalidSignupDate, column, values, |value, _| {
                    !matches!(parse_date(value), Ok(Some(_)))
                })
            }
            CustomerColumn::Country => vec![],
            CustomerColumn::Age => {
                collect_failures(QualityRule::AgeOutOfRange, column, values, |value, _| {
                    !matches!(
                        parse_whole_number(value),
                        Ok(Some(age)) if (AGE_MIN..=AGE_MAX).contains(&(age as i64))
                    )
                })
            }
            CustomerColumn::LastPurchaseAmount => {
                collect_failures(QualityRule::NegativePurchase, column, values, |value, _| {
                    !matches!(parse_number(value), Ok(Some(amount)) if amount >= 0.0)
                })
            }
            CustomerColumn::LoyaltyTier => {
                collect_failures(QualityRule::UnknownLoyalty, column, values, |_, text| {
                    text == UNKNOWN_TIER
                })
            }
        };
        issues.extend(findings);
    }

    let report = QualityReport {
        source: source.to_string(),
        rows: df.height(),
        issues,
    };
    tracing::debug!(
        source,
        rows = report.rows,
        issues = report.issues.len(),
        violations = report.violation_count(),
        "quality check complete"
    );
    report
}

fn cell(column: &Column, idx: usize) -> AnyValue<'_> {
    column.get(idx).unwrap_or(AnyValue::Null)
}

fn column_texts(column: &Column, height: usize) -> Vec<Option<String>> {
    (0..height).map(|idx| cell_text(cell(column, idx))).collect()
}

/// Run `fails` over every present cell, turning failures into one issue.
fn collect_failures(
    rule: QualityRule,
    column: CustomerColumn,
    values: &Column,
    fails: impl Fn(AnyValue<'_>, &str) -> bool,
) -> Vec<QualityIssue> {
    let mut count = 0usize;
    let mut examples = Vec::new();
    for idx in 0..values.len() {
        let value = cell(values, idx);
        let Some(text) = cell_text(value.clone()) else {
            continue;
        };
        if fails(value, &text) {
            count += 1;
            if examples.len() < MAX_SAMPLES {
                examples.push(text);
            }
        }
    }
    if count == 0 {
        return vec![];
    }
    vec![QualityIssue {
        rule,
        column: column.as_str().to_string(),
        count,
        examples,
    }]
}

fn duplicate_emails(emails: &[Option<String>]) -> Option<QualityIssue> {
    let mut seen = HashSet::new();
    let mut count = 0usize;
    let mut examples = Vec::new();
    for email in emails.iter().flatten() {
        if !seen.insert(email.as_str()) {
            count += 1;
            if examples.len() < MAX_SAMPLES {
                examples.push(email.clone());
            }
        }
    }
    (count > 0).then(|| QualityIssue {
        rule: QualityRule::DuplicateEmail,
        column: CustomerColumn::Email.as_str().to_string(),
        count,
        examples,
    })
}
