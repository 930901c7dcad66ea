//! Text and JSON renderings of a [`CleaningReport`].

use std::fmt::Write as _;
use std::path::Path;

use chrono::Utc;
use custclean_model::CleaningReport;
use serde::Serialize;

use crate::error::{ReportError, Result};

/// Schema identifier written into every JSON report.
pub const REPORT_SCHEMA: &str = "custclean.cleaning-report";
pub const REPORT_SCHEMA_VERSION: u32 = 1;

const LABEL_WIDTH: usize = 26;

#[derive(Debug, Serialize)]
struct CleaningReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    source: &'a str,
    report: &'a CleaningReport,
}

fn counter_label(key: &str) -> &'static str {
    match key {
        "empty_full_name" => "Blank full names",
        "invalid_emails" => "Invalid emails",
        "invalid_signup_dates" => "Invalid signup dates",
        "age_clipped_min" => "Ages raised to minimum",
        "age_clipped_max" => "Ages lowered to maximum",
        "negative_purchase_fixed" => "Negative purchases fixed",
        "unknown_loyalty" => "Unknown loyalty tiers",
        "duplicates_removed" => "Duplicates removed",
        "rows_dropped_na" => "Incomplete rows dropped",
        _ => "Other",
    }
}

fn push_line(out: &mut String, label: &str, value: usize) {
    let label = format!("{label}:");
    let _ = writeln!(out, "{label:<LABEL_WIDTH$}{value}");
}

/// Render a human-readable summary of one cleaning run.
pub fn render_report_text(source: &str, report: &CleaningReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Customer cleaning report");
    let _ = writeln!(out, "Source: {source}");
    out.push('\n');
    push_line(&mut out, "Rows input", report.rows_input);
    push_line(&mut out, "Rows output", report.rows_output);
    push_line(&mut out, "Rows dropped", report.rows_dropped);
    out.push('\n');
    for (key, count) in report.correction_counters() {
        push_line(&mut out, counter_label(key), count);
    }
    out
}

/// Write the text summary to `path`.
pub fn write_report_text(path: &Path, source: &str, report: &CleaningReport) -> Result<()> {
    std::fs::write(path, render_report_text(source, report)).map_err(|source| {
        ReportError::FileWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Write the JSON report to `path`.
pub fn write_report_json(path: &Path, source: &str, report: &CleaningReport) -> Result<()> {
    let payload = CleaningReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        source,
        report,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(path, format!("{json}\n")).map_err(|source| ReportError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_counter_has_a_label() {
        for (key, _) in CleaningReport::default().correction_counters() {
            assert_ne!(counter_label(key), "Other", "{key}");
        }
    }

    #[test]
    fn labels_fit_the_column() {
        let text = render_report_text("x.csv", &CleaningReport::default());
        for line in text.lines().filter(|line| line.ends_with('0')) {
            assert_eq!(line.len(), LABEL_WIDTH + 1, "{line:?}");
        }
    }
}
