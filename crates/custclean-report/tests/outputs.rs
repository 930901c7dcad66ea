//! Writer tests: cleaned CSV layout, text summary snapshot, JSON payload.

use std::fs;

use custclean_model::CleaningReport;
use custclean_report::{
    REPORT_SCHEMA, render_report_text, write_cleaned_csv, write_report_json, write_report_text,
};
use custclean_transform::clean_customers;
use polars::prelude::{Column, DataFrame};
use tempfile::TempDir;

fn sample_report() -> CleaningReport {
    CleaningReport {
        rows_input: 5,
        empty_full_name: 1,
        invalid_emails: 1,
        invalid_signup_dates: 1,
        age_clipped_min: 1,
        age_clipped_max: 0,
        negative_purchase_fixed: 1,
        unknown_loyalty: 2,
        duplicates_removed: 1,
        rows_dropped_na: 2,
        rows_output: 2,
        rows_dropped: 3,
    }
}

fn raw_frame() -> DataFrame {
    DataFrame::new(vec![
        Column::new("full_name".into(), ["Alice", "Bob", "Carol"]),
        Column::new(
            "email".into(),
            ["alice@test.com", "bob@test.com", "alice@test.com"],
        ),
        Column::new(
            "signup_date".into(),
            ["2023-01-01", "2023-01-03 12:30:00", "2023-01-05"],
        ),
        Column::new("country".into(), ["france", "USA", "de"]),
        Column::new("age".into(), ["34", "150", "20"]),
        Column::new("last_purchase_amount".into(), ["12.50", "-4", "1"]),
        Column::new("loyalty_tier".into(), ["GOLD", "UNKNOWN", "SILVER"]),
    ])
    .unwrap()
}

#[test]
fn text_report_snapshot() {
    let text = render_report_text("customers_dirty.csv", &sample_report());
    insta::assert_snapshot!(text, @r"
    Customer cleaning report
    Source: customers_dirty.csv

    Rows input:               5
    Rows output:              2
    Rows dropped:             3

    Blank full names:         1
    Invalid emails:           1
    Invalid signup dates:     1
    Ages raised to minimum:   1
    Ages lowered to maximum:  0
    Negative purchases fixed: 1
    Unknown loyalty tiers:    2
    Duplicates removed:       1
    Incomplete rows dropped:  2
    ");
}

#[test]
fn cleaned_csv_has_canonical_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("customers_clean.csv");
    let (cleaned, _) = clean_customers(&raw_frame()).unwrap();

    write_cleaned_csv(&path, &cleaned).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "full_name,email,signup_date,country,age,last_purchase_amount,loyalty_tier\n\
         Alice,alice@test.com,2023-01-01,FR,34,12.5,GOLD\n\
         Bob,bob@test.com,2023-01-03,US,100,0,BRONZE\n"
    );
}

#[test]
fn empty_table_writes_header_only() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty_clean.csv");
    let (cleaned, _) = clean_customers(&raw_frame().head(Some(0))).unwrap();

    write_cleaned_csv(&path, &cleaned).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "full_name,email,signup_date,country,age,last_purchase_amount,loyalty_tier\n"
    );
}

#[test]
fn incomplete_table_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.csv");
    let partial = raw_frame().drop("loyalty_tier").unwrap();
    let err = write_cleaned_csv(&path, &partial).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot write cleaned table: required column 'loyalty_tier' not found"
    );
    assert!(!path.exists());
}

#[test]
fn json_report_carries_metadata() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("customers_clean_report.json");
    write_report_json(&path, "customers_dirty.csv", &sample_report()).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["schema"], REPORT_SCHEMA);
    assert_eq!(value["schema_version"], 1);
    assert_eq!(value["source"], "customers_dirty.csv");
    assert_eq!(value["report"]["duplicates_removed"], 1);
    assert_eq!(value["report"]["rows_output"], 2);
    assert!(value["generated_at"].as_str().is_some());
}

#[test]
fn text_report_is_written() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("customers_clean_report.txt");
    write_report_text(&path, "customers_dirty.csv", &sample_report()).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("Duplicates removed:       1"));
}
