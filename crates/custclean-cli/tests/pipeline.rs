//! Integration tests for the per-file pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use custclean_cli::pipeline::{check_file, clean_file, default_output_dir, output_paths};
use custclean_cli::types::{CleanOptions, ReportFormat};
use custclean_model::QualityRule;
use tempfile::TempDir;

const RAW: &str = "\
full_name,email,signup_date,country,age,last_purchase_amount,loyalty_tier
Alice Martin,alice@test.com,2023-01-01,france,34,12.50,GOLD
 ,bob@test.com,2023-02-01,FR,22,3,UNKNOWN
Carol Diaz,carol@test,2023-03-01,USA,51,-1,SILVER
Dan Brown,dan@test.com,not a date,de,8,NaN,UNKNOWN
Eve Stone,alice@test.com,2023-04-01,FR,40,7,BRONZE
";

fn write_raw(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn options(output_dir: &Path, dry_run: bool) -> CleanOptions {
    CleanOptions {
        output_dir: output_dir.to_path_buf(),
        report_format: ReportFormat::Both,
        dry_run,
    }
}

#[test]
fn output_paths_follow_cleaned_name() {
    let paths = output_paths(
        Path::new("raw/customers_dirty2.csv"),
        Path::new("out"),
        ReportFormat::Both,
    );
    assert_eq!(paths.cleaned, Path::new("out/customers_clean2.csv"));
    assert_eq!(
        paths.text_report.as_deref(),
        Some(Path::new("out/customers_clean2_report.txt"))
    );
    assert_eq!(
        paths.json_report.as_deref(),
        Some(Path::new("out/customers_clean2_report.json"))
    );

    let text_only = output_paths(Path::new("raw/a.csv"), Path::new("out"), ReportFormat::Text);
    assert_eq!(text_only.cleaned, Path::new("out/a_clean.csv"));
    assert!(text_only.json_report.is_none());
    assert!(
        output_paths(Path::new("raw/a.csv"), Path::new("out"), ReportFormat::None)
            .text_report
            .is_none()
    );
}

#[test]
fn default_output_dir_is_a_sibling() {
    assert_eq!(
        default_output_dir(Path::new("data/raw")),
        Path::new("data/raw/../processed")
    );
}

#[test]
fn clean_file_writes_all_outputs() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("processed");
    fs::create_dir_all(&out).unwrap();
    let input = write_raw(dir.path(), "customers_dirty.csv", RAW);

    let summary = clean_file(&input, &options(&out, false)).unwrap();

    assert_eq!(summary.report.rows_input, 5);
    assert_eq!(summary.report.rows_output, 2);
    assert_eq!(summary.file_name(), "customers_dirty.csv");
    let outputs = summary.outputs.unwrap();

    let cleaned = fs::read_to_string(&outputs.cleaned).unwrap();
    assert_eq!(
        cleaned,
        "full_name,email,signup_date,country,age,last_purchase_amount,loyalty_tier\n\
         Alice Martin,alice@test.com,2023-01-01,FR,34,12.5,GOLD\n\
         Dan Brown,dan@test.com,2023-02-15,DE,16,0,BRONZE\n"
    );

    let text = fs::read_to_string(outputs.text_report.unwrap()).unwrap();
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

    assert!(outputs.json_report.unwrap().exists());
}

#[test]
fn cleaned_output_passes_the_quality_check() {
    let dir = TempDir::new().unwrap();
    let input = write_raw(dir.path(), "customers_dirty.csv", RAW);
    let summary = clean_file(&input, &options(dir.path(), false)).unwrap();
    let cleaned = summary.outputs.unwrap().cleaned;

    let report = check_file(&cleaned).unwrap();

    assert!(report.is_clean(), "{:?}", report.issues);
    assert_eq!(report.rows, 2);
    assert_eq!(report.source, "customers_clean.csv");
}

#[test]
fn raw_input_fails_the_quality_check() {
    let dir = TempDir::new().unwrap();
    let input = write_raw(dir.path(), "customers_dirty.csv", RAW);

    let report = check_file(&input).unwrap();

    assert!(report.has_rule(QualityRule::BlankName));
    assert!(report.has_rule(QualityRule::DuplicateEmail));
    assert!(report.has_rule(QualityRule::UnknownLoyalty));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("processed");
    let input = write_raw(dir.path(), "customers_dirty.csv", RAW);

    let summary = clean_file(&input, &options(&out, true)).unwrap();

    assert!(summary.outputs.is_none());
    assert_eq!(summary.report.rows_output, 2);
    assert!(!out.exists());
}

#[test]
fn missing_column_error_names_file_and_column() {
    let dir = TempDir::new().unwrap();
    let input = write_raw(
        dir.path(),
        "broken_dirty.csv",
        "full_name,email\nAlice,alice@test.com\n",
    );

    let err = clean_file(&input, &options(dir.path(), false)).unwrap_err();
    let message = format!("{err:#}");

    assert!(message.contains("broken_dirty.csv"), "{message}");
    assert!(message.contains("required column 'signup_date' not found"), "{message}");
    assert!(!dir.path().join("broken_clean.csv").exists());
}

#[test]
fn countries_that_read_as_missing_survive_a_second_pass() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("processed");
    fs::create_dir_all(&out).unwrap();
    let input = write_raw(
        dir.path(),
        "customers_dirty.csv",
        "\
full_name,email,signup_date,country,age,last_purchase_amount,loyalty_tier
Alice Martin,alice@test.com,2023-01-01,na,34,12.50,GOLD
Bob Ray,bob@test.com,2023-02-01,Null,22,3,SILVER
Carol Diaz,carol@test.com,2023-03-01,france,51,1,BRONZE
",
    );

    let first = clean_file(&input, &options(&out, false)).unwrap();
    assert_eq!(first.report.rows_output, 1);
    assert_eq!(first.report.rows_dropped_na, 2);

    let cleaned = first.outputs.unwrap().cleaned;
    let quality = check_file(&cleaned).unwrap();
    assert!(quality.is_clean(), "{:?}", quality.issues);
    assert_eq!(quality.rows, 1);

    let again_dir = dir.path().join("again");
    fs::create_dir_all(&again_dir).unwrap();
    let second = clean_file(&cleaned, &options(&again_dir, false)).unwrap();
    assert_eq!(second.report.rows_output, first.report.rows_output);
    assert_eq!(second.report.rows_dropped_na, 0);
    assert!(second.report.is_clean());
}
