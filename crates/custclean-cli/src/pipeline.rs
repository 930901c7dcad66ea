//! Per-file clean and check steps driven by the CLI commands.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use custclean_ingest::{cleaned_file_name, read_customer_csv};
use custclean_model::QualityReport;
use custclean_report::{write_cleaned_csv, write_report_json, write_report_text};
use custclean_transform::clean_customers;
use custclean_validate::check_cleaned;

use crate::types::{CleanOptions, FileSummary, OutputPaths, ReportFormat, display_name};

/// Default output directory for `input_dir`: a `processed` sibling.
pub fn default_output_dir(input_dir: &Path) -> PathBuf {
    input_dir.join("..").join("processed")
}

/// Output file paths for one raw input.
///
/// The cleaned CSV replaces `dirty` with `clean` in the stem; report files
/// share that stem with a `_report` suffix.
pub fn output_paths(input: &Path, output_dir: &Path, format: ReportFormat) -> OutputPaths {
    let cleaned_name = cleaned_file_name(input);
    let cleaned = output_dir.join(&cleaned_name);
    let stem = cleaned_name.strip_suffix(".csv").unwrap_or(&cleaned_name);
    OutputPaths {
        text_report: format
            .writes_text()
            .then(|| output_dir.join(format!("{stem}_report.txt"))),
        json_report: format
            .writes_json()
            .then(|| output_dir.join(format!("{stem}_report.json"))),
        cleaned,
    }
}

/// Read, clean and (unless dry-running) write outputs for one raw file.
pub fn clean_file(input: &Path, options: &CleanOptions) -> Result<FileSummary> {
    let source = display_name(input);
    let span = info_span!("clean_file", file = %source);
    let _guard = span.enter();
    let start = Instant::now();

    let raw = read_customer_csv(input).with_context(|| format!("read {}", input.display()))?;
    let (cleaned, report) =
        clean_customers(&raw).with_context(|| format!("clean {}", input.display()))?;

    let outputs = if options.dry_run {
        debug!("dry run, skipping outputs");
        None
    } else {
        let paths = output_paths(input, &options.output_dir, options.report_format);
        write_cleaned_csv(&paths.cleaned, &cleaned)
            .with_context(|| format!("write {}", paths.cleaned.display()))?;
        if let Some(path) = &paths.text_report {
            write_report_text(path, &source, &report)
                .with_context(|| format!("write {}", path.display()))?;
        }
        if let Some(path) = &paths.json_report {
            write_report_json(path, &source, &report)
                .with_context(|| format!("write {}", path.display()))?;
        }
        Some(paths)
    };

    info!(
        rows_input = report.rows_input,
        rows_output = report.rows_output,
        rows_dropped = report.rows_dropped,
        corrections = report.corrections(),
        duration_ms = start.elapsed().as_millis(),
        "file cleaned"
    );
    Ok(FileSummary {
        source: input.to_path_buf(),
        report,
        outputs,
    })
}

/// Read a cleaned file back and run the quality checks on it.
pub fn check_file(path: &Path) -> Result<QualityReport> {
    let source = display_name(path);
    let span = info_span!("check_file", file = %source);
    let _guard = span.enter();

    let df = read_customer_csv(path).with_context(|| format!("read {}", path.display()))?;
    let report = check_cleaned(&source, &df);
    info!(
        rows = report.rows,
        issues = report.issues.len(),
        violations = report.violation_count(),
        "file checked"
    );
    Ok(report)
}
