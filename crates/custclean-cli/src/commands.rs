use anyhow::{Context, Result};
use tracing::{error, info, info_span, warn};

use custclean_cli::pipeline::{check_file, clean_file, default_output_dir};
use custclean_cli::types::{
    CheckRunResult, CleanOptions, CleanRunResult, ReportFormat, display_name,
};
use custclean_ingest::discover_files;

use crate::cli::{CheckArgs, CleanArgs, ReportFormatArg};

pub fn run_clean(args: &CleanArgs) -> Result<CleanRunResult> {
    let input_dir = &args.input_dir;
    let span = info_span!("clean", input_dir = %input_dir.display());
    let _guard = span.enter();

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(input_dir));
    let files = discover_files(input_dir, &args.pattern)
        .with_context(|| format!("discover raw files in {}", input_dir.display()))?;
    if files.is_empty() {
        warn!(pattern = %args.pattern, "no matching CSV files found");
    }
    if !args.dry_run && !files.is_empty() {
        std::fs::create_dir_all(&output_dir)
            .with_context(|| format!("create {}", output_dir.display()))?;
    }

    let options = CleanOptions {
        output_dir: output_dir.clone(),
        report_format: report_format(args.report_format),
        dry_run: args.dry_run,
    };
    let mut summaries = Vec::new();
    let mut errors = Vec::new();
    for path in &files {
        match clean_file(path, &options) {
            Ok(summary) => summaries.push(summary),
            Err(err) => {
                error!(file = %display_name(path), error = %format!("{err:#}"), "file failed");
                errors.push(format!("{}: {err:#}", display_name(path)));
            }
        }
    }
    info!(
        files = files.len(),
        cleaned = summaries.len(),
        failed = errors.len(),
        "clean run complete"
    );

    Ok(CleanRunResult {
        input_dir: input_dir.clone(),
        output_dir,
        dry_run: args.dry_run,
        files: summaries,
        errors,
    })
}

pub fn run_check(args: &CheckArgs) -> Result<CheckRunResult> {
    let dir = &args.dir;
    let span = info_span!("check", dir = %dir.display());
    let _guard = span.enter();

    let files = discover_files(dir, &args.pattern)
        .with_context(|| format!("discover cleaned files in {}", dir.display()))?;
    if files.is_empty() {
        warn!(pattern = %args.pattern, "no matching CSV files found");
    }

    let mut reports = Vec::new();
    let mut errors = Vec::new();
    for path in &files {
        match check_file(path) {
            Ok(report) => reports.push(report),
            Err(err) => {
                error!(file = %display_name(path), error = %format!("{err:#}"), "file failed");
                errors.push(format!("{}: {err:#}", display_name(path)));
            }
        }
    }

    Ok(CheckRunResult {
        dir: dir.clone(),
        reports,
        errors,
    })
}

fn report_format(arg: ReportFormatArg) -> ReportFormat {
    match arg {
        ReportFormatArg::Text => ReportFormat::Text,
        ReportFormatArg::Json => ReportFormat::Json,
        ReportFormatArg::Both => ReportFormat::Both,
        ReportFormatArg::None => ReportFormat::None,
    }
}
