use std::path::PathBuf;

use custclean_model::{CleaningReport, QualityReport};

/// Which report files accompany each cleaned CSV.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    #[default]
    Both,
    None,
}

impl ReportFormat {
    pub fn writes_text(self) -> bool {
        matches!(self, ReportFormat::Text | ReportFormat::Both)
    }

    pub fn writes_json(self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::Both)
    }
}

/// Options shared by every file of one `clean` run.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    pub output_dir: PathBuf,
    pub report_format: ReportFormat,
    pub dry_run: bool,
}

/// Files produced for one cleaned input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPaths {
    pub cleaned: PathBuf,
    pub text_report: Option<PathBuf>,
    pub json_report: Option<PathBuf>,
}

#[derive(Debug)]
pub struct FileSummary {
    pub source: PathBuf,
    pub report: CleaningReport,
    /// Written files; `None` on a dry run.
    pub outputs: Option<OutputPaths>,
}

impl FileSummary {
    pub fn file_name(&self) -> String {
        display_name(&self.source)
    }
}

#[derive(Debug)]
pub struct CleanRunResult {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub files: Vec<FileSummary>,
    pub errors: Vec<String>,
}

impl CleanRunResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[derive(Debug)]
pub struct CheckRunResult {
    pub dir: PathBuf,
    pub reports: Vec<QualityReport>,
    pub errors: Vec<String>,
}

impl CheckRunResult {
    /// True when any file failed to load or any quality rule failed.
    pub fn has_failures(&self) -> bool {
        !self.errors.is_empty() || self.reports.iter().any(|report| !report.is_clean())
    }
}

/// File name of `path` for tables and report headers.
pub fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
