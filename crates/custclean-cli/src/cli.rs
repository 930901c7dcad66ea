//! CLI argument definitions for custclean.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "custclean",
    version,
    about = "Clean raw customer CSV files and check cleaned output",
    long_about = "Clean raw customer CSV files and check cleaned output.\n\n\
                  Normalizes names, emails, signup dates, countries, ages, purchase\n\
                  amounts and loyalty tiers, removes duplicate and incomplete rows,\n\
                  and writes a report of every correction."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean every raw customer file in a directory.
    Clean(CleanArgs),

    /// Check cleaned customer files against the output guarantees.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Directory containing the raw CSV files.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Output directory for cleaned files (default: <INPUT_DIR>/../processed).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Only process CSV files whose name contains this text.
    #[arg(long = "pattern", default_value = "dirty")]
    pub pattern: String,

    /// Report files written next to each cleaned CSV.
    #[arg(long = "report-format", value_enum, default_value = "both")]
    pub report_format: ReportFormatArg,

    /// Clean and summarize without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Directory containing cleaned CSV files.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Only check CSV files whose name contains this text.
    #[arg(long = "pattern", default_value = "clean")]
    pub pattern: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Text,
    Json,
    Both,
    None,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
