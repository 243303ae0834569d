//! Command-line interface definitions.
//!
//! All CLI arguments are defined with the clap derive API. The tool is a
//! single-purpose gate, so there are no subcommands: the positional
//! arguments are glob patterns selecting the files to analyze.
//!
//! # Example
//!
//! ```bash
//! # Analyze everything under the current directory
//! textdupe
//!
//! # Analyze markdown files with a custom threshold
//! textdupe '**/*.md' --threshold 98.5
//!
//! # JSON output for scripting
//! textdupe 'src/**/*.rs' --output json
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Text duplication detector with a CI-friendly failure threshold.
///
/// textdupe fingerprints whole files and blank-line-delimited blocks using
/// BLAKE3, reports exact (whitespace-insensitive) duplicates, and fails when
/// the duplication score drops below the configured threshold.
#[derive(Debug, Parser)]
#[command(name = "textdupe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Glob patterns selecting the files to analyze, relative to the root
    #[arg(value_name = "PATTERN", default_value = "**/*")]
    pub patterns: Vec<String>,

    /// Root directory the patterns are resolved against
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Fail when the duplication score drops below this percentage (0-100)
    #[arg(short, long, value_name = "PERCENT")]
    pub threshold: Option<f64>,

    /// Minimum number of lines a block must span to be compared
    #[arg(short = 'l', long = "min-lines", value_name = "N")]
    pub min_lines: Option<usize>,

    /// Minimum number of characters a block must exceed to be compared
    #[arg(short = 'c', long = "min-chars", value_name = "N")]
    pub min_chars: Option<usize>,

    /// Glob patterns to ignore (can be specified multiple times)
    ///
    /// These are added to the patterns from the config file.
    #[arg(short, long = "ignore", value_name = "PATTERN")]
    pub ignore_patterns: Vec<String>,

    /// Path to the config file (defaults to .textduperc in the root)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format (text for humans, json for scripting)
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors and the report
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colorized report
    Text,
    /// JSON output for scripting
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
