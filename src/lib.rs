//! textdupe - text duplication detector with a CI-friendly failure gate.
//!
//! textdupe fingerprints whole files and blank-line-delimited blocks with
//! BLAKE3, aggregates exact (whitespace-insensitive) matches into findings,
//! and scores the corpus against a failure threshold. Reading is parallel;
//! comparison is sequential over a fixed, lexicographic document order, so
//! results are reproducible.

pub mod cli;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod logging;
pub mod report;

use anyhow::Result;

use cli::{Cli, OutputFormat};
use config::Config;
use corpus::CorpusReader;
use engine::{Analyzer, BlockPolicy};
use error::ExitCode;
use report::Report;

/// Run one analysis end to end and produce the process exit code.
///
/// Configuration is resolved and validated first, then the corpus is read
/// in full (the barrier before any comparison), then the engine runs and
/// the report is rendered in the requested format.
pub fn run_app(cli: &Cli) -> Result<Report> {
    let config = Config::resolve(cli)?;
    log::debug!("Effective configuration: {config:?}");

    let reader = CorpusReader::new(&cli.root, &cli.patterns, &config.ignore)?;
    let documents = reader.read()?;

    let policy = BlockPolicy {
        min_lines: config.min_lines,
        min_chars: config.min_chars,
    };
    let analysis = Analyzer::new(policy).analyze(&documents);
    let report = Report::build(analysis, config.threshold)?;

    match cli.output {
        OutputFormat::Text => report::render::print_report(&report),
        OutputFormat::Json => println!("{}", report::json::JsonReport::new(&report).to_json_pretty()?),
    }

    Ok(report)
}

/// Exit code for a finished report.
#[must_use]
pub fn exit_code(report: &Report) -> ExitCode {
    if report.pass {
        ExitCode::Pass
    } else {
        ExitCode::ThresholdFailed
    }
}
