//! Scoring and report assembly.
//!
//! The report is a plain value: the presenter renders it and the binary
//! decides the process exit code from it. Nothing in here writes to the
//! terminal or touches the process state.

pub mod json;
pub mod render;

use serde::Serialize;
use thiserror::Error;

use crate::engine::{Analysis, Finding, RunStats};

/// Errors produced while assembling the report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Scoring divides by the analyzed line count, so an empty corpus has
    /// no defined score. Surfaced instead of producing NaN.
    #[error("no lines were analyzed; check the file selection patterns")]
    EmptyCorpus,
}

/// Summary counters rendered under the findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of documents analyzed.
    pub files_analyzed: usize,
    /// Newline count summed over all documents.
    pub lines_analyzed: usize,
    /// Documents that were full duplicates of an earlier document.
    pub duplicate_files: usize,
    /// Newline count attributed to duplicated content.
    pub duplicate_lines: usize,
    /// Duplicate block sightings, within and across files.
    pub duplicate_blocks: usize,
    /// Duplicate block sightings within a single file.
    pub duplicate_blocks_within_files: usize,
}

impl From<RunStats> for Summary {
    fn from(stats: RunStats) -> Self {
        Self {
            files_analyzed: stats.total_files,
            lines_analyzed: stats.total_lines,
            duplicate_files: stats.file_duplicates,
            duplicate_lines: stats.duped_lines,
            duplicate_blocks: stats.block_duplicates,
            duplicate_blocks_within_files: stats.block_duplicates_in_file,
        }
    }
}

/// The finished report: score, verdict, summary, and presentable findings.
#[derive(Debug)]
pub struct Report {
    /// Percentage of analyzed lines not flagged as duplicated, rounded to
    /// two decimal places.
    pub score: f64,
    /// The configured failure threshold.
    pub threshold: f64,
    /// Whether the score met the threshold.
    pub pass: bool,
    /// Run counters.
    pub summary: Summary,
    /// Findings sorted for presentation: intra-file first, then
    /// inter-file, identical files last; creation order within each kind.
    pub findings: Vec<Finding>,
}

impl Report {
    /// Score the analysis against `threshold` and sort the findings for
    /// presentation.
    pub fn build(analysis: Analysis, threshold: f64) -> Result<Self, ReportError> {
        let stats = analysis.stats;
        if stats.total_lines == 0 {
            return Err(ReportError::EmptyCorpus);
        }

        let ratio = stats.duped_lines as f64 / stats.total_lines as f64;
        let score = round2(100.0 - ratio * 100.0);

        let mut findings = analysis.findings;
        findings.sort_by_key(|f| f.kind.rank());

        Ok(Self {
            score,
            threshold,
            pass: score >= threshold,
            summary: stats.into(),
            findings,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
