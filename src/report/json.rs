//! JSON presenter for automation.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "score": 90.0,
//!   "threshold": 95.0,
//!   "pass": false,
//!   "summary": {
//!     "files_analyzed": 10,
//!     "lines_analyzed": 400,
//!     "duplicate_files": 1,
//!     "duplicate_lines": 40,
//!     "duplicate_blocks": 2,
//!     "duplicate_blocks_within_files": 1
//!   },
//!   "findings": [
//!     {
//!       "kind": "inter-file-duplicate",
//!       "files": ["a.md", "b.md"],
//!       "fingerprints": ["abc123..."],
//!       "occurrences": ["duplicated paragraph"]
//!     }
//!   ]
//! }
//! ```

use serde::Serialize;

use crate::engine::Finding;

use super::{Report, Summary};

/// One finding in JSON form.
#[derive(Debug, Clone, Serialize)]
pub struct JsonFinding {
    /// Finding kind as a stable machine-readable name.
    pub kind: &'static str,
    /// Participant paths, insertion order.
    pub files: Vec<String>,
    /// BLAKE3 fingerprints as hexadecimal strings.
    pub fingerprints: Vec<String>,
    /// Original text of each recorded duplicate occurrence.
    pub occurrences: Vec<String>,
}

impl JsonFinding {
    fn from_finding(finding: &Finding) -> Self {
        Self {
            kind: finding.kind.as_str(),
            files: finding
                .files
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            fingerprints: finding.fingerprints.iter().map(|f| f.to_hex()).collect(),
            occurrences: finding.occurrences.clone(),
        }
    }
}

/// The whole report in JSON form.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    /// Duplication score, 0-100.
    pub score: f64,
    /// The configured failure threshold.
    pub threshold: f64,
    /// Whether the score met the threshold.
    pub pass: bool,
    /// Run counters.
    pub summary: Summary,
    /// Findings in presentation order.
    pub findings: Vec<JsonFinding>,
}

impl JsonReport {
    /// Build the JSON form of `report`.
    #[must_use]
    pub fn new(report: &Report) -> Self {
        Self {
            score: report.score,
            threshold: report.threshold,
            pass: report.pass,
            summary: report.summary,
            findings: report.findings.iter().map(JsonFinding::from_finding).collect(),
        }
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Analysis, Fingerprint, RunStats};
    use std::path::PathBuf;

    fn sample_report() -> Report {
        let stats = RunStats {
            total_files: 2,
            total_lines: 100,
            duped_lines: 10,
            block_duplicates: 1,
            ..Default::default()
        };
        let findings = vec![Finding::inter(
            vec![PathBuf::from("a.md"), PathBuf::from("b.md")],
            Fingerprint::of_text("shared"),
            "shared paragraph".to_string(),
        )];
        Report::build(Analysis { findings, stats }, 95.0).unwrap()
    }

    #[test]
    fn test_json_shape() {
        let json = JsonReport::new(&sample_report()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["score"], 90.0);
        assert_eq!(value["pass"], false);
        assert_eq!(value["summary"]["lines_analyzed"], 100);
        assert_eq!(value["findings"][0]["kind"], "inter-file-duplicate");
        assert_eq!(value["findings"][0]["files"][0], "a.md");
        assert_eq!(
            value["findings"][0]["fingerprints"][0],
            Fingerprint::of_text("shared").to_hex()
        );
    }

    #[test]
    fn test_pretty_json_round_trips() {
        let report = JsonReport::new(&sample_report());
        let pretty = report.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(value["threshold"], 95.0);
    }
}
