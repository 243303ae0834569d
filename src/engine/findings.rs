//! Findings and run counters.

use std::path::{Path, PathBuf};

use super::fingerprint::Fingerprint;

/// The duplicate relationship a finding reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    /// A block repeated within a single file.
    IntraFileDuplicate,
    /// A block shared across two or more files.
    InterFileDuplicate,
    /// Two or more files with identical content.
    IdenticalFile,
}

impl FindingKind {
    /// Presentation rank. Identical files sort last so the catastrophic
    /// cases end up closest to the summary.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::IntraFileDuplicate => 0,
            Self::InterFileDuplicate => 1,
            Self::IdenticalFile => 2,
        }
    }

    /// Stable machine-readable name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IntraFileDuplicate => "intra-file-duplicate",
            Self::InterFileDuplicate => "inter-file-duplicate",
            Self::IdenticalFile => "identical-file",
        }
    }
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An aggregated duplicate relationship among one or more files.
///
/// A given (fingerprint, participant set, kind) combination maps to exactly
/// one finding; further matches accumulate into it rather than creating
/// another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// What kind of duplication this is.
    pub kind: FindingKind,
    /// Participant paths in insertion order, without duplicates.
    pub files: Vec<PathBuf>,
    /// Fingerprints aggregated into this finding.
    pub fingerprints: Vec<Fingerprint>,
    /// Original text of each recorded duplicate occurrence. Empty for
    /// identical-file findings, which carry no textual payload.
    pub occurrences: Vec<String>,
}

impl Finding {
    /// An identical-file finding: the duplicate first, then the original.
    #[must_use]
    pub(crate) fn identical(
        duplicate: PathBuf,
        original: PathBuf,
        fingerprint: Fingerprint,
    ) -> Self {
        Self {
            kind: FindingKind::IdenticalFile,
            files: vec![duplicate, original],
            fingerprints: vec![fingerprint],
            occurrences: Vec::new(),
        }
    }

    /// An intra-file finding for the first repeat of a block within `file`.
    #[must_use]
    pub(crate) fn intra(file: PathBuf, fingerprint: Fingerprint, occurrence: String) -> Self {
        Self {
            kind: FindingKind::IntraFileDuplicate,
            files: vec![file],
            fingerprints: vec![fingerprint],
            occurrences: vec![occurrence],
        }
    }

    /// An inter-file finding for a block shared by `files`.
    #[must_use]
    pub(crate) fn inter(
        files: Vec<PathBuf>,
        fingerprint: Fingerprint,
        occurrence: String,
    ) -> Self {
        Self {
            kind: FindingKind::InterFileDuplicate,
            files,
            fingerprints: vec![fingerprint],
            occurrences: vec![occurrence],
        }
    }

    /// Append a participant path, keeping insertion order and uniqueness.
    pub(crate) fn add_file(&mut self, path: &Path) {
        if !self.files.iter().any(|p| p == path) {
            self.files.push(path.to_path_buf());
        }
    }

    /// Append another duplicated occurrence and its fingerprint.
    pub(crate) fn add_occurrence(&mut self, fingerprint: Fingerprint, occurrence: String) {
        self.fingerprints.push(fingerprint);
        self.occurrences.push(occurrence);
    }

    /// Whether this finding already aggregates `fingerprint`.
    #[must_use]
    pub(crate) fn has_fingerprint(&self, fingerprint: Fingerprint) -> bool {
        self.fingerprints.contains(&fingerprint)
    }

    /// Whether this finding covers exactly the given participant set,
    /// order-independently.
    #[must_use]
    pub(crate) fn has_same_files(&self, files: &[PathBuf]) -> bool {
        self.files.len() == files.len() && files.iter().all(|f| self.files.contains(f))
    }
}

/// Counters accumulated over one run and read once by the scorer.
///
/// Passed explicitly through the comparison phase; there is no process-wide
/// state, so independent runs cannot interfere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of documents analyzed.
    pub total_files: usize,
    /// Newline count summed over all documents.
    pub total_lines: usize,
    /// Newline count attributed to duplicated content.
    pub duped_lines: usize,
    /// Documents that were full duplicates of an earlier document.
    pub file_duplicates: usize,
    /// Duplicate block sightings, within and across files.
    pub block_duplicates: usize,
    /// Duplicate block sightings within a single file.
    pub block_duplicates_in_file: usize,
}
