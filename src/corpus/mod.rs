//! Corpus acquisition: document representation and ordered reading.
//!
//! A corpus is an ordered list of [`Document`]s, fully read into memory
//! before any comparison starts. The order is stable (lexicographic by
//! path) so that runs over the same tree are reproducible regardless of
//! reading concurrency.

pub mod binary;
pub mod reader;

pub use reader::CorpusReader;

use std::path::PathBuf;
use thiserror::Error;

/// A file selected for analysis, fully read into memory.
///
/// Identity is the path, which is unique within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path relative to the scan root.
    pub path: PathBuf,
    /// File payload, classified by extension.
    pub content: DocumentContent,
}

/// Payload of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentContent {
    /// UTF-8 text, eligible for block-level comparison.
    Text(String),
    /// Opaque binary payload, compared at whole-document granularity only.
    Binary(Vec<u8>),
}

impl Document {
    /// Whether this document is an opaque binary payload.
    #[must_use]
    pub fn is_binary(&self) -> bool {
        matches!(self.content, DocumentContent::Binary(_))
    }

    /// Number of newline characters in the payload. This is the line
    /// metric used for the score denominators and duplicate accounting.
    #[must_use]
    pub fn line_count(&self) -> usize {
        match &self.content {
            DocumentContent::Text(text) => text.bytes().filter(|&b| b == b'\n').count(),
            DocumentContent::Binary(bytes) => bytes.iter().filter(|&&b| b == b'\n').count(),
        }
    }
}

/// Errors that can occur while selecting or reading the corpus.
///
/// Every variant is fatal: a partially read corpus would silently skew
/// the duplication score.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// A file selection pattern did not compile.
    #[error("invalid file selection pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern
        pattern: String,
        /// The underlying glob error
        #[source]
        source: globset::Error,
    },

    /// An ignore pattern did not compile.
    #[error("invalid ignore pattern: {0}")]
    IgnorePattern(#[source] ignore::Error),

    /// Directory traversal failed.
    #[error("failed to walk {path}: {source}")]
    Walk {
        /// Path where traversal failed
        path: PathBuf,
        /// The underlying walkdir error
        #[source]
        source: walkdir::Error,
    },

    /// A selected file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the unreadable file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A text-classified file is not valid UTF-8.
    #[error("{path} is not valid UTF-8 (invalid byte at offset {offset})")]
    InvalidUtf8 {
        /// Path of the offending file
        path: PathBuf,
        /// Offset of the first invalid byte
        offset: usize,
    },
}
