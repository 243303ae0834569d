//! File selection and ordered corpus reading.
//!
//! Selection walks the root directory, keeps files matching the include
//! globs, drops files matching the ignore patterns, and sorts the
//! survivors lexicographically. Only then are the files read, in parallel;
//! the pre-computed order is what the comparison phase sees, so reading
//! concurrency never leaks into the result.

use std::fs;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use rayon::prelude::*;
use walkdir::WalkDir;

use super::{binary, CorpusError, Document, DocumentContent};

/// Selects and reads the documents for one run.
#[derive(Debug)]
pub struct CorpusReader {
    root: PathBuf,
    include: GlobSet,
    ignore: Option<Gitignore>,
}

impl CorpusReader {
    /// Build a reader for `root` with include globs `patterns` and
    /// gitignore-style `ignore_patterns`.
    ///
    /// Patterns are compiled eagerly so that a malformed pattern fails the
    /// run before any file is touched.
    pub fn new(
        root: &Path,
        patterns: &[String],
        ignore_patterns: &[String],
    ) -> Result<Self, CorpusError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|source| CorpusError::Pattern {
                    pattern: pattern.clone(),
                    source,
                })?;
            builder.add(glob);
        }
        let include = builder.build().map_err(|source| CorpusError::Pattern {
            pattern: patterns.join(", "),
            source,
        })?;

        Ok(Self {
            root: root.to_path_buf(),
            include,
            ignore: build_gitignore(root, ignore_patterns)?,
        })
    }

    /// Select, order, and read the corpus.
    ///
    /// Any unreadable file aborts the whole run; a partial corpus would
    /// produce a misleading score.
    pub fn read(&self) -> Result<Vec<Document>, CorpusError> {
        let selected = self.select()?;
        log::info!("Reading {} files under {}", selected.len(), self.root.display());

        selected
            .into_par_iter()
            .map(|(abs, rel)| self.read_document(&abs, rel))
            .collect()
    }

    /// Walk the root and return `(absolute, relative)` path pairs in
    /// lexicographic order of the relative path.
    fn select(&self) -> Result<Vec<(PathBuf, PathBuf)>, CorpusError> {
        let mut selected = Vec::new();

        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = entry.map_err(|source| CorpusError::Walk {
                path: source
                    .path()
                    .map_or_else(|| self.root.clone(), Path::to_path_buf),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let rel = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or_else(|_| entry.path())
                .to_path_buf();

            if !self.include.is_match(&rel) {
                log::trace!("Not selected: {}", rel.display());
                continue;
            }
            if self.is_ignored(&rel) {
                log::debug!("Ignored: {}", rel.display());
                continue;
            }

            selected.push((entry.path().to_path_buf(), rel));
        }

        selected.sort_by(|a, b| a.1.cmp(&b.1));
        Ok(selected)
    }

    fn is_ignored(&self, rel: &Path) -> bool {
        self.ignore
            .as_ref()
            .is_some_and(|gi| gi.matched_path_or_any_parents(rel, false).is_ignore())
    }

    fn read_document(&self, abs: &Path, rel: PathBuf) -> Result<Document, CorpusError> {
        let bytes = fs::read(abs).map_err(|source| CorpusError::Io {
            path: rel.clone(),
            source,
        })?;

        let content = if binary::is_binary_path(&rel) {
            DocumentContent::Binary(bytes)
        } else {
            let text = String::from_utf8(bytes).map_err(|e| CorpusError::InvalidUtf8 {
                offset: e.utf8_error().valid_up_to(),
                path: rel.clone(),
            })?;
            DocumentContent::Text(text)
        };

        Ok(Document { path: rel, content })
    }
}

/// Compile ignore patterns into a gitignore matcher. Returns `None` when
/// there is nothing to ignore.
fn build_gitignore(root: &Path, patterns: &[String]) -> Result<Option<Gitignore>, CorpusError> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GitignoreBuilder::new(root);
    for pattern in patterns {
        builder
            .add_line(None, pattern)
            .map_err(CorpusError::IgnorePattern)?;
    }
    let gitignore = builder.build().map_err(CorpusError::IgnorePattern)?;
    Ok(Some(gitignore))
}
