//! Block segmentation and whitespace normalization.
//!
//! Documents are split into blocks on blank-line boundaries. Each block
//! keeps its original text for display and a whitespace-stripped form for
//! fingerprinting, so reformatting alone never defeats detection.

/// The block separator: two consecutive newlines, i.e. one blank line.
const BLOCK_SEPARATOR: &str = "\n\n";

/// A blank-line-delimited segment of a document.
///
/// Blocks are transient: they exist only while their document is being
/// compared and are never stored independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Original text, kept for display in findings.
    pub text: String,
    /// Whitespace-stripped form used for fingerprinting.
    pub normalized: String,
}

impl Block {
    /// Whether this block is large enough to take part in block-level
    /// comparison: at least `min_lines` newlines and strictly more than
    /// `min_chars` characters. Sub-threshold blocks are invisible to the
    /// block index.
    #[must_use]
    pub fn qualifies(&self, min_lines: usize, min_chars: usize) -> bool {
        line_count(&self.text) >= min_lines && self.text.len() > min_chars
    }
}

/// Number of newline characters in `text`. This is the line metric used
/// everywhere: the size gate, the score denominators, and duplicate line
/// accounting. It is deliberately not "visual lines".
#[must_use]
pub fn line_count(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

/// Strip every whitespace character, leaving the content skeleton that
/// fingerprints are computed from.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Split `content` into blocks on blank-line boundaries, preserving
/// document order. Empty segments are dropped.
#[must_use]
pub fn segment(content: &str) -> Vec<Block> {
    content
        .split(BLOCK_SEPARATOR)
        .filter(|s| !s.is_empty())
        .map(|s| Block {
            text: s.to_string(),
            normalized: normalize(s),
        })
        .collect()
}
