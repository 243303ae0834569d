//! The comparison phase: whole-document and block-level duplicate
//! detection with finding aggregation.
//!
//! Documents are processed strictly in corpus order, single-threaded: the
//! two indexes, the counters, and the finding list have exactly one writer.
//! Reproducibility follows from the fixed order; all fingerprint and
//! file-set comparisons are order-independent.

use std::path::PathBuf;

use crate::corpus::{Document, DocumentContent};

use super::findings::{Finding, FindingKind, RunStats};
use super::fingerprint::Fingerprint;
use super::index::{BlockIndex, BlockMatch, DocId, DocumentIndex};
use super::segment;

/// Size gate for block-level comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPolicy {
    /// Minimum number of lines a block must span.
    pub min_lines: usize,
    /// Number of characters a block must exceed.
    pub min_chars: usize,
}

impl Default for BlockPolicy {
    fn default() -> Self {
        Self {
            min_lines: 4,
            min_chars: 100,
        }
    }
}

/// Outcome of the comparison phase.
#[derive(Debug)]
pub struct Analysis {
    /// Aggregated findings in creation order.
    pub findings: Vec<Finding>,
    /// Run counters for the scorer.
    pub stats: RunStats,
}

/// Runs the comparison phase over a corpus.
pub struct Analyzer {
    policy: BlockPolicy,
    documents: DocumentIndex,
    blocks: BlockIndex,
    findings: Vec<Finding>,
    stats: RunStats,
}

impl Analyzer {
    /// Create an analyzer with the given block size gate.
    #[must_use]
    pub fn new(policy: BlockPolicy) -> Self {
        Self {
            policy,
            documents: DocumentIndex::default(),
            blocks: BlockIndex::default(),
            findings: Vec::new(),
            stats: RunStats::default(),
        }
    }

    /// Run the comparison phase over `docs`, which must already be in
    /// their final, stable order.
    #[must_use]
    pub fn analyze(mut self, docs: &[Document]) -> Analysis {
        for (id, doc) in docs.iter().enumerate() {
            self.stats.total_files += 1;
            self.stats.total_lines += doc.line_count();
            self.process_document(id, doc, docs);
        }

        log::info!(
            "Compared {} documents: {} findings, {} duplicated lines of {}",
            self.stats.total_files,
            self.findings.len(),
            self.stats.duped_lines,
            self.stats.total_lines
        );

        Analysis {
            findings: self.findings,
            stats: self.stats,
        }
    }

    fn process_document(&mut self, id: DocId, doc: &Document, docs: &[Document]) {
        let fingerprint = match &doc.content {
            DocumentContent::Text(text) => Fingerprint::of_text(&segment::normalize(text)),
            DocumentContent::Binary(bytes) => Fingerprint::of_bytes(bytes),
        };

        if let Some(entry) = self.documents.insert_or_get(fingerprint, id) {
            // Full duplicate of an earlier document. Reported once, at file
            // granularity; scanning its blocks would only re-describe the
            // same identical pair as partial matches.
            log::debug!(
                "{} is identical to {}",
                doc.path.display(),
                docs[entry.doc].path.display()
            );
            match entry.finding {
                Some(slot) => self.findings[slot].add_file(&doc.path),
                None => {
                    let original = docs[entry.doc].path.clone();
                    entry.finding = Some(self.findings.len());
                    self.findings
                        .push(Finding::identical(doc.path.clone(), original, fingerprint));
                }
            }
            self.stats.duped_lines += doc.line_count();
            self.stats.file_duplicates += 1;
            return;
        }

        // Binary payloads take part in whole-document comparison only.
        let DocumentContent::Text(text) = &doc.content else {
            return;
        };

        for block in segment::segment(text) {
            if !block.qualifies(self.policy.min_lines, self.policy.min_chars) {
                continue;
            }
            let fingerprint = Fingerprint::of_text(&block.normalized);
            self.process_block(id, doc, docs, fingerprint, block.text);
        }
    }

    fn process_block(
        &mut self,
        id: DocId,
        doc: &Document,
        docs: &[Document],
        fingerprint: Fingerprint,
        text: String,
    ) {
        let lines = segment::line_count(&text);

        match self.blocks.record(fingerprint, id) {
            BlockMatch::First => return,
            BlockMatch::IntraRepeat => {
                self.record_intra(doc, fingerprint, text);
                self.stats.block_duplicates_in_file += 1;
            }
            BlockMatch::CrossFile(matched) => {
                let participants: Vec<PathBuf> =
                    matched.into_iter().map(|d| docs[d].path.clone()).collect();
                self.record_inter(doc, participants, fingerprint, text);
            }
        }

        self.stats.block_duplicates += 1;
        self.stats.duped_lines += lines;
    }

    /// Find or create the single intra-file finding for this document and
    /// record the repeated occurrence. The first occurrence of the block is
    /// not recorded, only its repeats.
    fn record_intra(&mut self, doc: &Document, fingerprint: Fingerprint, text: String) {
        let existing = self.findings.iter_mut().find(|f| {
            f.kind == FindingKind::IntraFileDuplicate
                && f.files.len() == 1
                && f.files[0] == doc.path
        });
        match existing {
            Some(finding) => finding.add_occurrence(fingerprint, text),
            None => self
                .findings
                .push(Finding::intra(doc.path.clone(), fingerprint, text)),
        }
    }

    /// Merge a cross-file match into the findings.
    ///
    /// Merge key policy: a finding already holding this fingerprint gains
    /// the new participant; otherwise a finding covering exactly this
    /// participant set gains the occurrence; otherwise a new finding is
    /// created. Only inter-file findings are candidates, so intra-file
    /// findings for the same block stay separate.
    fn record_inter(
        &mut self,
        doc: &Document,
        participants: Vec<PathBuf>,
        fingerprint: Fingerprint,
        text: String,
    ) {
        if let Some(finding) = self
            .findings
            .iter_mut()
            .find(|f| f.kind == FindingKind::InterFileDuplicate && f.has_fingerprint(fingerprint))
        {
            finding.add_file(&doc.path);
            return;
        }

        if let Some(finding) = self
            .findings
            .iter_mut()
            .find(|f| f.kind == FindingKind::InterFileDuplicate && f.has_same_files(&participants))
        {
            finding.add_occurrence(fingerprint, text);
            return;
        }

        self.findings
            .push(Finding::inter(participants, fingerprint, text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn doc(path: &str, content: &str) -> Document {
        Document {
            path: PathBuf::from(path),
            content: DocumentContent::Text(content.to_string()),
        }
    }

    fn binary_doc(path: &str, bytes: &[u8]) -> Document {
        Document {
            path: PathBuf::from(path),
            content: DocumentContent::Binary(bytes.to_vec()),
        }
    }

    /// A paragraph that clears the default size gate: 5 lines, > 100 chars.
    fn paragraph(seed: &str) -> String {
        (0..5)
            .map(|i| format!("{seed} line {i} padding padding padding"))
            .collect::<Vec<_>>()
            .join("\n")
            + "\n"
    }

    fn analyze(docs: &[Document]) -> Analysis {
        Analyzer::new(BlockPolicy::default()).analyze(docs)
    }

    #[test]
    fn test_unique_documents_produce_no_findings() {
        let docs = vec![doc("a.txt", &paragraph("alpha")), doc("b.txt", &paragraph("beta"))];
        let analysis = analyze(&docs);
        assert!(analysis.findings.is_empty());
        assert_eq!(analysis.stats.duped_lines, 0);
        assert_eq!(analysis.stats.total_files, 2);
    }

    #[test]
    fn test_identical_files_single_finding() {
        let content = paragraph("same");
        let docs = vec![doc("a.txt", &content), doc("b.txt", &content)];
        let analysis = analyze(&docs);

        assert_eq!(analysis.findings.len(), 1);
        let finding = &analysis.findings[0];
        assert_eq!(finding.kind, FindingKind::IdenticalFile);
        assert_eq!(
            finding.files,
            vec![PathBuf::from("b.txt"), PathBuf::from("a.txt")]
        );
        assert!(finding.occurrences.is_empty());
        assert_eq!(analysis.stats.file_duplicates, 1);
    }

    #[test]
    fn test_identical_files_skip_block_scan() {
        // Both files contain the same qualifying paragraph twice; since
        // b.txt is a full duplicate of a.txt, only a.txt's own intra-file
        // repeat is reported.
        let content = format!("{}\n{}", paragraph("twin"), paragraph("twin"));
        let docs = vec![doc("a.txt", &content), doc("b.txt", &content)];
        let analysis = analyze(&docs);

        let kinds: Vec<FindingKind> = analysis.findings.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![FindingKind::IntraFileDuplicate, FindingKind::IdenticalFile]
        );
    }

    #[test]
    fn test_third_identical_file_joins_finding() {
        let content = paragraph("tri");
        let docs = vec![
            doc("a.txt", &content),
            doc("b.txt", &content),
            doc("c.txt", &content),
        ];
        let analysis = analyze(&docs);

        assert_eq!(analysis.findings.len(), 1);
        assert_eq!(
            analysis.findings[0].files,
            vec![
                PathBuf::from("b.txt"),
                PathBuf::from("a.txt"),
                PathBuf::from("c.txt")
            ]
        );
        assert_eq!(analysis.stats.file_duplicates, 2);
    }

    #[test]
    fn test_whitespace_only_difference_is_identical() {
        let docs = vec![
            doc("a.txt", "alpha beta\ngamma"),
            doc("b.txt", "alphabeta\n\n  gamma  "),
        ];
        let analysis = analyze(&docs);
        assert_eq!(analysis.findings.len(), 1);
        assert_eq!(analysis.findings[0].kind, FindingKind::IdenticalFile);
    }

    #[test]
    fn test_intra_file_repeat_records_repeats_only() {
        let p = paragraph("loop");
        let docs = vec![doc("a.txt", &format!("{p}\n{p}"))];
        let analysis = analyze(&docs);

        assert_eq!(analysis.findings.len(), 1);
        let finding = &analysis.findings[0];
        assert_eq!(finding.kind, FindingKind::IntraFileDuplicate);
        assert_eq!(finding.files, vec![PathBuf::from("a.txt")]);
        // Two appearances, one repeat recorded
        assert_eq!(finding.occurrences.len(), 1);
        assert_eq!(analysis.stats.block_duplicates_in_file, 1);
        assert_eq!(analysis.stats.block_duplicates, 1);
    }

    #[test]
    fn test_intra_file_triple_appearance_records_two_repeats() {
        let p = paragraph("loop");
        let docs = vec![doc("a.txt", &format!("{p}\n{p}\n{p}"))];
        let analysis = analyze(&docs);

        assert_eq!(analysis.findings.len(), 1);
        assert_eq!(analysis.findings[0].occurrences.len(), 2);
        assert_eq!(analysis.stats.block_duplicates_in_file, 2);
    }

    #[test]
    fn test_cross_file_shared_block() {
        let shared = paragraph("shared");
        let docs = vec![
            doc("a.txt", &format!("{}\n{shared}", paragraph("a-only"))),
            doc("b.txt", &format!("{shared}\n{}", paragraph("b-only"))),
        ];
        let analysis = analyze(&docs);

        assert_eq!(analysis.findings.len(), 1);
        let finding = &analysis.findings[0];
        assert_eq!(finding.kind, FindingKind::InterFileDuplicate);
        assert_eq!(
            finding.files,
            vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
        );
        assert_eq!(finding.occurrences.len(), 1);
    }

    #[test]
    fn test_three_files_sharing_block_one_finding() {
        let shared = paragraph("popular");
        let docs = vec![
            doc("a.txt", &format!("{}\n{shared}", paragraph("a"))),
            doc("b.txt", &format!("{}\n{shared}", paragraph("b"))),
            doc("c.txt", &format!("{}\n{shared}", paragraph("c"))),
        ];
        let analysis = analyze(&docs);

        assert_eq!(analysis.findings.len(), 1);
        let finding = &analysis.findings[0];
        assert_eq!(finding.kind, FindingKind::InterFileDuplicate);
        assert_eq!(
            finding.files,
            vec![
                PathBuf::from("a.txt"),
                PathBuf::from("b.txt"),
                PathBuf::from("c.txt")
            ]
        );
    }

    #[test]
    fn test_shared_block_also_repeated_within_one_file() {
        // The shared paragraph appears twice in a.txt and once in b.txt:
        // one intra-file finding for the repeat, one inter-file finding for
        // the cross-file match.
        let shared = paragraph("both");
        let docs = vec![
            doc("a.txt", &format!("{shared}\n{shared}")),
            doc("b.txt", &format!("{}\n{shared}", paragraph("filler"))),
        ];
        let analysis = analyze(&docs);

        assert_eq!(analysis.findings.len(), 2);
        assert_eq!(analysis.findings[0].kind, FindingKind::IntraFileDuplicate);
        assert_eq!(analysis.findings[0].files, vec![PathBuf::from("a.txt")]);
        assert_eq!(analysis.findings[1].kind, FindingKind::InterFileDuplicate);
        assert_eq!(
            analysis.findings[1].files,
            vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
        );
    }

    #[test]
    fn test_two_distinct_shared_blocks_merge_by_file_set() {
        let first = paragraph("first-shared");
        let second = paragraph("second-shared");
        // b.txt carries extra content so the two files are not full
        // duplicates of each other.
        let docs = vec![
            doc("a.txt", &format!("{first}\n{second}")),
            doc(
                "b.txt",
                &format!("{first}\n{second}\n{}", paragraph("b-extra")),
            ),
        ];
        let analysis = analyze(&docs);

        // One finding covering the {a, b} file set with both occurrences
        assert_eq!(analysis.findings.len(), 1);
        let finding = &analysis.findings[0];
        assert_eq!(finding.kind, FindingKind::InterFileDuplicate);
        assert_eq!(finding.occurrences.len(), 2);
        assert_eq!(finding.fingerprints.len(), 2);
    }

    #[test]
    fn test_overlapping_file_sets_stay_separate() {
        // a and b share one block; a and c share another. The participant
        // sets differ, so two findings result.
        let ab = paragraph("ab-shared");
        let ac = paragraph("ac-shared");
        let docs = vec![
            doc("a.txt", &format!("{ab}\n{ac}")),
            doc("b.txt", &format!("{ab}\n{}", paragraph("b-pad"))),
            doc("c.txt", &format!("{ac}\n{}", paragraph("c-pad"))),
        ];
        let analysis = analyze(&docs);

        assert_eq!(analysis.findings.len(), 2);
        assert_eq!(
            analysis.findings[0].files,
            vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
        );
        assert_eq!(
            analysis.findings[1].files,
            vec![PathBuf::from("a.txt"), PathBuf::from("c.txt")]
        );
    }

    #[test]
    fn test_sub_threshold_blocks_are_invisible() {
        // Shared content below the size gate produces nothing.
        let docs = vec![
            doc("a.txt", "short shared\n\nmore a"),
            doc("b.txt", "short shared\n\nmore b"),
        ];
        let analysis = analyze(&docs);
        assert!(analysis.findings.is_empty());
        assert_eq!(analysis.stats.block_duplicates, 0);
    }

    #[test]
    fn test_binary_documents_are_never_segmented() {
        // Identical binary payloads that contain blank-line separators;
        // only the whole-document comparison sees them.
        let payload = format!("{p}\n{p}", p = paragraph("binary"));
        let docs = vec![
            binary_doc("a.bin", payload.as_bytes()),
            binary_doc("b.bin", payload.as_bytes()),
        ];
        let analysis = analyze(&docs);

        assert_eq!(analysis.findings.len(), 1);
        assert_eq!(analysis.findings[0].kind, FindingKind::IdenticalFile);
        assert_eq!(analysis.stats.block_duplicates, 0);
    }

    #[test]
    fn test_duped_lines_accounting() {
        let content = paragraph("counted"); // 5 newlines including trailing
        let lines = content.matches('\n').count();
        let docs = vec![doc("a.txt", &content), doc("b.txt", &content)];
        let analysis = analyze(&docs);

        assert_eq!(analysis.stats.total_lines, lines * 2);
        assert_eq!(analysis.stats.duped_lines, lines);
    }

    #[test]
    fn test_determinism() {
        let shared = paragraph("det");
        let docs = vec![
            doc("a.txt", &format!("{shared}\n{}", paragraph("a"))),
            doc("b.txt", &format!("{shared}\n{}", paragraph("b"))),
            doc("c.txt", &paragraph("det")),
        ];

        let first = analyze(&docs);
        let second = analyze(&docs);

        assert_eq!(first.stats, second.stats);
        assert_eq!(first.findings.len(), second.findings.len());
        for (a, b) in first.findings.iter().zip(second.findings.iter()) {
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.files, b.files);
            assert_eq!(a.occurrences, b.occurrences);
        }
    }
}
