//! Whole-document and block fingerprint indexes.
//!
//! Two separate maps on purpose: the document index answers "which document
//! first produced this whole-file fingerprint" and carries the slot of the
//! identical-file finding once one exists; the block index tracks every
//! document that produced a given block fingerprint, in first-seen order.
//! Reusing one structure for both jobs is what made the invariants hard to
//! check in the first place.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::fingerprint::Fingerprint;

/// Position of a document in the corpus processing order.
pub type DocId = usize;

/// Document-index entry: the first document seen with a fingerprint, plus
/// the identical-file finding slot once a second document has shown up.
#[derive(Debug)]
pub struct DocEntry {
    /// First document seen with this fingerprint.
    pub doc: DocId,
    /// Slot of the identical-file finding in the findings list, set the
    /// first time a duplicate of this document is seen.
    pub finding: Option<usize>,
}

/// Maps whole-document fingerprints to their first occurrence.
#[derive(Debug, Default)]
pub struct DocumentIndex {
    entries: HashMap<Fingerprint, DocEntry>,
}

impl DocumentIndex {
    /// Record `doc` as the first occurrence of `fingerprint`, or return the
    /// existing entry if the fingerprint was already seen, meaning `doc` is
    /// a full duplicate of `entry.doc`. The entry is mutable so the caller
    /// can attach the finding slot.
    pub fn insert_or_get(
        &mut self,
        fingerprint: Fingerprint,
        doc: DocId,
    ) -> Option<&mut DocEntry> {
        match self.entries.entry(fingerprint) {
            Entry::Occupied(e) => Some(e.into_mut()),
            Entry::Vacant(v) => {
                v.insert(DocEntry { doc, finding: None });
                None
            }
        }
    }
}

/// Result of recording a block sighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockMatch {
    /// First document to produce this block fingerprint.
    First,
    /// The same document produced this fingerprint before: the block
    /// repeats within the file. The recorded set is left unchanged.
    IntraRepeat,
    /// A new document joins documents that produced this fingerprint
    /// earlier. Holds the full set in first-seen order, the new document
    /// last.
    CrossFile(Vec<DocId>),
}

/// Maps block fingerprints to the ordered set of documents that produced a
/// qualifying block with that fingerprint.
#[derive(Debug, Default)]
pub struct BlockIndex {
    entries: HashMap<Fingerprint, Vec<DocId>>,
}

impl BlockIndex {
    /// Record that `doc` produced a qualifying block with `fingerprint`
    /// and classify the sighting.
    pub fn record(&mut self, fingerprint: Fingerprint, doc: DocId) -> BlockMatch {
        match self.entries.entry(fingerprint) {
            Entry::Vacant(v) => {
                v.insert(vec![doc]);
                BlockMatch::First
            }
            Entry::Occupied(mut e) => {
                let docs = e.get_mut();
                if docs.contains(&doc) {
                    BlockMatch::IntraRepeat
                } else {
                    docs.push(doc);
                    BlockMatch::CrossFile(docs.clone())
                }
            }
        }
    }
}
