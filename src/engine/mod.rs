//! The duplicate-detection engine.
//!
//! # Architecture
//!
//! The engine runs once per corpus, strictly sequentially, over documents
//! in their fixed corpus order:
//!
//! - [`segment`]: splits a document into blank-line-delimited blocks and
//!   produces the whitespace-stripped form used for hashing
//! - [`fingerprint`]: BLAKE3 content addressing
//! - [`index`]: the whole-document and block fingerprint indexes
//! - [`findings`]: aggregated duplicate relationships and run counters
//! - [`analyzer`]: the comparison phase tying the above together
//!
//! # Example
//!
//! ```
//! use textdupe::corpus::{Document, DocumentContent};
//! use textdupe::engine::{Analyzer, BlockPolicy};
//! use std::path::PathBuf;
//!
//! let docs = vec![
//!     Document {
//!         path: PathBuf::from("a.txt"),
//!         content: DocumentContent::Text("shared content".to_string()),
//!     },
//!     Document {
//!         path: PathBuf::from("b.txt"),
//!         content: DocumentContent::Text("shared content".to_string()),
//!     },
//! ];
//!
//! let analysis = Analyzer::new(BlockPolicy::default()).analyze(&docs);
//! assert_eq!(analysis.stats.file_duplicates, 1);
//! ```

pub mod analyzer;
pub mod findings;
pub mod fingerprint;
pub mod index;
pub mod segment;

pub use analyzer::{Analysis, Analyzer, BlockPolicy};
pub use findings::{Finding, FindingKind, RunStats};
pub use fingerprint::Fingerprint;
