// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # lexirel
//!
//! Extended Lesk semantic relatedness over WordNet-style lexicons:
//! compare the glosses, examples, and lemmas reachable from two sense
//! groups through configurable relation chains, scoring lexical overlap
//! with squared contiguous-match lengths.
//!
//! ## Architecture
//!
//! - **Overlap scoring** (`overlap`): greedy non-overlapping
//!   longest-common-substring extraction with stopword trimming
//! - **Relation chains** (`relation`): compiled comparison pairs and the
//!   WordNet::Similarity relation-file parser
//! - **Lexicon access** (`lexicon`): provider trait, in-memory database,
//!   memoizing cache decorator
//! - **Aggregation** (`lesk`): chain expansion and weighted summing
//!
//! ## Library usage
//!
//! ```
//! use lexirel::lesk::ExtendedLesk;
//! use lexirel::lexicon::{MemoryLexicon, SenseRecord};
//!
//! let lexicon = MemoryLexicon::from_records(vec![
//!     SenseRecord::new("car.n.01", "a small vehicle").lemma("car"),
//!     SenseRecord::new("bus.n.01", "a large vehicle").lemma("bus"),
//! ])
//! .unwrap();
//!
//! let lesk = ExtendedLesk::with_defaults(lexicon);
//! assert!(lesk.word_relatedness("car", "bus") > 0.0);
//! ```

pub mod error;
pub mod lesk;
pub mod lexicon;
pub mod overlap;
pub mod relation;
pub mod stopwords;
pub mod token;
