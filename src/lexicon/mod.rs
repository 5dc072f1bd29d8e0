//! Lexical database access: senses, glosses, lemmas, and semantic links.
//!
//! The [`Lexicon`] trait is the provider interface the relatedness engine
//! consumes. [`MemoryLexicon`] is the in-memory WordNet-style
//! implementation (programmatic or JSON-loaded); [`CachedLexicon`] wraps
//! any provider with a memoizing cache.

pub mod cache;
pub mod memory;

pub use cache::CachedLexicon;
pub use memory::{MemoryLexicon, SenseRecord};

use serde::{Deserialize, Serialize};

/// Opaque identifier for a word sense (a synset).
///
/// Assigned by the lexicon that owns the sense; carries no meaning outside
/// its provider and is never mutated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct SenseId(u64);

impl SenseId {
    /// Create a `SenseId` from a raw `u64`.
    pub fn new(raw: u64) -> Self {
        SenseId(raw)
    }

    /// Get the underlying `u64` value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sense:{}", self.0)
    }
}

/// The sense-to-sense relations a lexicon exposes.
///
/// Each link already merges the reference database's finer-grained
/// pointers (see [`Lexicon::related`]); chain evaluation never needs to
/// distinguish, say, an instance hypernym from a plain one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticLink {
    /// Broader sense ("is-a" upward), plain and instance-level merged.
    Hypernym,
    /// Narrower sense ("is-a" downward), plain and instance-level merged.
    Hyponym,
    /// Whole of which this sense is a part; member/part/substance merged.
    Holonym,
    /// Part of this sense; member/part/substance merged.
    Meronym,
    /// Attribute link (noun ↔ adjective value).
    Attribute,
    /// Similar-to link between adjective senses.
    SimilarTo,
    /// Pertainym link ("pertaining to").
    Pertainym,
    /// Also-see link, sense-level and lemma-level merged.
    AlsoSee,
}

impl SemanticLink {
    /// Every link kind, for exhaustive table-driven tests.
    pub const ALL: [SemanticLink; 8] = [
        SemanticLink::Hypernym,
        SemanticLink::Hyponym,
        SemanticLink::Holonym,
        SemanticLink::Meronym,
        SemanticLink::Attribute,
        SemanticLink::SimilarTo,
        SemanticLink::Pertainym,
        SemanticLink::AlsoSee,
    ];
}

impl std::fmt::Display for SemanticLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SemanticLink::Hypernym => "hypernym",
            SemanticLink::Hyponym => "hyponym",
            SemanticLink::Holonym => "holonym",
            SemanticLink::Meronym => "meronym",
            SemanticLink::Attribute => "attribute",
            SemanticLink::SimilarTo => "similar-to",
            SemanticLink::Pertainym => "pertainym",
            SemanticLink::AlsoSee => "also-see",
        };
        f.write_str(name)
    }
}

/// Provider interface for a WordNet-style lexical database.
///
/// Lookups are referentially transparent for a fixed database, which is
/// what makes memoization ([`CachedLexicon`]) and caller-side parallelism
/// sound. Unknown words resolve to an empty sense list — never an error.
pub trait Lexicon {
    /// All candidate senses for a word form (already joiner-normalized).
    fn senses(&self, word: &str) -> Vec<SenseId>;

    /// The sense's definition text.
    fn gloss(&self, sense: SenseId) -> String;

    /// The sense's example sentences.
    fn examples(&self, sense: SenseId) -> Vec<String>;

    /// The sense's lemma names.
    fn lemmas(&self, sense: SenseId) -> Vec<String>;

    /// Senses reachable over one semantic link, with the merge semantics
    /// documented on [`SemanticLink`]. For [`SemanticLink::AlsoSee`] this
    /// includes lemma-level targets mapped back to their owning sense; the
    /// reference database populates the two sources inconsistently and
    /// that behavior is preserved here.
    fn related(&self, sense: SenseId, link: SemanticLink) -> Vec<SenseId>;

    /// The character joining the parts of a multi-word entry.
    fn word_joiner(&self) -> char {
        '_'
    }
}
