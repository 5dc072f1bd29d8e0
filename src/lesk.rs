//! Extended Lesk relatedness: relation-chain expansion and weighted
//! overlap aggregation.
//!
//! [`ExtendedLesk`] owns a lexicon, a compiled comparison set, and an
//! overlap scorer. For each configured [`RelationPair`] it expands both
//! sense groups through their chains — sense-to-sense walks take the
//! duplicate-preserving union of link targets; the terminal step flattens
//! glosses, examples, or lemmas into a token sequence with a fresh
//! separator between each contribution — then scores the two sequences and
//! accumulates the weighted sum.

use rayon::prelude::*;

use crate::lexicon::{Lexicon, SenseId};
use crate::overlap::OverlapScorer;
use crate::relation::{RelationChain, RelationKind, RelationPair, default_pairs};
use crate::stopwords::StopwordSet;
use crate::token::{SeparatorGen, Token, tokenize};

/// Configuration for the Extended Lesk engine.
#[derive(Debug, Clone)]
pub struct LeskConfig {
    /// The compiled comparison set.
    pub pairs: Vec<RelationPair>,
    /// Stopwords trimmed from match boundaries.
    pub stopwords: StopwordSet,
}

impl Default for LeskConfig {
    fn default() -> Self {
        Self {
            pairs: default_pairs(),
            stopwords: StopwordSet::default_english(),
        }
    }
}

/// The Extended Lesk relatedness engine.
pub struct ExtendedLesk<L> {
    lexicon: L,
    pairs: Vec<RelationPair>,
    scorer: OverlapScorer,
}

impl<L: Lexicon> ExtendedLesk<L> {
    /// Create an engine over a lexicon with the given configuration.
    pub fn new(lexicon: L, config: LeskConfig) -> Self {
        tracing::debug!(pairs = config.pairs.len(), "initializing extended lesk");
        Self {
            lexicon,
            pairs: config.pairs,
            scorer: OverlapScorer::new(config.stopwords),
        }
    }

    /// Create an engine with the default comparison set and the built-in
    /// English stopwords.
    pub fn with_defaults(lexicon: L) -> Self {
        Self::new(lexicon, LeskConfig::default())
    }

    /// The lexicon this engine reads from.
    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    /// The compiled comparison set.
    pub fn pairs(&self) -> &[RelationPair] {
        &self.pairs
    }

    /// Relatedness between two sense groups.
    ///
    /// Sums, over every configured relation pair, the overlap score of the
    /// two expanded token sequences times the pair's weight. The input
    /// groups are never altered; expansion works on copies. An empty group
    /// contributes nothing from its side, so the result degrades to a
    /// lower (possibly zero) score rather than failing.
    pub fn synset_relatedness(&self, group_a: &[SenseId], group_b: &[SenseId]) -> f64 {
        // One generator spans both sides of the whole call so no two
        // markers in any comparison coincide.
        let mut markers = SeparatorGen::new();

        let mut total = 0.0;
        for pair in &self.pairs {
            let text_a = self.expand(group_a, &pair.chain_a, &mut markers);
            let text_b = self.expand(group_b, &pair.chain_b, &mut markers);
            let overlap = self.scorer.score(&text_a, &text_b);
            tracing::debug!(
                chain_a = %pair.chain_a,
                chain_b = %pair.chain_b,
                weight = pair.weight,
                overlap,
                "relation pair scored"
            );
            total += overlap * pair.weight;
        }
        total
    }

    /// Relatedness between two ambiguous words.
    ///
    /// Each word is resolved to its candidate sense group first; an
    /// unknown word resolves to an empty group (documented behavior, not
    /// an error), so the comparison still returns a number.
    pub fn word_relatedness(&self, word_a: &str, word_b: &str) -> f64 {
        let group_a = self.senses_for(word_a);
        let group_b = self.senses_for(word_b);
        self.synset_relatedness(&group_a, &group_b)
    }

    /// Resolve a raw word to its candidate senses.
    ///
    /// Whitespace is replaced with the lexicon's multi-word joiner before
    /// lookup. Unknown words yield an empty group.
    pub fn senses_for(&self, word: &str) -> Vec<SenseId> {
        let joiner = self.lexicon.word_joiner().to_string();
        let normalized = word.split_whitespace().collect::<Vec<_>>().join(&joiner);
        self.lexicon.senses(&normalized)
    }

    /// Score many word pairs with a parallel map.
    ///
    /// Each comparison is independent; the only shared state is the
    /// lexicon's cache, which is safe for concurrent reads.
    pub fn batch_relatedness(&self, word_pairs: &[(String, String)]) -> Vec<f64>
    where
        L: Sync,
    {
        word_pairs
            .par_iter()
            .map(|(a, b)| self.word_relatedness(a, b))
            .collect()
    }

    /// Expand a sense group through one chain into a token sequence.
    fn expand(&self, group: &[SenseId], chain: &RelationChain, markers: &mut SeparatorGen) -> Vec<Token> {
        let mut senses: Vec<SenseId> = group.to_vec();
        for link in chain.walks().iter().filter_map(|w| w.link()) {
            senses = senses
                .iter()
                .flat_map(|&s| self.lexicon.related(s, link))
                .collect();
        }

        match chain.terminal() {
            RelationKind::Glos => self.concat_glosses(&senses, markers),
            RelationKind::Example => self.concat_examples(&senses, markers),
            RelationKind::Syns => self.concat_lemmas(&senses, markers),
            // Non-textual terminals are unrepresentable in RelationChain.
            _ => Vec::new(),
        }
    }

    /// Flatten the group's glosses, a separator between each sense.
    fn concat_glosses(&self, senses: &[SenseId], markers: &mut SeparatorGen) -> Vec<Token> {
        let mut out = Vec::new();
        for &sense in senses {
            if !out.is_empty() {
                out.push(markers.fresh());
            }
            out.extend(tokenize(&self.lexicon.gloss(sense)));
        }
        out
    }

    /// Flatten the group's examples, a separator between each sentence.
    fn concat_examples(&self, senses: &[SenseId], markers: &mut SeparatorGen) -> Vec<Token> {
        let mut out = Vec::new();
        for &sense in senses {
            for example in self.lexicon.examples(sense) {
                if !out.is_empty() {
                    out.push(markers.fresh());
                }
                out.extend(tokenize(&example));
            }
        }
        out
    }

    /// Flatten the group's lemma names, a separator between each lemma.
    ///
    /// Multi-word names are split on the joiner so they compare
    /// token-by-token against gloss and example text.
    fn concat_lemmas(&self, senses: &[SenseId], markers: &mut SeparatorGen) -> Vec<Token> {
        let joiner = self.lexicon.word_joiner();
        let mut out = Vec::new();
        for &sense in senses {
            for lemma in self.lexicon.lemmas(sense) {
                if !out.is_empty() {
                    out.push(markers.fresh());
                }
                out.extend(
                    lemma
                        .split(|c: char| c == joiner || c.is_whitespace())
                        .filter(|part| !part.is_empty())
                        .map(Token::word),
                );
            }
        }
        out
    }
}

impl<L> std::fmt::Debug for ExtendedLesk<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtendedLesk")
            .field("pairs", &self.pairs.len())
            .finish()
    }
}
