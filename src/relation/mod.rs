//! Relation kinds, expansion chains, and compiled comparison pairs.
//!
//! A relation specification tells the aggregator which reachable texts to
//! compare: each [`RelationPair`] holds one expansion chain per side and a
//! weight. Chains are built from [`RelationKind`] steps — sense-to-sense
//! walks (hypernym, meronym, ...) followed by exactly one textual terminal
//! (gloss, example, or lemma expansion). The type enforces that shape, so
//! chain evaluation never has to handle a token sequence mid-walk.

pub mod file;

pub use file::{parse_relation_spec, read_relation_file};

use crate::lexicon::SemanticLink;

/// One step in an expansion chain, drawn from the relation-file vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// Also-see senses (`also`).
    Also,
    /// Attribute senses (`attr`).
    Attr,
    /// Example sentences as tokens (`example`).
    Example,
    /// Gloss text as tokens (`glos`).
    Glos,
    /// Holonym senses (`holo`).
    Holo,
    /// Hypernym senses (`hype`).
    Hype,
    /// Hyponym senses (`hypo`).
    Hypo,
    /// Meronym senses (`mero`).
    Mero,
    /// Pertainym senses (`pert`).
    Pert,
    /// Similar-to senses (`sim`).
    Sim,
    /// Lemma names as tokens (`syns`).
    Syns,
}

impl RelationKind {
    /// Every kind, in relation-file vocabulary order.
    pub const ALL: [RelationKind; 11] = [
        RelationKind::Also,
        RelationKind::Attr,
        RelationKind::Example,
        RelationKind::Glos,
        RelationKind::Holo,
        RelationKind::Hype,
        RelationKind::Hypo,
        RelationKind::Mero,
        RelationKind::Pert,
        RelationKind::Sim,
        RelationKind::Syns,
    ];

    /// Map a relation-file token to its kind.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "also" => Some(RelationKind::Also),
            "attr" => Some(RelationKind::Attr),
            "example" => Some(RelationKind::Example),
            "glos" => Some(RelationKind::Glos),
            "holo" => Some(RelationKind::Holo),
            "hype" => Some(RelationKind::Hype),
            "hypo" => Some(RelationKind::Hypo),
            "mero" => Some(RelationKind::Mero),
            "pert" => Some(RelationKind::Pert),
            "sim" => Some(RelationKind::Sim),
            "syns" => Some(RelationKind::Syns),
            _ => None,
        }
    }

    /// The relation-file token for this kind.
    pub fn token(self) -> &'static str {
        match self {
            RelationKind::Also => "also",
            RelationKind::Attr => "attr",
            RelationKind::Example => "example",
            RelationKind::Glos => "glos",
            RelationKind::Holo => "holo",
            RelationKind::Hype => "hype",
            RelationKind::Hypo => "hypo",
            RelationKind::Mero => "mero",
            RelationKind::Pert => "pert",
            RelationKind::Sim => "sim",
            RelationKind::Syns => "syns",
        }
    }

    /// Whether this kind yields a token sequence (chain terminal) rather
    /// than a sense set.
    pub fn is_textual(self) -> bool {
        matches!(
            self,
            RelationKind::Glos | RelationKind::Example | RelationKind::Syns
        )
    }

    /// The semantic link a sense-to-sense kind expands through.
    /// `None` for the textual kinds.
    pub fn link(self) -> Option<SemanticLink> {
        match self {
            RelationKind::Also => Some(SemanticLink::AlsoSee),
            RelationKind::Attr => Some(SemanticLink::Attribute),
            RelationKind::Holo => Some(SemanticLink::Holonym),
            RelationKind::Hype => Some(SemanticLink::Hypernym),
            RelationKind::Hypo => Some(SemanticLink::Hyponym),
            RelationKind::Mero => Some(SemanticLink::Meronym),
            RelationKind::Pert => Some(SemanticLink::Pertainym),
            RelationKind::Sim => Some(SemanticLink::SimilarTo),
            RelationKind::Glos | RelationKind::Example | RelationKind::Syns => None,
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// A compiled expansion chain: zero or more sense-to-sense walks followed
/// by one textual terminal step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationChain {
    walks: Vec<RelationKind>,
    terminal: RelationKind,
}

impl RelationChain {
    /// Build a chain. Returns `None` if any walk is textual or the
    /// terminal is not.
    pub fn new(walks: Vec<RelationKind>, terminal: RelationKind) -> Option<Self> {
        if !terminal.is_textual() || walks.iter().any(|k| k.is_textual()) {
            return None;
        }
        Some(Self { walks, terminal })
    }

    /// The bare gloss chain (no walks).
    pub fn gloss() -> Self {
        Self {
            walks: Vec::new(),
            terminal: RelationKind::Glos,
        }
    }

    /// The sense-to-sense steps, in application order.
    pub fn walks(&self) -> &[RelationKind] {
        &self.walks
    }

    /// The textual terminal step.
    pub fn terminal(&self) -> RelationKind {
        self.terminal
    }

    /// All steps in application order, terminal last.
    pub fn steps(&self) -> impl Iterator<Item = RelationKind> + '_ {
        self.walks.iter().copied().chain(std::iter::once(self.terminal))
    }
}

impl std::fmt::Display for RelationChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.steps().enumerate() {
            if i > 0 {
                f.write_str("(")?;
            }
            write!(f, "{step}")?;
        }
        for _ in 0..self.walks.len() {
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// One configured comparison: a chain per side and a weight.
/// Immutable once compiled.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationPair {
    pub chain_a: RelationChain,
    pub chain_b: RelationChain,
    pub weight: f64,
}

impl RelationPair {
    /// Build a pair from two chains with the default weight of 1.
    pub fn new(chain_a: RelationChain, chain_b: RelationChain) -> Self {
        Self {
            chain_a,
            chain_b,
            weight: 1.0,
        }
    }

    /// Set the pair's weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

/// The default comparison set: the 3×3 cross of gloss, hypernym-gloss, and
/// hyponym-gloss from the adapted Lesk formulation, all at weight 1.
pub fn default_pairs() -> Vec<RelationPair> {
    let chains = || {
        [
            RelationChain::gloss(),
            RelationChain {
                walks: vec![RelationKind::Hype],
                terminal: RelationKind::Glos,
            },
            RelationChain {
                walks: vec![RelationKind::Hypo],
                terminal: RelationKind::Glos,
            },
        ]
    };

    let mut pairs = Vec::with_capacity(9);
    for a in chains() {
        for b in chains() {
            pairs.push(RelationPair::new(a.clone(), b));
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_table_round_trips() {
        for kind in RelationKind::ALL {
            assert_eq!(RelationKind::parse(kind.token()), Some(kind));
        }
        assert_eq!(RelationKind::parse("foo"), None);
        assert_eq!(RelationKind::parse("GLOS"), None); // lower-cased upstream
    }

    #[test]
    fn textual_kinds_have_no_link() {
        for kind in RelationKind::ALL {
            assert_eq!(kind.is_textual(), kind.link().is_none());
        }
    }

    #[test]
    fn chain_shape_is_enforced() {
        assert!(RelationChain::new(vec![RelationKind::Hype], RelationKind::Glos).is_some());
        // Textual walk rejected.
        assert!(RelationChain::new(vec![RelationKind::Glos], RelationKind::Glos).is_none());
        // Sense-to-sense terminal rejected.
        assert!(RelationChain::new(vec![], RelationKind::Hype).is_none());
    }

    #[test]
    fn chain_displays_in_file_notation() {
        let chain =
            RelationChain::new(vec![RelationKind::Hype, RelationKind::Hypo], RelationKind::Glos)
                .unwrap();
        assert_eq!(format!("{chain}"), "hype(hypo(glos))");
        assert_eq!(format!("{}", RelationChain::gloss()), "glos");
    }

    #[test]
    fn default_pairs_cover_the_adapted_lesk_cross() {
        let pairs = default_pairs();
        assert_eq!(pairs.len(), 9);
        assert!(pairs.iter().all(|p| p.weight == 1.0));
        assert!(pairs.iter().all(|p| p.chain_a.terminal() == RelationKind::Glos));
        // One of them is the plain gloss-gloss comparison.
        assert!(
            pairs
                .iter()
                .any(|p| p.chain_a == RelationChain::gloss() && p.chain_b == RelationChain::gloss())
        );
    }
}
