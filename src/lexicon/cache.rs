//! Memoizing decorator for lexicon providers.
//!
//! Relation lookups are referentially transparent for a fixed database, so
//! [`CachedLexicon`] caches them keyed by sense identity in `DashMap`s:
//! concurrent reads need no locking, and two calls racing to populate the
//! same entry just recompute redundantly. The cache is owned by the
//! decorator instance — never global — so providers over different
//! database snapshots coexist safely.
//!
//! Cached values never contain separator markers: markers are minted per
//! scoring call, and caching one would fabricate cross-call matches.

use dashmap::DashMap;

use super::{Lexicon, SemanticLink, SenseId};

/// A [`Lexicon`] wrapper that memoizes per-sense lookups.
pub struct CachedLexicon<L> {
    inner: L,
    /// Per-map entry bound; `None` is unbounded.
    capacity: Option<usize>,
    glosses: DashMap<SenseId, String>,
    examples: DashMap<SenseId, Vec<String>>,
    lemmas: DashMap<SenseId, Vec<String>>,
    related: DashMap<(SenseId, SemanticLink), Vec<SenseId>>,
}

impl<L: Lexicon> CachedLexicon<L> {
    /// Wrap a provider with an unbounded cache.
    pub fn new(inner: L) -> Self {
        Self::with_capacity(inner, None)
    }

    /// Wrap a provider with a bounded cache.
    ///
    /// When a map reaches `capacity` entries, further lookups compute
    /// without inserting; existing entries keep serving hits. Entries are
    /// never invalidated at runtime.
    pub fn with_capacity(inner: L, capacity: Option<usize>) -> Self {
        Self {
            inner,
            capacity,
            glosses: DashMap::new(),
            examples: DashMap::new(),
            lemmas: DashMap::new(),
            related: DashMap::new(),
        }
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// Total entries held across all cache maps.
    pub fn cached_entries(&self) -> usize {
        self.glosses.len() + self.examples.len() + self.lemmas.len() + self.related.len()
    }

    fn room_for<K: std::hash::Hash + Eq, V>(&self, map: &DashMap<K, V>) -> bool {
        self.capacity.is_none_or(|cap| map.len() < cap)
    }
}

impl<L: Lexicon> Lexicon for CachedLexicon<L> {
    fn senses(&self, word: &str) -> Vec<SenseId> {
        // Word lookups are a thin index hit in every real provider; only
        // the per-sense expansions are worth memoizing.
        self.inner.senses(word)
    }

    fn gloss(&self, sense: SenseId) -> String {
        if let Some(hit) = self.glosses.get(&sense) {
            return hit.clone();
        }
        let value = self.inner.gloss(sense);
        if self.room_for(&self.glosses) {
            self.glosses.insert(sense, value.clone());
        }
        value
    }

    fn examples(&self, sense: SenseId) -> Vec<String> {
        if let Some(hit) = self.examples.get(&sense) {
            return hit.clone();
        }
        let value = self.inner.examples(sense);
        if self.room_for(&self.examples) {
            self.examples.insert(sense, value.clone());
        }
        value
    }

    fn lemmas(&self, sense: SenseId) -> Vec<String> {
        if let Some(hit) = self.lemmas.get(&sense) {
            return hit.clone();
        }
        let value = self.inner.lemmas(sense);
        if self.room_for(&self.lemmas) {
            self.lemmas.insert(sense, value.clone());
        }
        value
    }

    fn related(&self, sense: SenseId, link: SemanticLink) -> Vec<SenseId> {
        if let Some(hit) = self.related.get(&(sense, link)) {
            return hit.clone();
        }
        let value = self.inner.related(sense, link);
        if self.room_for(&self.related) {
            self.related.insert((sense, link), value.clone());
        }
        value
    }

    fn word_joiner(&self) -> char {
        self.inner.word_joiner()
    }
}

impl<L> std::fmt::Debug for CachedLexicon<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedLexicon")
            .field("capacity", &self.capacity)
            .field("glosses", &self.glosses.len())
            .field("related", &self.related.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// A provider that counts how often each method body runs.
    #[derive(Default)]
    struct CountingLexicon {
        gloss_calls: AtomicUsize,
        related_calls: AtomicUsize,
    }

    impl Lexicon for CountingLexicon {
        fn senses(&self, _word: &str) -> Vec<SenseId> {
            vec![SenseId::new(0)]
        }

        fn gloss(&self, sense: SenseId) -> String {
            self.gloss_calls.fetch_add(1, Ordering::SeqCst);
            format!("gloss of {sense}")
        }

        fn examples(&self, _sense: SenseId) -> Vec<String> {
            Vec::new()
        }

        fn lemmas(&self, _sense: SenseId) -> Vec<String> {
            Vec::new()
        }

        fn related(&self, sense: SenseId, _link: SemanticLink) -> Vec<SenseId> {
            self.related_calls.fetch_add(1, Ordering::SeqCst);
            vec![SenseId::new(sense.get() + 1)]
        }
    }

    #[test]
    fn repeated_lookups_hit_the_cache() {
        let cached = CachedLexicon::new(CountingLexicon::default());
        let s = SenseId::new(7);

        let first = cached.gloss(s);
        let second = cached.gloss(s);
        assert_eq!(first, second);
        assert_eq!(cached.inner().gloss_calls.load(Ordering::SeqCst), 1);

        cached.related(s, SemanticLink::Hypernym);
        cached.related(s, SemanticLink::Hypernym);
        assert_eq!(cached.inner().related_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn distinct_links_cache_separately() {
        let cached = CachedLexicon::new(CountingLexicon::default());
        let s = SenseId::new(1);
        cached.related(s, SemanticLink::Hypernym);
        cached.related(s, SemanticLink::Hyponym);
        assert_eq!(cached.inner().related_calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn bounded_cache_stops_inserting_but_stays_correct() {
        let cached = CachedLexicon::with_capacity(CountingLexicon::default(), Some(1));

        cached.gloss(SenseId::new(1)); // fills the single slot
        cached.gloss(SenseId::new(2)); // computes, not inserted
        cached.gloss(SenseId::new(2)); // computes again
        assert_eq!(cached.inner().gloss_calls.load(Ordering::SeqCst), 3);

        // The resident entry still serves hits.
        cached.gloss(SenseId::new(1));
        assert_eq!(cached.inner().gloss_calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn cached_results_match_uncached() {
        let plain = CountingLexicon::default();
        let cached = CachedLexicon::new(CountingLexicon::default());
        let s = SenseId::new(3);
        assert_eq!(plain.gloss(s), cached.gloss(s));
        assert_eq!(
            plain.related(s, SemanticLink::Meronym),
            cached.related(s, SemanticLink::Meronym)
        );
    }
}
