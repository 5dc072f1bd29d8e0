//! In-memory WordNet-style lexical database.
//!
//! Senses are stored as [`SenseRecord`]s whose relation targets are string
//! keys (e.g. `"vehicle.n.01"`), resolved to [`SenseId`]s in a second pass
//! when the lexicon is built. The pointer lists mirror the reference
//! database's fine-grained kinds (plain vs. instance hypernyms,
//! member/part/substance holonyms, sense-level vs. lemma-level also-sees);
//! [`Lexicon::related`] merges them into the undifferentiated sets chain
//! evaluation works with.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LexiconError;

use super::{Lexicon, SemanticLink, SenseId};

/// One sense as authored in a lexicon snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SenseRecord {
    /// Stable sense key, e.g. `"car.n.01"`.
    pub key: String,
    /// Definition text.
    pub gloss: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lemmas: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hypernyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instance_hypernyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hyponyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instance_hyponyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub member_holonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub part_holonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub substance_holonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub member_meronyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub part_meronyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub substance_meronyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub similar_tos: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pertainyms: Vec<String>,
    /// Sense-level also-see targets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub also_sees: Vec<String>,
    /// Lemma-level also-see targets, stored by owning sense key. The
    /// reference database populates sense-level and lemma-level also-sees
    /// inconsistently; both lists are kept so the merge preserves that.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lemma_also_sees: Vec<String>,
}

impl SenseRecord {
    /// Start a record with a key and gloss.
    pub fn new(key: &str, gloss: &str) -> Self {
        Self {
            key: key.into(),
            gloss: gloss.into(),
            ..Default::default()
        }
    }

    pub fn lemma(mut self, lemma: &str) -> Self {
        self.lemmas.push(lemma.into());
        self
    }

    pub fn example(mut self, example: &str) -> Self {
        self.examples.push(example.into());
        self
    }

    pub fn hypernym(mut self, key: &str) -> Self {
        self.hypernyms.push(key.into());
        self
    }

    pub fn instance_hypernym(mut self, key: &str) -> Self {
        self.instance_hypernyms.push(key.into());
        self
    }

    pub fn hyponym(mut self, key: &str) -> Self {
        self.hyponyms.push(key.into());
        self
    }

    pub fn instance_hyponym(mut self, key: &str) -> Self {
        self.instance_hyponyms.push(key.into());
        self
    }

    pub fn member_holonym(mut self, key: &str) -> Self {
        self.member_holonyms.push(key.into());
        self
    }

    pub fn part_holonym(mut self, key: &str) -> Self {
        self.part_holonyms.push(key.into());
        self
    }

    pub fn substance_holonym(mut self, key: &str) -> Self {
        self.substance_holonyms.push(key.into());
        self
    }

    pub fn member_meronym(mut self, key: &str) -> Self {
        self.member_meronyms.push(key.into());
        self
    }

    pub fn part_meronym(mut self, key: &str) -> Self {
        self.part_meronyms.push(key.into());
        self
    }

    pub fn substance_meronym(mut self, key: &str) -> Self {
        self.substance_meronyms.push(key.into());
        self
    }

    pub fn attribute(mut self, key: &str) -> Self {
        self.attributes.push(key.into());
        self
    }

    pub fn similar_to(mut self, key: &str) -> Self {
        self.similar_tos.push(key.into());
        self
    }

    pub fn pertainym(mut self, key: &str) -> Self {
        self.pertainyms.push(key.into());
        self
    }

    pub fn also_see(mut self, key: &str) -> Self {
        self.also_sees.push(key.into());
        self
    }

    pub fn lemma_also_see(mut self, key: &str) -> Self {
        self.lemma_also_sees.push(key.into());
        self
    }
}

/// Resolved fine-grained pointer lists for one sense.
#[derive(Debug, Clone, Default)]
struct LinkTable {
    hypernyms: Vec<SenseId>,
    instance_hypernyms: Vec<SenseId>,
    hyponyms: Vec<SenseId>,
    instance_hyponyms: Vec<SenseId>,
    member_holonyms: Vec<SenseId>,
    part_holonyms: Vec<SenseId>,
    substance_holonyms: Vec<SenseId>,
    member_meronyms: Vec<SenseId>,
    part_meronyms: Vec<SenseId>,
    substance_meronyms: Vec<SenseId>,
    attributes: Vec<SenseId>,
    similar_tos: Vec<SenseId>,
    pertainyms: Vec<SenseId>,
    also_sees: Vec<SenseId>,
    lemma_also_sees: Vec<SenseId>,
}

#[derive(Debug, Clone)]
struct SenseEntry {
    key: String,
    gloss: String,
    examples: Vec<String>,
    lemmas: Vec<String>,
    links: LinkTable,
}

/// An in-memory lexical database.
pub struct MemoryLexicon {
    entries: Vec<SenseEntry>,
    key_to_id: HashMap<String, SenseId>,
    /// Normalized word form → candidate senses, derived from lemma names.
    word_index: HashMap<String, Vec<SenseId>>,
}

impl MemoryLexicon {
    /// Build a lexicon from sense records, resolving relation keys.
    ///
    /// Fails on duplicate sense keys or a relation target that names no
    /// record in the snapshot.
    pub fn from_records(records: Vec<SenseRecord>) -> Result<Self, LexiconError> {
        let mut key_to_id = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            let id = SenseId::new(i as u64);
            if key_to_id.insert(record.key.clone(), id).is_some() {
                return Err(LexiconError::Malformed {
                    message: format!("duplicate sense key \"{}\"", record.key),
                });
            }
        }

        let mut entries = Vec::with_capacity(records.len());
        let mut word_index: HashMap<String, Vec<SenseId>> = HashMap::new();
        for (i, record) in records.into_iter().enumerate() {
            let id = SenseId::new(i as u64);
            let links = LinkTable {
                hypernyms: resolve(&key_to_id, &record.hypernyms, &record.key)?,
                instance_hypernyms: resolve(&key_to_id, &record.instance_hypernyms, &record.key)?,
                hyponyms: resolve(&key_to_id, &record.hyponyms, &record.key)?,
                instance_hyponyms: resolve(&key_to_id, &record.instance_hyponyms, &record.key)?,
                member_holonyms: resolve(&key_to_id, &record.member_holonyms, &record.key)?,
                part_holonyms: resolve(&key_to_id, &record.part_holonyms, &record.key)?,
                substance_holonyms: resolve(&key_to_id, &record.substance_holonyms, &record.key)?,
                member_meronyms: resolve(&key_to_id, &record.member_meronyms, &record.key)?,
                part_meronyms: resolve(&key_to_id, &record.part_meronyms, &record.key)?,
                substance_meronyms: resolve(&key_to_id, &record.substance_meronyms, &record.key)?,
                attributes: resolve(&key_to_id, &record.attributes, &record.key)?,
                similar_tos: resolve(&key_to_id, &record.similar_tos, &record.key)?,
                pertainyms: resolve(&key_to_id, &record.pertainyms, &record.key)?,
                also_sees: resolve(&key_to_id, &record.also_sees, &record.key)?,
                lemma_also_sees: resolve(&key_to_id, &record.lemma_also_sees, &record.key)?,
            };

            for lemma in &record.lemmas {
                let word = normalize_word(lemma, '_');
                let senses = word_index.entry(word).or_default();
                if !senses.contains(&id) {
                    senses.push(id);
                }
            }

            entries.push(SenseEntry {
                key: record.key,
                gloss: record.gloss,
                examples: record.examples,
                lemmas: record.lemmas,
                links,
            });
        }

        tracing::debug!(
            senses = entries.len(),
            words = word_index.len(),
            "built in-memory lexicon"
        );

        Ok(Self {
            entries,
            key_to_id,
            word_index,
        })
    }

    /// Parse a JSON snapshot (an array of sense records).
    pub fn from_json_str(src: &str) -> Result<Self, LexiconError> {
        let records: Vec<SenseRecord> =
            serde_json::from_str(src).map_err(|e| LexiconError::Malformed {
                message: e.to_string(),
            })?;
        Self::from_records(records)
    }

    /// Load a JSON snapshot from disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&src)
    }

    /// Look up a sense by its stable key.
    pub fn lookup(&self, key: &str) -> Option<SenseId> {
        self.key_to_id.get(key).copied()
    }

    /// The stable key of a sense, if it belongs to this lexicon.
    pub fn sense_key(&self, sense: SenseId) -> Option<&str> {
        self.entry(sense).map(|e| e.key.as_str())
    }

    /// Number of senses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon holds no senses.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, sense: SenseId) -> Option<&SenseEntry> {
        self.entries.get(sense.get() as usize)
    }
}

impl std::fmt::Debug for MemoryLexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryLexicon")
            .field("senses", &self.entries.len())
            .field("words", &self.word_index.len())
            .finish()
    }
}

impl Lexicon for MemoryLexicon {
    fn senses(&self, word: &str) -> Vec<SenseId> {
        self.word_index
            .get(&normalize_word(word, self.word_joiner()))
            .cloned()
            .unwrap_or_default()
    }

    fn gloss(&self, sense: SenseId) -> String {
        self.entry(sense).map(|e| e.gloss.clone()).unwrap_or_default()
    }

    fn examples(&self, sense: SenseId) -> Vec<String> {
        self.entry(sense).map(|e| e.examples.clone()).unwrap_or_default()
    }

    fn lemmas(&self, sense: SenseId) -> Vec<String> {
        self.entry(sense).map(|e| e.lemmas.clone()).unwrap_or_default()
    }

    fn related(&self, sense: SenseId, link: SemanticLink) -> Vec<SenseId> {
        let Some(entry) = self.entry(sense) else {
            return Vec::new();
        };
        let t = &entry.links;
        match link {
            SemanticLink::Hypernym => merged(&[&t.hypernyms, &t.instance_hypernyms]),
            SemanticLink::Hyponym => merged(&[&t.hyponyms, &t.instance_hyponyms]),
            SemanticLink::Holonym => {
                merged(&[&t.member_holonyms, &t.part_holonyms, &t.substance_holonyms])
            }
            SemanticLink::Meronym => {
                merged(&[&t.member_meronyms, &t.part_meronyms, &t.substance_meronyms])
            }
            SemanticLink::Attribute => t.attributes.clone(),
            SemanticLink::SimilarTo => t.similar_tos.clone(),
            SemanticLink::Pertainym => t.pertainyms.clone(),
            SemanticLink::AlsoSee => merged(&[&t.also_sees, &t.lemma_also_sees]),
        }
    }
}

/// Concatenate pointer lists in order, duplicates preserved.
fn merged(lists: &[&Vec<SenseId>]) -> Vec<SenseId> {
    let mut out = Vec::with_capacity(lists.iter().map(|l| l.len()).sum());
    for list in lists {
        out.extend_from_slice(list);
    }
    out
}

/// Lower-case a word and map internal whitespace to the joiner character.
fn normalize_word(word: &str, joiner: char) -> String {
    let mut out = String::with_capacity(word.len());
    let mut parts = word.split_whitespace();
    if let Some(first) = parts.next() {
        out.push_str(&first.to_lowercase());
        for part in parts {
            out.push(joiner);
            out.push_str(&part.to_lowercase());
        }
    }
    out
}

fn resolve(
    key_to_id: &HashMap<String, SenseId>,
    keys: &[String],
    owner: &str,
) -> Result<Vec<SenseId>, LexiconError> {
    keys.iter()
        .map(|key| {
            key_to_id
                .get(key)
                .copied()
                .ok_or_else(|| LexiconError::UnknownSenseKey {
                    key: key.clone(),
                    referenced_by: owner.to_string(),
                })
        })
        .collect()
}
