//! Stopword sets for boundary trimming in the overlap scorer.
//!
//! A matched span's leading and trailing stopwords do not count toward its
//! score. Membership is exact: only a [`Token::Word`] can be a stopword,
//! never a separator marker.

use std::collections::HashSet;
use std::io::BufRead;

use crate::token::Token;

/// The general-purpose English stopword list used when no custom list is
/// supplied.
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
    "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "her", "hers", "herself", "it", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "these", "those", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "having", "do", "does", "did", "doing",
    "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
    "while", "of", "at", "by", "for", "with", "about", "against", "between",
    "into", "through", "during", "before", "after", "above", "below", "to",
    "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "should", "now",
];

/// An owned set of case-normalized stopwords.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The built-in general-purpose English list.
    pub fn default_english() -> Self {
        Self::from_words(ENGLISH.iter().copied())
    }

    /// An empty set (no trimming ever applies).
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Build a set from any iterable of words. Words are lower-cased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Read one word per line. Blank lines and `#` comments are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.insert(word.to_lowercase());
        }
        Ok(Self { words })
    }

    /// Whether a token is a stopword. Separator markers never are.
    pub fn contains(&self, token: &Token) -> bool {
        match token.as_word() {
            Some(w) => self.words.contains(w),
            None => false,
        }
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
