//! The immutable word set behind every validity check.
//!
//! The on-disk format is a flat JSON object mapping each word to a marker
//! value, e.g. `{"aa": 1, "aah": 1}`. Only key existence matters; marker
//! values are skipped without being materialized.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::de::IgnoredAny;

use crate::error::DictionaryError;
use crate::word::normalize;

/// Set of canonical words, read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
    /// Keys that were not already canonical in the source and were rewritten.
    non_canonical: usize,
}

impl Dictionary {
    /// Loads a dictionary from a JSON file on disk.
    ///
    /// Fails if the file cannot be read, is not a JSON object keyed by word,
    /// or contains no words. Callers serving lookups should treat every
    /// error as fatal.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&data)
    }

    /// Parses a dictionary from JSON text in the on-disk format.
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let raw: HashMap<String, IgnoredAny> = serde_json::from_str(json)?;
        let dictionary = Self::from_words(raw.into_keys());
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(dictionary)
    }

    /// Builds a dictionary from an in-memory word list.
    ///
    /// Words are normalized; empty entries are dropped. Unlike [`load`](Self::load),
    /// an empty result is allowed.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut non_canonical = 0;
        let mut set = HashSet::new();
        for word in words {
            let word = word.as_ref();
            let canonical = normalize(word);
            if canonical != word {
                non_canonical += 1;
            }
            if !canonical.is_empty() {
                set.insert(canonical);
            }
        }
        Dictionary {
            words: set,
            non_canonical,
        }
    }

    /// Returns true iff `word` is in the dictionary.
    ///
    /// `word` must already be normalized; no normalization happens here.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of source keys rewritten to canonical form while loading.
    pub fn non_canonical_keys(&self) -> usize {
        self.non_canonical
    }

    /// Iterates all words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}
