//! Application state shared by all handlers.
//!
//! The dictionary and its anagram index are built once at startup and never
//! mutated, so [`AppState`] holds them behind plain `Arc`s. Handlers read
//! them concurrently without any lock.

use std::sync::Arc;

use scrabble_core::{AnagramIndex, Dictionary, DictionaryError};

use crate::config::ServerConfig;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Loaded word set.
    pub dictionary: Arc<Dictionary>,
    /// Sorted-letter-key index over `dictionary`.
    pub anagrams: Arc<AnagramIndex>,
}

impl AppState {
    /// Loads the dictionary named by `config` and builds the anagram index.
    ///
    /// Any load failure is returned; the server must not start without a
    /// complete dictionary.
    pub fn new(config: &ServerConfig) -> Result<Self, DictionaryError> {
        let dictionary = Dictionary::load(&config.words_path)?;
        tracing::info!(
            "Loaded {} words from {}",
            dictionary.len(),
            config.words_path.display()
        );
        if dictionary.non_canonical_keys() > 0 {
            tracing::warn!(
                "{} dictionary keys were not lowercase/trimmed and were normalized",
                dictionary.non_canonical_keys()
            );
        }
        Ok(Self::from_dictionary(dictionary, config.max_anagram_len))
    }

    /// Creates state around an already-built dictionary (used by tests).
    pub fn from_dictionary(dictionary: Dictionary, max_anagram_len: usize) -> Self {
        let anagrams = AnagramIndex::build(&dictionary).with_max_len(max_anagram_len);
        tracing::info!("Anagram index built with {} keys", anagrams.key_count());
        AppState {
            dictionary: Arc::new(dictionary),
            anagrams: Arc::new(anagrams),
        }
    }
}
