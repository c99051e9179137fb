//! Core error types for scrabble-core.
//!
//! Uses `thiserror` for structured, matchable error variants. Dictionary
//! errors only occur while loading; lookups themselves never fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading a [`Dictionary`](crate::Dictionary).
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The dictionary file could not be read.
    #[error("failed to read dictionary '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dictionary source is not a flat JSON object keyed by word.
    #[error("malformed dictionary: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The dictionary source parsed but contains no words.
    #[error("dictionary contains no words")]
    Empty,
}

/// Errors produced by anagram search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnagramError {
    /// The input has more characters than the index will enumerate.
    #[error("word has {len} characters, anagram search is limited to {max}")]
    TooLong { len: usize, max: usize },
}
