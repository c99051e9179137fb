//! Anagram lookup request/response types.

use serde::{Deserialize, Serialize};

/// Query parameters for `GET /anagrams/{word}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnagramsQuery {
    /// Return every sub-word match instead of same-length anagrams only.
    #[serde(default)]
    pub all: bool,
}

/// Response for `GET /anagrams/{word}`.
#[derive(Debug, Clone, Serialize)]
pub struct AnagramsResponse {
    /// The normalized input word.
    pub word: String,
    /// Matching dictionary words, sorted.
    pub anagrams: Vec<String>,
    /// Number of entries in `anagrams`.
    pub count: usize,
}
