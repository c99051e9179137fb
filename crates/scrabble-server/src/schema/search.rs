//! Word validity request/response types.

use serde::{Deserialize, Serialize};

/// Body of `POST /search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    /// The word to check. Optional here so a missing field maps to a 400
    /// with a specific message rather than a generic decode error.
    #[serde(default)]
    pub word: Option<String>,
}

/// Response for both search routes.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// The normalized word that was looked up.
    pub word: String,
    /// Whether the word is in the dictionary.
    pub valid: bool,
}
