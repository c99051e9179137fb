//! Service metadata returned by `GET /` and the route catalog shared with
//! the 404 response.

use std::collections::BTreeMap;

use serde::Serialize;

/// Every public route with a one-line description.
pub fn endpoint_catalog() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        ("GET /", "API information"),
        ("GET /search/{word}", "Check if a word is valid in Scrabble"),
        ("POST /search", "Check word validity from a JSON body {\"word\": ...}"),
        ("GET /anagrams/{word}", "List dictionary anagrams of a word"),
    ])
}

/// Response for `GET /`.
///
/// Field names are camelCase, like the `availableEndpoints` detail of the
/// 404 response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfoResponse {
    /// Service name.
    pub message: String,
    /// Route catalog, see [`endpoint_catalog`].
    pub endpoints: BTreeMap<&'static str, &'static str>,
    /// Number of words in the loaded dictionary.
    pub word_count: usize,
    /// Longest word `/anagrams` will search, in characters.
    pub max_anagram_length: usize,
}
