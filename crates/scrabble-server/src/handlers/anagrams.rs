//! Anagram lookup handler.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use scrabble_core::{normalize, true_anagrams};

use crate::error::ApiError;
use crate::schema::anagrams::{AnagramsQuery, AnagramsResponse};
use crate::state::AppState;

/// Lists dictionary anagrams of a word.
///
/// Same-length anagrams other than the word itself by default; `?all=true`
/// returns every sub-word match as well.
///
/// `GET /anagrams/{word}`
pub async fn anagrams(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<AnagramsQuery>, QueryRejection>,
) -> Result<Json<AnagramsResponse>, ApiError> {
    let Path(raw) = path?;
    let Query(params) = query?;

    let word = normalize(&raw);
    if word.is_empty() {
        return Err(ApiError::BadRequest("Word parameter is required".to_string()));
    }

    let candidates = state.anagrams.anagrams_of(&word)?;
    let anagrams = if params.all {
        candidates
    } else {
        true_anagrams(&word, candidates)
    };
    tracing::debug!(%word, count = anagrams.len(), all = params.all, "anagrams");

    Ok(Json(AnagramsResponse {
        count: anagrams.len(),
        word,
        anagrams,
    }))
}

/// Rejects an anagram lookup with an empty word segment.
///
/// `GET /anagrams/`
pub async fn anagrams_missing() -> ApiError {
    ApiError::BadRequest("Word parameter is required".to_string())
}
