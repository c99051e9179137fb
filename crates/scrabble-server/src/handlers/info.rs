//! Service metadata handler.

use axum::extract::State;
use axum::Json;

use crate::schema::info::{endpoint_catalog, ServiceInfoResponse};
use crate::state::AppState;

/// Returns the service name, route catalog, and dictionary size.
///
/// `GET /`
pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        message: "Scrabble Word Validation API".to_string(),
        endpoints: endpoint_catalog(),
        word_count: state.dictionary.len(),
        max_anagram_length: state.anagrams.max_len(),
    })
}
