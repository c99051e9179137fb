//! Word validity handlers (path and body variants).

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, Path, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::{Form, Json};
use scrabble_core::normalize;

use crate::error::ApiError;
use crate::schema::search::{SearchRequest, SearchResponse};
use crate::state::AppState;

const MISSING_PATH_WORD: &str = "Word parameter is required";
const MISSING_BODY_WORD: &str = "Word is required in request body";

/// Checks a word taken from the path.
///
/// `GET /search/{word}`
pub async fn search_path(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Path(raw) = path?;
    lookup(&state, &raw, MISSING_PATH_WORD).map(Json)
}

/// Rejects a search with an empty word segment.
///
/// `GET /search/`
pub async fn search_path_missing() -> ApiError {
    ApiError::BadRequest(MISSING_PATH_WORD.to_string())
}

/// Checks a word taken from the request body.
///
/// Form-encoded bodies (`word=...`) are decoded as forms; every other body
/// is decoded as JSON (`{"word": ...}`).
///
/// `POST /search`
pub async fn search_body(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<SearchResponse>, ApiError> {
    let req = if is_form(request.headers()) {
        let Form(req) = Form::<SearchRequest>::from_request(request, &()).await?;
        req
    } else {
        let Json(req) = Json::<SearchRequest>::from_request(request, &()).await?;
        req
    };
    let raw = req
        .word
        .ok_or_else(|| ApiError::BadRequest(MISSING_BODY_WORD.to_string()))?;
    lookup(&state, &raw, MISSING_BODY_WORD).map(Json)
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| {
            mime.trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}

fn lookup(state: &AppState, raw: &str, missing: &str) -> Result<SearchResponse, ApiError> {
    let word = normalize(raw);
    if word.is_empty() {
        return Err(ApiError::BadRequest(missing.to_string()));
    }
    let valid = state.dictionary.contains(&word);
    tracing::debug!(%word, valid, "search");
    Ok(SearchResponse { word, valid })
}
