//! Router assembly for the Scrabble word API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! panic-catching, CORS, and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
pub fn build_router(state: AppState) -> Router {
    with_layers(routes()).with_state(state)
}

/// All API routes plus the catch-all handlers, without middleware.
///
/// Routes use axum 0.8 `/{param}` path syntax. Trailing-slash variants of
/// the word routes exist only to report the missing word as a 400 instead
/// of falling through to the 404 handler. A known path called with an
/// unsupported method gets the same 404 as an unknown path.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::info::service_info))
        // Word validity
        .route("/search", post(handlers::search::search_body))
        .route("/search/", get(handlers::search::search_path_missing))
        .route("/search/{word}", get(handlers::search::search_path))
        // Anagrams
        .route("/anagrams/", get(handlers::anagrams::anagrams_missing))
        .route("/anagrams/{word}", get(handlers::anagrams::anagrams))
        .fallback(handlers::fallback::endpoint_not_found)
        .method_not_allowed_fallback(handlers::fallback::endpoint_not_found)
}

/// Wraps `router` in the middleware stack shared by every route.
///
/// CatchPanicLayer turns handler panics into the generic 500 envelope.
/// CORS is permissive (browser clients call from arbitrary origins).
/// TraceLayer provides request-level logging via tracing.
pub fn with_layers(router: Router<AppState>) -> Router<AppState> {
    router
        .layer(CatchPanicLayer::custom(handlers::fallback::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
