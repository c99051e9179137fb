//! Catch-all handlers for unmatched routes and handler panics.

use std::any::Any;

use axum::http::Uri;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;

/// Answers any request no route matched.
pub async fn endpoint_not_found(uri: Uri) -> ApiError {
    tracing::debug!(path = %uri.path(), "no route");
    ApiError::EndpointNotFound {
        path: uri.path().to_string(),
    }
}

/// Turns a handler panic into a generic 500 response.
///
/// The panic payload is logged but never sent to the client.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::InternalError(format!("handler panicked: {}", detail)).into_response()
}
