//! End-to-end integration tests for the Scrabble word HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! dictionary / anagram index -> HTTP response.
//!
//! Each test builds a fresh AppState around a small in-memory dictionary.
//! Tests use `tower::ServiceExt::oneshot` to send requests directly to the
//! router without starting a network server.

use std::io::Write;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use scrabble_core::Dictionary;
use scrabble_server::config::ServerConfig;
use scrabble_server::handlers::fallback::handle_panic;
use scrabble_server::router::{build_router, routes, with_layers};
use scrabble_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

const WORDS: &[&str] = &["cat", "act", "tac", "dog", "god", "at", "a", "hello", "stone", "notes", "onset"];

/// Creates a fresh router over [`WORDS`] with the given anagram length limit.
fn test_app_with_limit(max_anagram_len: usize) -> Router {
    let state = AppState::from_dictionary(Dictionary::from_words(WORDS), max_anagram_len);
    build_router(state)
}

fn test_app() -> Router {
    test_app_with_limit(15)
}

/// Sends a request and returns (status, json). Non-JSON bodies become `null`.
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value =
        serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

/// Sends a GET request and returns (status, json).
async fn get_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    send(
        app,
        Request::builder().uri(path).body(Body::empty()).unwrap(),
    )
    .await
}

/// Sends a POST request with a JSON body and returns (status, json).
async fn post_json(
    app: &Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
    )
    .await
}

/// Sends a form-encoded POST request and returns (status, json).
async fn post_form(app: &Router, path: &str, body: &'static str) -> (StatusCode, serde_json::Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

/// Asserts the standard error envelope and returns its `error` object.
fn assert_error(body: &serde_json::Value, code: &str) -> serde_json::Value {
    assert_eq!(body["success"], json!(false), "not an error envelope: {:?}", body);
    assert_eq!(body["error"]["code"], json!(code), "unexpected error: {:?}", body);
    assert!(body["error"]["message"].is_string());
    body["error"].clone()
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

#[tokio::test]
async fn service_info_reports_word_count() {
    let app = test_app();
    let (status, body) = get_json(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Scrabble Word Validation API");
    assert_eq!(body["wordCount"], json!(WORDS.len()));
    assert_eq!(body["maxAnagramLength"], json!(15));
    assert!(body["endpoints"]["GET /search/{word}"].is_string());
    assert!(body["endpoints"]["POST /search"].is_string());
    assert!(body["endpoints"]["GET /anagrams/{word}"].is_string());
}

// ---------------------------------------------------------------------------
// GET /search/{word}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_path_valid_word() {
    let app = test_app();
    let (status, body) = get_json(&app, "/search/hello").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "word": "hello", "valid": true }));
}

#[tokio::test]
async fn search_path_normalizes_case_and_whitespace() {
    let app = test_app();
    let (status, body) = get_json(&app, "/search/Hello%20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word"], "hello");
    assert_eq!(body["valid"], true);
}

#[tokio::test]
async fn search_path_unknown_word_is_invalid() {
    let app = test_app();
    let (status, body) = get_json(&app, "/search/Qwxyz").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "word": "qwxyz", "valid": false }));
}

#[tokio::test]
async fn search_path_empty_segment_is_bad_request() {
    let app = test_app();

    let (status, body) = get_json(&app, "/search/").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "BAD_REQUEST");

    let (status, body) = get_json(&app, "/search/%20%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// POST /search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_body_valid_word() {
    let app = test_app();
    let (status, body) = post_json(&app, "/search", json!({ "word": "  DOG " })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "word": "dog", "valid": true }));
}

#[tokio::test]
async fn search_body_empty_body_is_bad_request() {
    let app = test_app();

    // No body, no content type.
    let (status, body) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/search")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some(), "missing error field: {:?}", body);

    // JSON content type, but nothing in the body.
    let (status, body) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/search")
            .header("content-type", "application/json")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "BAD_REQUEST");
}

#[tokio::test]
async fn search_form_body_valid_word() {
    let app = test_app();
    let (status, body) = post_form(&app, "/search", "word=Hello").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "word": "hello", "valid": true }));

    let (status, body) = post_form(&app, "/search", "word=%20Qwxyz%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "word": "qwxyz", "valid": false }));
}

#[tokio::test]
async fn search_form_content_type_with_charset() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/search")
            .header("content-type", "application/x-www-form-urlencoded; charset=UTF-8")
            .body(Body::from("word=dog"))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
}

#[tokio::test]
async fn search_form_missing_or_empty_word() {
    let app = test_app();

    let (status, body) = post_form(&app, "/search", "term=cat").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = assert_error(&body, "BAD_REQUEST");
    assert_eq!(error["message"], "Word is required in request body");

    let (status, body) = post_form(&app, "/search", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "BAD_REQUEST");

    let (status, _) = post_form(&app, "/search", "word=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_body_missing_word_field() {
    let app = test_app();
    let (status, body) = post_json(&app, "/search", json!({ "term": "cat" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = assert_error(&body, "BAD_REQUEST");
    assert_eq!(error["message"], "Word is required in request body");
}

#[tokio::test]
async fn search_body_blank_or_mistyped_word() {
    let app = test_app();

    let (status, _) = post_json(&app, "/search", json!({ "word": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post_json(&app, "/search", json!({ "word": 42 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// GET /anagrams/{word}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn anagrams_excludes_self_and_shorter_words() {
    let app = test_app();
    let (status, body) = get_json(&app, "/anagrams/cat").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "word": "cat", "anagrams": ["act", "tac"], "count": 2 })
    );
}

#[tokio::test]
async fn anagrams_of_word_not_in_dictionary() {
    let app = test_app();
    let (status, body) = get_json(&app, "/anagrams/Tones").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word"], "tones");
    assert_eq!(body["anagrams"], json!(["notes", "onset", "stone"]));
    assert_eq!(body["count"], 3);
}

#[tokio::test]
async fn anagrams_all_includes_sub_words() {
    let app = test_app();
    let (status, body) = get_json(&app, "/anagrams/CAT?all=true").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["anagrams"], json!(["a", "act", "at", "cat", "tac"]));
    assert_eq!(body["count"], 5);
}

#[tokio::test]
async fn anagrams_no_matches_is_empty_list() {
    let app = test_app();
    let (status, body) = get_json(&app, "/anagrams/xyz").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "word": "xyz", "anagrams": [], "count": 0 }));
}

#[tokio::test]
async fn anagrams_rejects_missing_or_overlong_word() {
    let app = test_app_with_limit(5);

    let (status, body) = get_json(&app, "/anagrams/").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "BAD_REQUEST");

    let (status, body) = get_json(&app, "/anagrams/abcdefgh").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = assert_error(&body, "BAD_REQUEST");
    assert!(error["message"].as_str().unwrap().contains("limited to 5"));

    let (status, _) = get_json(&app, "/anagrams/stone").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn anagrams_rejects_bad_query() {
    let app = test_app();
    let (status, body) = get_json(&app, "/anagrams/cat?all=maybe").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Fallbacks and middleware
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_lists_endpoints() {
    let app = test_app();
    let (status, body) = get_json(&app, "/frobnicate").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error = assert_error(&body, "NOT_FOUND");
    assert!(error["details"].get("available_endpoints").is_none());
    let endpoints = &error["details"]["availableEndpoints"];
    assert!(endpoints["GET /"].is_string());
    assert!(endpoints["GET /search/{word}"].is_string());
    assert!(endpoints["POST /search"].is_string());
}

#[tokio::test]
async fn wrong_method_on_known_path_lists_endpoints() {
    let app = test_app();
    for (method, path) in [("GET", "/search"), ("PUT", "/search/cat"), ("DELETE", "/")] {
        let (status, body) = send(
            &app,
            Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", method, path);
        let error = assert_error(&body, "NOT_FOUND");
        assert!(error["details"]["availableEndpoints"]["POST /search"].is_string());
    }
}

async fn panicking_handler() -> &'static str {
    panic!("index out of bounds: secret detail")
}

#[tokio::test]
async fn router_layers_catch_handler_panics() {
    let state = AppState::from_dictionary(Dictionary::from_words(WORDS), 15);
    let app = with_layers(routes().route("/explode", get(panicking_handler))).with_state(state);

    let (status, body) = get_json(&app, "/explode").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error = assert_error(&body, "INTERNAL_ERROR");
    assert_eq!(error["message"], "Something went wrong!");
    assert!(!body.to_string().contains("secret detail"));

    // The app keeps serving after a panic.
    let (status, body) = get_json(&app, "/search/cat").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
}

#[tokio::test]
async fn panic_becomes_generic_internal_error() {
    let response = handle_panic(Box::new("index out of bounds: secret detail"));
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let error = assert_error(&body, "INTERNAL_ERROR");
    assert_eq!(error["message"], "Something went wrong!");
    assert!(!body.to_string().contains("secret detail"));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/search/cat")
                .header("origin", "https://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}

#[tokio::test]
async fn concurrent_lookups_share_state() {
    let app = test_app();
    let mut tasks = Vec::new();
    for i in 0..32 {
        let app = app.clone();
        tasks.push(tokio::spawn(async move {
            let path = if i % 2 == 0 { "/search/cat" } else { "/anagrams/god" };
            get_json(&app, path).await
        }));
    }
    for (i, task) in tasks.into_iter().enumerate() {
        let (status, body) = task.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        if i % 2 == 0 {
            assert_eq!(body["valid"], true);
        } else {
            assert_eq!(body["anagrams"], json!(["dog"]));
        }
    }
}

// ---------------------------------------------------------------------------
// Startup
// ---------------------------------------------------------------------------

#[test]
fn app_state_loads_dictionary_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"zebra": 1, "Quartz": 1}}"#).unwrap();

    let config = ServerConfig {
        words_path: file.path().to_path_buf(),
        ..ServerConfig::default()
    };
    let state = AppState::new(&config).unwrap();
    assert_eq!(state.dictionary.len(), 2);
    assert!(state.dictionary.contains("quartz"));
    assert_eq!(state.anagrams.max_len(), config.max_anagram_len);
}

#[test]
fn app_state_refuses_missing_or_empty_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        words_path: dir.path().join("absent.json"),
        ..ServerConfig::default()
    };
    assert!(AppState::new(&config).is_err());

    let empty = dir.path().join("empty.json");
    std::fs::write(&empty, "{}").unwrap();
    let config = ServerConfig {
        words_path: empty,
        ..ServerConfig::default()
    };
    assert!(AppState::new(&config).is_err());
}
