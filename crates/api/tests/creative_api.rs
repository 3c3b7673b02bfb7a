//! Integration tests for creative validation and request body limits.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, post};
use creative_api::router::MAX_BODY_BYTES;

const VALIDATE: &str = "/api/v2/creatives/validate";
const JSON: &str = "application/json";
const FORM: &str = "application/x-www-form-urlencoded";

/// Build a JSON creative whose serialized size is exactly `len` bytes.
fn json_body_of_len(len: usize) -> Vec<u8> {
    let prefix = br#"{"title":"t","overview":""#;
    let suffix = br#""}"#;
    let filler = len - prefix.len() - suffix.len();

    let mut body = Vec::with_capacity(len);
    body.extend_from_slice(prefix);
    body.resize(prefix.len() + filler, b'a');
    body.extend_from_slice(suffix);
    assert_eq!(body.len(), len);
    body
}

// ---------------------------------------------------------------------------
// Test: valid JSON creative is normalized with defaults
// ---------------------------------------------------------------------------

#[tokio::test]
async fn json_creative_without_quadrant_defaults_to_known_unknown() {
    let body = r#"{"title":"Night market","overview":"Street food at dusk"}"#;
    let response = post(build_test_app(), VALIDATE, JSON, body).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Night market");
    assert_eq!(json["data"]["quadrant"], "known-unknown");
    assert!(json["data"]["id"].is_string());
    assert!(json["data"]["created_at"].is_string());
}

// ---------------------------------------------------------------------------
// Test: URL-encoded form bodies are accepted too
// ---------------------------------------------------------------------------

#[tokio::test]
async fn form_creative_is_accepted() {
    let body = "title=Night+market&overview=Street+food&quadrant=unknown-unknown";
    let response = post(build_test_app(), VALIDATE, FORM, body).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["quadrant"], "unknown-unknown");
}

// ---------------------------------------------------------------------------
// Test: legacy quadrant labels are normalized
// ---------------------------------------------------------------------------

#[tokio::test]
async fn legacy_quadrant_label_is_normalized() {
    let body = r#"{"title":"t","overview":"o","quadrant":"未知已知"}"#;
    let response = post(build_test_app(), VALIDATE, JSON, body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["quadrant"], "unknown-known");
}

// ---------------------------------------------------------------------------
// Test: unknown quadrant is a validation error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_quadrant_returns_400() {
    let body = r#"{"title":"t","overview":"o","quadrant":"half-known"}"#;
    let response = post(build_test_app(), VALIDATE, JSON, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("half-known"));
}

// ---------------------------------------------------------------------------
// Test: missing required field is a validation error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_overview_returns_400() {
    let response = post(build_test_app(), VALIDATE, JSON, r#"{"title":"t"}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "overview is required");
}

// ---------------------------------------------------------------------------
// Test: malformed JSON is a bad request, not a crash
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_json_returns_400() {
    let response = post(build_test_app(), VALIDATE, JSON, "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Test: other content types are rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn plain_text_body_returns_415() {
    let response = post(build_test_app(), VALIDATE, "text/plain", "title=t").await;

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body_json(response).await["code"], "UNSUPPORTED_MEDIA_TYPE");
}

// ---------------------------------------------------------------------------
// Test: a body of exactly the limit is accepted
// ---------------------------------------------------------------------------

#[tokio::test]
async fn body_at_limit_is_accepted() {
    let body = json_body_of_len(MAX_BODY_BYTES);
    let response = post(build_test_app(), VALIDATE, JSON, body).await;

    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Test: one byte over the limit is rejected with 413
// ---------------------------------------------------------------------------

#[tokio::test]
async fn body_over_limit_is_rejected() {
    let body = json_body_of_len(MAX_BODY_BYTES + 1);
    let response = post(build_test_app(), VALIDATE, JSON, body).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body_json(response).await["code"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn form_body_over_limit_is_rejected() {
    let mut body = b"title=t&overview=".to_vec();
    body.resize(MAX_BODY_BYTES + 1, b'a');
    let response = post(build_test_app(), VALIDATE, FORM, body).await;

    assert!(response.status().is_client_error());
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
