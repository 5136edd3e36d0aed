//! Server Startup Tests
//!
//! Tests for the assembled router: public routes, configuration-independent
//! health reporting, landing page toggle, CORS and security headers.

mod fixtures;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::json;
use tower::util::ServiceExt;

use fixtures::*;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Test that the server can start with minimal configuration (no API key)
#[tokio::test]
async fn test_minimal_config_boot() {
    let app = app(test_config("https://api.openai.com/v1", None));

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!({"ok": true}));
}

/// Health does not depend on whether a credential is configured
#[tokio::test]
async fn test_health_check_with_credential() {
    let app = app(test_config("https://api.openai.com/v1", Some(TEST_API_KEY)));

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!({"ok": true}));
}

#[tokio::test]
async fn test_landing_page_enabled_by_default() {
    let app = app(test_config("https://api.openai.com/v1", None));

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let page = String::from_utf8(response_bytes(response).await).unwrap();
    assert!(page.contains("/api/stt"));
}

#[tokio::test]
async fn test_landing_page_can_be_disabled() {
    let mut config = test_config("https://api.openai.com/v1", None);
    config.landing_page_enabled = false;

    let response = app(config).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_relay_endpoints_reject_get() {
    let app = app(test_config("https://api.openai.com/v1", Some(TEST_API_KEY)));

    let response = app.clone().oneshot(get("/api/stt")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = app.oneshot(get("/api/tts")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_security_headers_are_set() {
    let app = app(test_config("https://api.openai.com/v1", None));

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(
        response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
        "nosniff"
    );
    assert_eq!(
        response.headers().get(header::X_FRAME_OPTIONS).unwrap(),
        "DENY"
    );
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let app = app(test_config("https://api.openai.com/v1", None));

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/tts")
        .header(header::ORIGIN, "https://client.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_restricted_origins() {
    let mut config = test_config("https://api.openai.com/v1", None);
    config.cors_allowed_origins = Some("https://app.example.com".to_string());
    let app = app(config);

    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "https://app.example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "https://app.example.com"
    );

    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "https://evil.example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

/// A wildcard entry inside an origin list opens CORS instead of failing router assembly
#[tokio::test]
async fn test_cors_wildcard_inside_origin_list() {
    let mut config = test_config("https://api.openai.com/v1", None);
    config.cors_allowed_origins = Some("https://app.example.com,*".to_string());
    let app = app(config);

    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "https://other.example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_preflight_allows_any_request_header() {
    let app = app(test_config("https://api.openai.com/v1", None));

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/stt")
        .header(header::ORIGIN, "https://client.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-request-id")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_same_origin_only_when_unset() {
    let mut config = test_config("https://api.openai.com/v1", None);
    config.cors_allowed_origins = None;
    let app = app(config);

    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "https://client.example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
