//! Test Fixtures Module
//!
//! Shared helpers for the relay integration tests:
//! - Configuration fixtures pointing at a mock provider
//! - Inbound request builders (multipart uploads, JSON bodies)
//! - Response body helpers

// Allow dead code in test fixtures - not every test binary uses every helper
#![allow(dead_code)]

use std::net::TcpListener;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use serde_json::Value;

use audio_relay::{ServerConfig, routes, state::AppState};

pub const TEST_API_KEY: &str = "test-openai-key";
pub const BOUNDARY: &str = "relay-test-boundary";

/// Configuration relaying to `base_url` with the given credential
pub fn test_config(base_url: &str, api_key: Option<&str>) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.host = "127.0.0.1".to_string();
    config.provider_base_url = base_url.to_string();
    config.openai_api_key = api_key.map(str::to_string);
    config.stt_model = "gpt-4o-mini-transcribe".to_string();
    config.tts_model = "tts-1".to_string();
    config.tts_voice = "alloy".to_string();
    config
}

/// Full application router for a configuration
pub fn app(config: ServerConfig) -> Router {
    routes::create_app(AppState::new(config).expect("failed to build app state"))
}

/// Find a port with nothing listening on it
pub fn find_closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

/// One part of an inbound multipart upload
pub struct UploadPart<'a> {
    pub name: &'a str,
    pub filename: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub data: &'a [u8],
}

impl<'a> UploadPart<'a> {
    pub fn audio(filename: Option<&'a str>, content_type: Option<&'a str>, data: &'a [u8]) -> Self {
        Self {
            name: "audio",
            filename,
            content_type,
            data,
        }
    }
}

/// Encode parts as a `multipart/form-data` body
pub fn multipart_body(parts: &[UploadPart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        let mut disposition = format!("Content-Disposition: form-data; name=\"{}\"", part.name);
        if let Some(filename) = part.filename {
            disposition.push_str(&format!("; filename=\"{filename}\""));
        }
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(b"\r\n");
        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// `POST /api/stt` with a multipart upload
pub fn stt_request(parts: &[UploadPart<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/stt")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

/// `POST /api/tts` with a JSON body
pub fn tts_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/tts")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn response_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn response_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&response_bytes(response).await).unwrap()
}
