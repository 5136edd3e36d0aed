use axum::response::{Html, Json};
use serde_json::{Value, json};

const LANDING_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Audio Relay</title>
  <style>
    body { font-family: system-ui, sans-serif; padding: 24px; line-height: 1.45; }
    code { background: #f4f4f4; padding: 2px 4px; border-radius: 4px; }
  </style>
</head>
<body>
  <h1>Audio Relay</h1>
  <p>The service is running. Endpoints:</p>
  <ul>
    <li><code>GET /health</code> - liveness check</li>
    <li><code>POST /api/stt</code> - multipart upload (field <code>audio</code>) for transcription</li>
    <li><code>POST /api/tts</code> - JSON <code>{"text", "voice", "format"}</code> for speech synthesis</li>
  </ul>
</body>
</html>
"#;

/// Liveness check, independent of configuration
pub async fn health_check() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// Informational page listing the endpoints
pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
