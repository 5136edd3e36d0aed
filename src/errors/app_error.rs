use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the relay endpoints
///
/// Every variant renders as `{"error": <string>}`. Upstream errors keep the
/// provider's status code and raw body untouched.
#[derive(Debug, Error)]
pub enum AppError {
    /// No provider credential configured; raised before any outbound call
    #[error("Missing OPENAI_API_KEY")]
    MissingCredential,

    /// Provider answered with a status >= 400
    #[error("Provider returned {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    /// Provider call exceeded the configured timeout
    #[error("Upstream request timed out")]
    UpstreamTimeout,

    /// Provider call failed before a response arrived (DNS, connect, reset, ...)
    #[error("Upstream request failed: {0}")]
    UpstreamTransport(String),

    /// Provider answered with a success status but an unusable body
    #[error("Invalid response from provider: {0}")]
    InvalidProviderResponse(String),

    /// Inbound request could not be interpreted
    #[error("{message}")]
    InvalidRequest { status: StatusCode, message: String },

    /// Internal setup failure (e.g. HTTP client construction)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build an `InvalidRequest` with 400 Bad Request
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCredential | Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream { status, .. } => *status,
            Self::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            Self::UpstreamTransport(_) | Self::InvalidProviderResponse(_) => StatusCode::BAD_GATEWAY,
            Self::InvalidRequest { status, .. } => *status,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            // Provider body is relayed verbatim, without the status prefix
            Self::Upstream { body, .. } => body,
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::UpstreamTimeout
        } else {
            Self::UpstreamTransport(err.to_string())
        }
    }
}
