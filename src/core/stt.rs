//! Speech-to-text relay.
//!
//! Reshapes an uploaded audio file into the provider's multipart form and
//! returns the transcript together with the untouched provider payload.
//!
//! # API Reference
//!
//! - Endpoint: `POST {base_url}/audio/transcriptions`
//! - Form fields: `file` (audio bytes), `model`

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::provider::ProviderClient;
use crate::errors::{AppError, AppResult};

/// Path of the transcription endpoint, relative to the provider base URL
pub const TRANSCRIPTIONS_PATH: &str = "audio/transcriptions";
/// Filename used when the upload does not carry one
pub const DEFAULT_FILENAME: &str = "audio.webm";
/// Content type used when the upload does not declare one
pub const DEFAULT_CONTENT_TYPE: &str = "audio/webm";

/// An uploaded audio file waiting to be forwarded
#[derive(Debug, Clone, Default)]
pub struct TranscriptionRequest {
    pub audio: Bytes,
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

impl TranscriptionRequest {
    /// Filename to forward; empty names fall back to the default as well.
    pub fn filename(&self) -> &str {
        self.filename
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_FILENAME)
    }

    pub fn content_type(&self) -> &str {
        self.content_type
            .as_deref()
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
    }

    /// Build the outbound multipart form: `file` + `model`.
    ///
    /// Uploads received over HTTP never hit the content type error: the
    /// multipart extractor drops an unparseable part `Content-Type`, which then
    /// falls back to `audio/webm`. Only requests built in code can fail here.
    pub(crate) fn into_form(self, model: &str) -> AppResult<Form> {
        let filename = self.filename().to_string();
        let content_type = self.content_type().to_string();

        let file_part = Part::bytes(Vec::from(self.audio))
            .file_name(filename)
            .mime_str(&content_type)
            .map_err(|e| AppError::bad_request(format!("Invalid content type '{content_type}': {e}")))?;

        Ok(Form::new()
            .part("file", file_part)
            .text("model", model.to_string()))
    }
}

/// Transcript plus the full provider payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub text: String,
    pub raw: Value,
}

impl TranscriptionResult {
    /// Parse a provider success body. A missing `text` field yields an empty transcript.
    pub fn from_provider_body(body: &[u8]) -> AppResult<Self> {
        let raw: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::InvalidProviderResponse(format!("expected JSON: {e}")))?;

        let text = raw
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Ok(Self { text, raw })
    }
}

impl ProviderClient {
    /// Forward an audio upload to the transcription endpoint.
    pub async fn transcribe(
        &self,
        model: &str,
        request: TranscriptionRequest,
    ) -> AppResult<TranscriptionResult> {
        let url = self.transcriptions_url.as_str();
        let builder = self.post(url)?;

        info!(
            "Sending {} bytes of audio ({}, {}) to {} with model {}",
            request.audio.len(),
            request.filename(),
            request.content_type(),
            url,
            model
        );

        let form = request.into_form(model)?;
        let body = self.execute(builder.multipart(form), url).await?;
        let result = TranscriptionResult::from_provider_body(&body)?;

        info!("Transcription complete: {} characters", result.text.len());
        Ok(result)
    }
}
