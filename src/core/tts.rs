//! Text-to-speech relay.
//!
//! # API Reference
//!
//! - Endpoint: `POST {base_url}/audio/speech`
//! - Body: `{"model", "voice", "input", "format"}`
//! - Output: raw audio bytes

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::provider::ProviderClient;
use crate::errors::AppResult;

/// Path of the speech endpoint, relative to the provider base URL
pub const SPEECH_PATH: &str = "audio/speech";
/// Output format used when the request does not name one
pub const DEFAULT_FORMAT: &str = "mp3";

/// Inbound synthesis request
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
    #[serde(default)]
    pub voice: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

impl SpeechRequest {
    /// Requested format, lower-cased. Absent or empty means mp3.
    pub fn format(&self) -> String {
        self.format
            .as_deref()
            .filter(|fmt| !fmt.is_empty())
            .unwrap_or(DEFAULT_FORMAT)
            .to_lowercase()
    }

    /// Requested voice, or `default_voice` when absent or empty.
    pub fn voice<'a>(&'a self, default_voice: &'a str) -> &'a str {
        self.voice
            .as_deref()
            .filter(|voice| !voice.is_empty())
            .unwrap_or(default_voice)
    }
}

/// JSON body sent to the provider
#[derive(Debug, Serialize, PartialEq)]
pub struct SpeechPayload<'a> {
    pub model: &'a str,
    pub voice: &'a str,
    pub input: &'a str,
    pub format: &'a str,
}

/// Media type reported to the caller.
///
/// Only "mp3" maps to `audio/mpeg`; every other format is labeled `audio/wav`,
/// whatever the provider actually encoded.
pub fn media_type_for_format(format: &str) -> &'static str {
    if format == "mp3" {
        "audio/mpeg"
    } else {
        "audio/wav"
    }
}

/// Synthesized audio ready to hand back to the caller
#[derive(Debug, Clone)]
pub struct SpeechAudio {
    pub audio: Bytes,
    pub media_type: &'static str,
}

impl ProviderClient {
    /// Forward a synthesis request to the speech endpoint and buffer the audio.
    pub async fn synthesize(
        &self,
        model: &str,
        default_voice: &str,
        request: &SpeechRequest,
    ) -> AppResult<SpeechAudio> {
        let url = self.speech_url.as_str();
        let builder = self.post(url)?;

        let format = request.format();
        let payload = SpeechPayload {
            model,
            voice: request.voice(default_voice),
            input: &request.text,
            format: &format,
        };

        info!(
            "Requesting speech for {} characters (model={}, voice={}, format={})",
            request.text.len(),
            payload.model,
            payload.voice,
            payload.format
        );

        let audio = self
            .execute(
                builder
                    .header("Content-Type", "application/json")
                    .json(&payload),
                url,
            )
            .await?;

        info!("Speech synthesis complete: {} bytes", audio.len());

        Ok(SpeechAudio {
            audio,
            media_type: media_type_for_format(&format),
        })
    }
}
