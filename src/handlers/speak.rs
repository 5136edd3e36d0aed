use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::info;

use crate::core::{SpeechAudio, SpeechRequest};
use crate::errors::{AppError, AppResult};
use crate::state::AppState;

impl IntoResponse for SpeechAudio {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(self.media_type),
        );

        (StatusCode::OK, headers, self.audio).into_response()
    }
}

/// Relay a synthesis request to the provider's speech endpoint
///
/// Text, voice and format are forwarded as given (voice and format defaulted
/// when absent); the provider rejects anything it does not accept. The audio
/// is returned with `audio/mpeg` for mp3 and `audio/wav` for everything else.
pub async fn speak_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SpeechRequest>, JsonRejection>,
) -> AppResult<SpeechAudio> {
    state.provider.credential()?;

    let Json(request) = payload.map_err(|rejection| AppError::InvalidRequest {
        status: rejection.status(),
        message: rejection.body_text(),
    })?;

    info!(
        "Speech requested - chars={}, voice={:?}, format={:?}",
        request.text.len(),
        request.voice,
        request.format
    );

    state
        .provider
        .synthesize(&state.config.tts_model, &state.config.tts_voice, &request)
        .await
}
