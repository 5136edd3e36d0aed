use axum::{
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::{TranscriptionRequest, TranscriptionResult};
use crate::errors::{AppError, AppResult};
use crate::state::AppState;

/// Multipart field that carries the audio upload
pub const AUDIO_FIELD: &str = "audio";

fn multipart_error(err: MultipartError) -> AppError {
    AppError::InvalidRequest {
        status: err.status(),
        message: err.body_text(),
    }
}

/// Pull the `audio` field out of the upload, skipping any other fields.
async fn read_audio_field(multipart: &mut Multipart) -> AppResult<TranscriptionRequest> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(AUDIO_FIELD) {
            debug!("Ignoring multipart field {:?}", field.name());
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let audio = field.bytes().await.map_err(multipart_error)?;

        return Ok(TranscriptionRequest {
            audio,
            filename,
            content_type,
        });
    }

    Err(AppError::InvalidRequest {
        status: StatusCode::UNPROCESSABLE_ENTITY,
        message: format!("Missing '{AUDIO_FIELD}' field in multipart upload"),
    })
}

/// Relay an uploaded audio file to the provider's transcription endpoint
///
/// Responds with `{"text": ..., "raw": <provider payload>}`. The credential is
/// checked before the upload is read, so a missing key always yields 500.
pub async fn transcribe_handler(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<TranscriptionResult>> {
    state.provider.credential()?;

    let mut multipart = multipart.map_err(|rejection| AppError::InvalidRequest {
        status: rejection.status(),
        message: rejection.body_text(),
    })?;

    let request = read_audio_field(&mut multipart).await?;
    info!(
        "Transcription requested - filename={:?}, content_type={:?}, size={} bytes",
        request.filename,
        request.content_type,
        request.audio.len()
    );

    let result = state
        .provider
        .transcribe(&state.config.stt_model, request)
        .await?;

    Ok(Json(result))
}
