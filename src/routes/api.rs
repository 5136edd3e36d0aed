use axum::{Router, extract::DefaultBodyLimit, routing::post};
use tower_http::trace::TraceLayer;

use crate::handlers::{speak, transcribe};
use crate::state::AppState;
use std::sync::Arc;

/// Create the relay API router
///
/// `max_upload_bytes` bounds the buffered request body of both endpoints.
pub fn create_api_router(max_upload_bytes: usize) -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/stt", post(transcribe::transcribe_handler))
        .route("/api/tts", post(speak::speak_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
}
