pub mod provider;
pub mod stt;
pub mod tts;

// Re-export commonly used types for convenience
pub use provider::ProviderClient;
pub use stt::{
    DEFAULT_CONTENT_TYPE, DEFAULT_FILENAME, TRANSCRIPTIONS_PATH, TranscriptionRequest,
    TranscriptionResult,
};
pub use tts::{
    DEFAULT_FORMAT, SPEECH_PATH, SpeechAudio, SpeechPayload, SpeechRequest, media_type_for_format,
};
