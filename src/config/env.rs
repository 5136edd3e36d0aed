use std::path::PathBuf;

use super::utils::{env_or, env_var, parse_bool_env, parse_env};
use super::{
    DEFAULT_BASE_URL, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_STT_MODEL, DEFAULT_TTS_MODEL,
    DEFAULT_TTS_VOICE, DEFAULT_UPSTREAM_TIMEOUT_SECONDS, ServerConfig, TlsConfig, validation,
};

/// Unset means any origin ("*"); set but empty means same-origin only.
fn cors_origins_from_env() -> Option<String> {
    match std::env::var("CORS_ALLOWED_ORIGINS") {
        Err(_) => Some("*".to_string()),
        Ok(raw) => Some(raw.trim().to_string()).filter(|origins| !origins.is_empty()),
    }
}

/// Build a `ServerConfig` from environment variables, applying defaults for unset values.
pub(super) fn load_from_env() -> Result<ServerConfig, Box<dyn std::error::Error>> {
    let tls = validation::validate_tls_paths(env_var("TLS_CERT_PATH"), env_var("TLS_KEY_PATH"))?
        .map(|(cert_path, key_path)| TlsConfig {
            cert_path: PathBuf::from(cert_path),
            key_path: PathBuf::from(key_path),
        });

    let provider_base_url = env_or("OPENAI_BASE_URL", DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_string();

    Ok(ServerConfig {
        host: env_or("HOST", "0.0.0.0"),
        port: parse_env("PORT", 8000u16)?,
        tls,
        provider_base_url,
        openai_api_key: env_var("OPENAI_API_KEY"),
        stt_model: env_or("STT_MODEL", DEFAULT_STT_MODEL),
        tts_model: env_or("TTS_MODEL", DEFAULT_TTS_MODEL),
        tts_voice: env_or("TTS_VOICE", DEFAULT_TTS_VOICE),
        upstream_timeout_seconds: parse_env(
            "UPSTREAM_TIMEOUT_SECONDS",
            DEFAULT_UPSTREAM_TIMEOUT_SECONDS,
        )?,
        max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        cors_allowed_origins: cors_origins_from_env(),
        landing_page_enabled: parse_bool_env("LANDING_PAGE_ENABLED", true)?,
    })
}
