//! Configuration module for the audio relay
//!
//! The relay is configured exclusively through environment variables. `main`
//! loads a `.env` file first (if present), so actual environment variables
//! override `.env` values, which in turn override the built-in defaults.
//! Configuration is read once at startup and never reloaded.
//!
//! # Modules
//! - `env`: Environment variable loading
//! - `validation`: Configuration validation logic
//! - `utils`: Utility functions for configuration parsing
//!
//! # Example
//! ```rust,no_run
//! use audio_relay::config::ServerConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! println!("Relay listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::time::Duration;

mod env;
mod utils;
mod validation;

/// Default provider base URL (OpenAI public API)
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Default transcription model
pub const DEFAULT_STT_MODEL: &str = "gpt-4o-mini-transcribe";
/// Default synthesis model
pub const DEFAULT_TTS_MODEL: &str = "tts-1";
/// Default synthesis voice
pub const DEFAULT_TTS_VOICE: &str = "alloy";
/// Default upper bound for a single provider call
pub const DEFAULT_UPSTREAM_TIMEOUT_SECONDS: u64 = 60;
/// Default inbound body limit for `/api/*` (matches the provider's 25 MB upload cap)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// TLS configuration for HTTPS
#[derive(Debug, Clone)]
pub struct TlsConfig {
    /// Path to the TLS certificate file (PEM format)
    pub cert_path: PathBuf,
    /// Path to the TLS private key file (PEM format)
    pub key_path: PathBuf,
}

/// Server configuration
///
/// Contains everything the relay needs for its lifetime:
/// - Server settings (host, port, TLS)
/// - Provider settings (base URL, credential, models, default voice)
/// - Limits (upstream timeout, inbound body size)
/// - Surface settings (CORS, landing page)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // TLS configuration (optional)
    pub tls: Option<TlsConfig>,

    // Provider settings
    /// Provider base URL without a trailing slash
    pub provider_base_url: String,
    /// Provider credential; `None` makes every relay call fail fast
    pub openai_api_key: Option<String>,
    pub stt_model: String,
    pub tts_model: String,
    pub tts_voice: String,

    // Limits
    pub upstream_timeout_seconds: u64,
    pub max_upload_bytes: usize,

    // Surface
    /// CORS allowed origins (comma-separated list or "*" for all); `None` is same-origin only
    pub cors_allowed_origins: Option<String>,
    /// Serve the informational HTML page on `GET /`
    pub landing_page_enabled: bool,
}

/// Zeroize the credential when the configuration is dropped.
impl Drop for ServerConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        if let Some(ref mut key) = self.openai_api_key {
            key.zeroize();
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            tls: None,
            provider_base_url: DEFAULT_BASE_URL.to_string(),
            openai_api_key: None,
            stt_model: DEFAULT_STT_MODEL.to_string(),
            tts_model: DEFAULT_TTS_MODEL.to_string(),
            tts_voice: DEFAULT_TTS_VOICE.to_string(),
            upstream_timeout_seconds: DEFAULT_UPSTREAM_TIMEOUT_SECONDS,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            cors_allowed_origins: Some("*".to_string()),
            landing_page_enabled: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults. After loading, the configuration
    /// is validated.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A numeric or boolean variable cannot be parsed
    /// - `OPENAI_BASE_URL` is not an http(s) URL
    /// - Only one of `TLS_CERT_PATH` / `TLS_KEY_PATH` is set
    /// - A limit is zero
    /// - `CORS_ALLOWED_ORIGINS` mixes `*` with explicit origins
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let config = env::load_from_env()?;

        validation::validate_base_url(&config.provider_base_url)?;
        validation::validate_limits(config.upstream_timeout_seconds, config.max_upload_bytes)?;
        validation::validate_cors_origins(config.cors_allowed_origins.as_deref())?;

        Ok(config)
    }

    /// Get the server address as a string
    ///
    /// Returns the address in the format "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if TLS is enabled
    pub fn is_tls_enabled(&self) -> bool {
        self.tls.is_some()
    }

    /// Provider credential, if one is configured and non-empty
    pub fn api_key(&self) -> Option<&str> {
        self.openai_api_key.as_deref().filter(|key| !key.is_empty())
    }

    /// Upper bound for a single provider call
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }

    /// Full URL of a provider endpoint, e.g. `endpoint_url("audio/speech")`
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.provider_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
