//! Outbound client for the speech provider.
//!
//! Owns the pooled `reqwest::Client` shared by every request, the resolved
//! endpoint URLs and the credential. Status handling is centralized here so
//! both relay operations apply the same passthrough policy.

use bytes::Bytes;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;
use tracing::{debug, error, warn};
use zeroize::Zeroizing;

use super::stt::TRANSCRIPTIONS_PATH;
use super::tts::SPEECH_PATH;
use crate::config::ServerConfig;
use crate::errors::{AppError, AppResult};

/// HTTP client for the OpenAI-compatible audio API
pub struct ProviderClient {
    /// HTTP client for API requests (reused for connection pooling).
    http_client: Client,
    pub(crate) transcriptions_url: String,
    pub(crate) speech_url: String,
    api_key: Option<Zeroizing<String>>,
    timeout: Duration,
}

impl ProviderClient {
    /// Create a provider client from the startup configuration.
    ///
    /// Every request made through this client is bounded by
    /// `config.upstream_timeout()`.
    pub fn new(config: &ServerConfig) -> AppResult<Self> {
        let timeout = config.upstream_timeout();
        let http_client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            transcriptions_url: config.endpoint_url(TRANSCRIPTIONS_PATH),
            speech_url: config.endpoint_url(SPEECH_PATH),
            api_key: config.api_key().map(|key| Zeroizing::new(key.to_string())),
            timeout,
        })
    }

    /// The configured credential, or `MissingCredential` when there is none.
    ///
    /// Callers check this before touching the network.
    pub fn credential(&self) -> AppResult<&str> {
        self.api_key
            .as_deref()
            .map(String::as_str)
            .ok_or(AppError::MissingCredential)
    }

    /// Start a POST to `url` with the bearer credential attached.
    pub(crate) fn post(&self, url: &str) -> AppResult<RequestBuilder> {
        let api_key = self.credential()?;
        Ok(self
            .http_client
            .post(url)
            .header("Authorization", format!("Bearer {api_key}")))
    }

    /// Send a request and buffer the response body.
    ///
    /// Statuses >= 400 become `AppError::Upstream` carrying the provider's
    /// status and raw body. Transport failures become timeout/transport errors.
    pub(crate) async fn execute(&self, request: RequestBuilder, url: &str) -> AppResult<Bytes> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                error!("Provider call to {} timed out after {:?}", url, self.timeout);
            } else {
                error!("Provider call to {} failed: {}", url, e);
            }
            AppError::from(e)
        })?;

        let status = response.status();
        if status.as_u16() >= 400 {
            let body = response.text().await.map_err(AppError::from)?;
            warn!(
                "Provider returned {} for {} ({} bytes)",
                status,
                url,
                body.len()
            );
            return Err(AppError::Upstream { status, body });
        }

        let body = response.bytes().await.map_err(AppError::from)?;
        debug!("Provider returned {} for {} ({} bytes)", status, url, body.len());
        Ok(body)
    }
}
