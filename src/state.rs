use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::ProviderClient;
use crate::errors::AppResult;

/// Application state shared by all handlers
///
/// Built once at startup and read-only afterwards, so handlers share it
/// through an `Arc` without locking.
pub struct AppState {
    pub config: ServerConfig,
    pub provider: ProviderClient,
}

impl AppState {
    pub fn new(config: ServerConfig) -> AppResult<Arc<Self>> {
        let provider = ProviderClient::new(&config)?;
        Ok(Arc::new(Self { config, provider }))
    }
}
