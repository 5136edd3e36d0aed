pub mod api;
pub mod public;

use axum::Router;
use http::{
    Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;

use crate::state::AppState;

/// Build CORS from the configured origins ("*" or a comma-separated list)
///
/// A list that contains `*` anywhere is treated as `*`; explicit origin lists
/// cannot carry a wildcard entry.
pub fn cors_layer(origins: Option<&str>) -> CorsLayer {
    match origins {
        Some(origins) if origins.split(',').any(|origin| origin.trim() == "*") => {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers(Any)
                .allow_credentials(false)
        }
        Some(origins) => {
            // Parse comma-separated origins
            let origins: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                .allow_credentials(true)
        }
        None => {
            info!("CORS not configured, defaulting to same-origin only");
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                .allow_credentials(false)
        }
    }
}

/// Assemble the full application: public + API routes, CORS and security headers
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = cors_layer(state.config.cors_allowed_origins.as_deref());

    let security_headers = tower::ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            http::header::X_CONTENT_TYPE_OPTIONS,
            http::HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            http::header::X_FRAME_OPTIONS,
            http::HeaderValue::from_static("DENY"),
        ));

    public::create_public_router(state.config.landing_page_enabled)
        .merge(api::create_api_router(state.config.max_upload_bytes))
        .with_state(state)
        .layer(cors)
        .layer(security_headers)
}
