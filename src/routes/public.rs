use axum::{Router, routing::get};

use crate::handlers::api;
use crate::state::AppState;
use std::sync::Arc;

/// Create the unauthenticated informational routes
///
/// `/health` is always served; `/` only when the landing page is enabled.
pub fn create_public_router(landing_page_enabled: bool) -> Router<Arc<AppState>> {
    let router = Router::new().route("/health", get(api::health_check));

    if landing_page_enabled {
        router.route("/", get(api::landing_page))
    } else {
        router
    }
}
