//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/languages", get(handlers::languages::get_languages))
        .route("/api/content", get(handlers::content::list_all_pages))
        .route("/api/content/{lang}", get(handlers::content::list_pages))
        .route("/api/content/{lang}/", get(handlers::content::get_root_page))
        .route("/api/content/{lang}/{*slug}", get(handlers::content::get_page))
        .route("/api/types/{code}", get(handlers::types::get_type));

    Router::new()
        .merge(api_routes)
        .route("/sitemap.xml", get(handlers::sitemap::get_sitemap))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
