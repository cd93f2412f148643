//! Sitemap endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

const CACHE_CONTROL: &str = "public, max-age=3600";

/// Handle GET /sitemap.xml.
pub(crate) async fn get_sitemap(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let sitemap = &state.sitemap;

    // Check If-None-Match header for conditional request
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == sitemap.etag.as_bytes()
    {
        return StatusCode::NOT_MODIFIED.into_response();
    }

    (
        [
            (header::CONTENT_TYPE, "application/xml".to_owned()),
            (header::CACHE_CONTROL, CACHE_CONTROL.to_owned()),
            (header::ETAG, sitemap.etag.clone()),
        ],
        sitemap.xml.clone(),
    )
        .into_response()
}
