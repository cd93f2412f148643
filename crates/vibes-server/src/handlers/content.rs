//! Content API endpoints.
//!
//! Page lookups, per-language listings and the full listing, all served from
//! the immutable content index.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use vibes_content::{ContentMeta, HeadTag, Language, ParsedDocument, page_head};

use crate::error::ServerError;
use crate::state::AppState;

/// Slug served for `/api/content/{lang}/`.
const ROOT_SLUG: &str = "index";

/// Response for the listing endpoints.
#[derive(Serialize)]
pub(crate) struct PagesResponse {
    pages: Vec<ContentMeta>,
}

/// Response for GET /api/content/{lang}/{slug}.
#[derive(Serialize)]
struct PageResponse<'a> {
    page: &'a ParsedDocument,
    head: Vec<HeadTag>,
}

/// Handle GET /api/content.
pub(crate) async fn list_all_pages(State(state): State<Arc<AppState>>) -> Json<PagesResponse> {
    Json(PagesResponse {
        pages: state.index.list_all_pages(),
    })
}

/// Handle GET /api/content/{lang}.
pub(crate) async fn list_pages(
    Path(lang): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PagesResponse>, ServerError> {
    let language: Language = lang
        .parse()
        .map_err(|e| ServerError::content(e, &lang, &state.site_name))?;

    Ok(Json(PagesResponse {
        pages: state.index.list_pages(language),
    }))
}

/// Handle GET /api/content/{lang}/ (language root page).
pub(crate) async fn get_root_page(
    Path(lang): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ServerError> {
    get_page_impl(&state, &lang, ROOT_SLUG)
}

/// Handle GET /api/content/{lang}/{*slug}.
pub(crate) async fn get_page(
    Path((lang, slug)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ServerError> {
    let slug = if slug.is_empty() { ROOT_SLUG } else { &slug };
    get_page_impl(&state, &lang, slug)
}

fn get_page_impl(state: &AppState, lang: &str, slug: &str) -> Result<Response, ServerError> {
    let page = state
        .index
        .get_page(lang, slug)
        .map_err(|e| ServerError::content(e, lang, &state.site_name))?;

    tracing::debug!(language = lang, slug, "Serving page");

    let head = page_head(&page, &state.site_name);
    Ok(Json(PageResponse { page: &page, head }).into_response())
}
