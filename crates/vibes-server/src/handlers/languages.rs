//! Languages API endpoint.

use axum::Json;
use serde::Serialize;
use vibes_content::{Language, locale};

/// Response for GET /api/languages.
#[derive(Serialize)]
pub(crate) struct LanguagesResponse {
    /// Supported languages in canonical order.
    languages: &'static [Language],
    /// Language used when none is requested.
    default: Language,
}

/// Handle GET /api/languages.
pub(crate) async fn get_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: locale::supported_languages(),
        default: Language::DEFAULT,
    })
}
