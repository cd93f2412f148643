//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vibes_catalog::UnknownTypeCode;
use vibes_content::{ContentError, HeadTag, Language, locale, not_found_head};

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Content lookup failed.
    #[error("{source}")]
    Content {
        #[source]
        source: ContentError,
        /// Language to render the not-found page in.
        language: Language,
        /// Head tags for the not-found page.
        head: Vec<HeadTag>,
    },

    /// Type code outside the catalog.
    #[error(transparent)]
    UnknownType(#[from] UnknownTypeCode),
}

impl ServerError {
    /// Wrap a lookup failure with what the not-found page needs.
    pub(crate) fn content(source: ContentError, requested: &str, site_name: &str) -> Self {
        Self::Content {
            source,
            language: locale::resolve(Some(requested)),
            head: not_found_head(site_name),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::Content {
                source,
                language,
                head,
            } => {
                let error = match source {
                    ContentError::UnsupportedLanguage(_) => "Unsupported language",
                    ContentError::PageNotFound { .. } => "Page not found",
                };
                let mut body = json!({
                    "error": error,
                    "reason": source.reason(),
                    "language": language,
                    "head": head,
                });
                if let ContentError::PageNotFound { slug, .. } = source {
                    body["slug"] = json!(slug);
                }
                body
            }
            Self::UnknownType(UnknownTypeCode(code)) => {
                json!({"error": "Unknown type code", "code": code})
            }
        };

        (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
    }
}
