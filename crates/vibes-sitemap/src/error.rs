//! Sitemap error types.

/// Error building or serializing a sitemap.
#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
    /// Base URL is not an absolute http(s) URL.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: &'static str },

    /// XML writer failed.
    #[error("Sitemap XML error: {0}")]
    Xml(String),
}

impl SitemapError {
    pub(crate) fn invalid_base_url(url: &str, reason: &'static str) -> Self {
        Self::InvalidBaseUrl {
            url: url.to_owned(),
            reason,
        }
    }

    pub(crate) fn xml(err: impl std::fmt::Display) -> Self {
        Self::Xml(err.to_string())
    }
}
