//! Absolute base URL and location building.

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::error::SitemapError;

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Absolute `http(s)` URL that sitemap locations are built on.
///
/// Stored without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Validate and normalize a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SitemapError::InvalidBaseUrl`] unless `url` is an absolute
    /// `http://` or `https://` URL with a host and without query, fragment or
    /// whitespace.
    pub fn parse(url: &str) -> Result<Self, SitemapError> {
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| SitemapError::invalid_base_url(url, "must start with http:// or https://"))?;

        let host = rest.split('/').next().unwrap_or_default();
        if host.is_empty() {
            return Err(SitemapError::invalid_base_url(url, "missing host"));
        }
        if url.chars().any(char::is_whitespace) {
            return Err(SitemapError::invalid_base_url(url, "contains whitespace"));
        }
        if url.contains(['?', '#']) {
            return Err(SitemapError::invalid_base_url(
                url,
                "must not contain a query or fragment",
            ));
        }

        Ok(Self(url.trim_end_matches('/').to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append path segments, percent-encoding each one.
    #[must_use]
    pub fn join<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> String {
        let mut out = self.0.clone();
        for segment in segments {
            out.push('/');
            out.extend(utf8_percent_encode(segment, SEGMENT));
        }
        out
    }

    /// Append a site-relative path such as `/en/types/INTJ`.
    #[must_use]
    pub fn join_path(&self, path: &str) -> String {
        self.join(path.split('/').filter(|s| !s.is_empty()))
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
