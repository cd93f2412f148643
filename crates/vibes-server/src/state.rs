//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use md5::{Digest, Md5};
use vibes_content::ContentIndex;
use vibes_sitemap::{BaseUrl, RouteCatalog, SitemapError, generate, to_xml};

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Immutable content index built at start.
    pub(crate) index: Arc<ContentIndex>,
    /// Site name appended to page titles.
    pub(crate) site_name: String,
    /// Sitemap rendered once from the index.
    pub(crate) sitemap: SitemapDocument,
}

impl AppState {
    /// Build state, rendering the sitemap up front.
    pub(crate) fn new(
        index: Arc<ContentIndex>,
        site_name: String,
        catalog: &RouteCatalog,
        base_url: &BaseUrl,
        version: &str,
    ) -> Result<Self, SitemapError> {
        let sitemap = SitemapDocument::build(&index, catalog, base_url, version)?;
        Ok(Self {
            index,
            site_name,
            sitemap,
        })
    }
}

/// Serialized sitemap and its `ETag`.
pub(crate) struct SitemapDocument {
    pub(crate) xml: String,
    pub(crate) etag: String,
}

impl SitemapDocument {
    fn build(
        index: &ContentIndex,
        catalog: &RouteCatalog,
        base_url: &BaseUrl,
        version: &str,
    ) -> Result<Self, SitemapError> {
        let entries = generate(index, catalog, base_url);
        let xml = to_xml(&entries)?;
        let etag = compute_etag(version, &xml);
        tracing::info!(entries = entries.len(), "Rendered sitemap");
        Ok(Self { xml, etag })
    }
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars) - sufficient for
/// cache invalidation with negligible collision probability.
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
