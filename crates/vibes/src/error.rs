//! CLI error types.

use vibes_config::ConfigError;
use vibes_content::{DiscoveryError, MetadataError};
use vibes_sitemap::SitemapError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Discovery(#[from] DiscoveryError),

    #[error("{0}")]
    Sitemap(#[from] SitemapError),

    #[error("{0}")]
    Metadata(#[from] MetadataError),

    #[error("{0}")]
    Server(String),
}
