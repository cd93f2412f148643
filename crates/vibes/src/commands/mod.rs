//! CLI command implementations.

pub(crate) mod scaffold;
pub(crate) mod serve;
pub(crate) mod sitemap;

pub(crate) use scaffold::ScaffoldArgs;
pub(crate) use serve::ServeArgs;
pub(crate) use sitemap::SitemapArgs;
