//! HTTP request handlers.

pub(crate) mod content;
pub(crate) mod languages;
pub(crate) mod sitemap;
pub(crate) mod types;
