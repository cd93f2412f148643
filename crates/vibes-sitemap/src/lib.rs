//! Sitemap generation for the type wiki.
//!
//! [`generate`] flattens the content index and the application's
//! [`RouteCatalog`] into [`SitemapEntry`]s; [`to_xml`] writes them as a
//! sitemap protocol document.
//!
//! ```
//! use vibes_content::{ContentIndex, MemorySource};
//! use vibes_sitemap::{BaseUrl, RouteCatalog, generate, to_xml};
//!
//! let index = ContentIndex::load(&MemorySource::new()).unwrap();
//! let base = BaseUrl::parse("https://mbtivibes.com/").unwrap();
//! let entries = generate(&index, &RouteCatalog::default(), &base);
//! assert_eq!(entries[0].location, "https://mbtivibes.com/en");
//!
//! let xml = to_xml(&entries).unwrap();
//! assert!(xml.contains("<loc>https://mbtivibes.com/en/types/INTJ</loc>"));
//! ```

mod entry;
mod error;
mod generate;
mod url;
mod xml;

pub use entry::{ChangeFrequency, FeatureRoute, RouteCatalog, SitemapEntry};
pub use error::SitemapError;
pub use generate::generate;
pub use url::BaseUrl;
pub use xml::{SITEMAP_NAMESPACE, to_xml};
