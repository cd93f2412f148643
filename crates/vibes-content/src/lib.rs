//! Multi-locale content index for the type wiki.
//!
//! This crate provides:
//! - [`ContentIndex`]: `(language, slug)` → parsed document, built once at start
//! - [`parse`]: front matter + markdown body → [`ParsedDocument`]
//! - [`locale`]: the fixed supported language set
//! - [`page_head`]: SEO head tags for a page
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use vibes_content::{ContentIndex, FsSource, Language};
//!
//! let source = FsSource::new(PathBuf::from("content"));
//! let index = ContentIndex::load(&source)?;
//!
//! let page = index.get_page("en", "types/INTJ")?;
//! println!("{}", page.title);
//!
//! for meta in index.list_pages(Language::Es) {
//!     println!("{}", meta.url);
//! }
//! # Ok(())
//! # }
//! ```

mod document;
mod error;
mod frontmatter;
mod head;
mod index;
pub mod locale;
mod markdown;
mod scanner;
mod source;

pub use document::{ContentMeta, ContentPath, ParsedDocument, RawDocument, parse};
pub use error::{ContentError, DiscoveryError, MetadataError};
pub use frontmatter::{FrontMatter, compose};
pub use head::{HeadTag, not_found_head, page_head};
pub use index::ContentIndex;
pub use locale::Language;
pub use markdown::render_markdown;
pub use source::{ContentSource, DEFAULT_EXTENSION, FsSource, MemorySource};
