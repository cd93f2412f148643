//! Content sources feeding the index.
//!
//! [`ContentSource`] is the discovery seam: the index only ever sees
//! [`RawDocument`]s, never paths. [`FsSource`] walks a directory tree,
//! [`MemorySource`] holds documents in memory for tests and embedding.

use std::path::{Path, PathBuf};

use crate::document::RawDocument;
use crate::error::DiscoveryError;
use crate::locale::Language;
use crate::scanner::Scanner;

/// Default document extension.
pub const DEFAULT_EXTENSION: &str = "md";

/// Provider of raw documents for a one-off discovery pass.
pub trait ContentSource: Send + Sync {
    /// Discover and read every document.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError`] when the source cannot be read. This is
    /// fatal for index construction.
    fn load(&self) -> Result<Vec<RawDocument>, DiscoveryError>;
}

/// Filesystem content source: `{root}/{language}/{slug}.{ext}`.
pub struct FsSource {
    root: PathBuf,
    scanner: Scanner,
}

impl FsSource {
    /// Create a source reading `.md` documents under `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self::with_extension(root, DEFAULT_EXTENSION)
    }

    /// Create a source reading documents with a custom extension.
    #[must_use]
    pub fn with_extension(root: PathBuf, extension: &str) -> Self {
        Self {
            scanner: Scanner::new(root.clone(), extension),
            root,
        }
    }

    /// Content root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentSource for FsSource {
    fn load(&self) -> Result<Vec<RawDocument>, DiscoveryError> {
        let documents = self.scanner.scan()?;
        tracing::info!(
            root = %self.root.display(),
            documents = documents.len(),
            "Discovered content"
        );
        Ok(documents)
    }
}

/// In-memory content source.
///
/// # Example
///
/// ```
/// use vibes_content::{ContentIndex, Language, MemorySource};
///
/// let source = MemorySource::new()
///     .with_document(Language::En, "types/INTJ", "---\ntitle: Architect\n---\nhello");
/// let index = ContentIndex::load(&source).unwrap();
/// assert_eq!(index.get_page("en", "types/INTJ").unwrap().title, "Architect");
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    documents: Vec<RawDocument>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document.
    #[must_use]
    pub fn with_document(
        mut self,
        language: Language,
        slug: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.documents.push(RawDocument::new(language, slug, text));
        self
    }
}

impl ContentSource for MemorySource {
    fn load(&self) -> Result<Vec<RawDocument>, DiscoveryError> {
        Ok(self.documents.clone())
    }
}
