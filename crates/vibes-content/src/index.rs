//! The content index.
//!
//! [`ContentIndex`] is built once from a [`ContentSource`] and is immutable
//! afterwards, so it can be shared as `Arc<ContentIndex>` and read from any
//! number of threads without locking. Documents are parsed on first access and
//! cached; the `OnceLock` per document makes concurrent first reads parse once.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use rayon::prelude::*;

use crate::document::{ContentMeta, ContentPath, ParsedDocument, RawDocument, parse};
use crate::error::{ContentError, DiscoveryError};
use crate::locale::{Language, supported_languages};
use crate::source::ContentSource;

/// Raw text plus its lazily parsed form.
struct Entry {
    raw: String,
    parsed: OnceLock<Arc<ParsedDocument>>,
}

impl Entry {
    fn new(raw: String) -> Self {
        Self {
            raw,
            parsed: OnceLock::new(),
        }
    }

    fn document(&self, path: &ContentPath) -> Arc<ParsedDocument> {
        Arc::clone(
            self.parsed
                .get_or_init(|| Arc::new(parse(&self.raw, path.language, &path.slug))),
        )
    }
}

/// Immutable mapping from `(language, slug)` to documents.
pub struct ContentIndex {
    entries: HashMap<ContentPath, Entry>,
    /// Slugs per language, sorted for stable listings.
    slugs: HashMap<Language, Vec<String>>,
}

impl ContentIndex {
    /// Build the index from a content source.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError`] if the source cannot be read.
    pub fn load<S: ContentSource + ?Sized>(source: &S) -> Result<Self, DiscoveryError> {
        Ok(Self::from_documents(source.load()?))
    }

    /// Build the index from already discovered documents.
    ///
    /// A later document with the same `(language, slug)` replaces an earlier one.
    #[must_use]
    pub fn from_documents(documents: impl IntoIterator<Item = RawDocument>) -> Self {
        let mut entries = HashMap::new();
        for RawDocument { path, text } in documents {
            if entries.contains_key(&path) {
                tracing::warn!(
                    language = %path.language,
                    slug = %path.slug,
                    "Duplicate content path, keeping the last document"
                );
            }
            entries.insert(path, Entry::new(text));
        }

        let mut slugs: HashMap<Language, Vec<String>> = HashMap::new();
        for path in entries.keys() {
            slugs
                .entry(path.language)
                .or_default()
                .push(path.slug.clone());
        }
        for list in slugs.values_mut() {
            list.sort_unstable();
        }

        Self { entries, slugs }
    }

    /// The fixed supported language set, independent of what content exists.
    #[must_use]
    pub fn supported_languages(&self) -> &'static [Language] {
        supported_languages()
    }

    /// Look up a page by language code and slug.
    ///
    /// # Errors
    ///
    /// - [`ContentError::UnsupportedLanguage`] if `language` is not supported
    /// - [`ContentError::PageNotFound`] if no document exists at the slug
    pub fn get_page(
        &self,
        language: &str,
        slug: &str,
    ) -> Result<Arc<ParsedDocument>, ContentError> {
        let language: Language = language.parse()?;
        self.page(language, slug)
            .ok_or_else(|| ContentError::PageNotFound {
                language,
                slug: slug.to_owned(),
            })
    }

    /// Look up a page for an already validated language.
    #[must_use]
    pub fn page(&self, language: Language, slug: &str) -> Option<Arc<ParsedDocument>> {
        let path = ContentPath::new(language, slug);
        self.entries.get(&path).map(|entry| entry.document(&path))
    }

    /// Check whether a page exists without parsing it.
    ///
    /// Agrees with [`get_page`](Self::get_page): unsupported languages never exist.
    #[must_use]
    pub fn exists(&self, language: &str, slug: &str) -> bool {
        Language::from_code(language)
            .is_some_and(|language| self.entries.contains_key(&ContentPath::new(language, slug)))
    }

    /// List all pages of one language, ordered by slug.
    ///
    /// Returns an empty list for a language with no documents.
    #[must_use]
    pub fn list_pages(&self, language: Language) -> Vec<ContentMeta> {
        let Some(slugs) = self.slugs.get(&language) else {
            return Vec::new();
        };

        slugs
            .iter()
            .filter_map(|slug| self.page(language, slug))
            .map(|doc| doc.meta())
            .collect()
    }

    /// List pages of every supported language.
    #[must_use]
    pub fn list_all_pages(&self) -> Vec<ContentMeta> {
        supported_languages()
            .iter()
            .flat_map(|&language| self.list_pages(language))
            .collect()
    }

    /// Number of documents for one language.
    #[must_use]
    pub fn document_count(&self, language: Language) -> usize {
        self.slugs.get(&language).map_or(0, Vec::len)
    }

    /// Total number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse every document up front, in parallel.
    pub fn preload(&self) {
        self.entries.par_iter().for_each(|(path, entry)| {
            entry.document(path);
        });
        tracing::debug!(documents = self.entries.len(), "Preloaded content");
    }
}

impl fmt::Debug for ContentIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<_> = self
            .slugs
            .iter()
            .map(|(language, slugs)| (language.code(), slugs.len()))
            .collect();
        counts.sort_unstable();
        f.debug_struct("ContentIndex")
            .field("documents", &self.entries.len())
            .field("per_language", &counts)
            .finish()
    }
}
