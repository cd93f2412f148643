//! Error types for content lookup and discovery.

use std::path::PathBuf;

use crate::locale::Language;

/// Lookup failure returned by [`ContentIndex`](crate::ContentIndex).
///
/// The two variants are the only not-found causes callers ever see; they are
/// kept apart so the presentation layer can pick the right not-found page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// Requested language is outside the supported set.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    /// Language is supported but no document exists at the slug.
    #[error("Page not found: {language}/{slug}")]
    PageNotFound {
        /// Requested language.
        language: Language,
        /// Requested slug.
        slug: String,
    },
}

impl ContentError {
    /// Machine-readable reason, used in API responses.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::UnsupportedLanguage(_) => "unsupported_language",
            Self::PageNotFound { .. } => "page_not_found",
        }
    }
}

/// Malformed front matter. Absorbed by the parser, never surfaced.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// YAML parsing error.
    #[error("Invalid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Front matter parsed but is not a key/value mapping.
    #[error("Front matter must be a mapping")]
    NotAMapping,
}

/// Fatal error while discovering raw documents.
///
/// An unreadable content root aborts initialization instead of producing an
/// empty index.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    /// Content root does not exist.
    #[error("Content root not found: {}", .0.display())]
    RootMissing(PathBuf),
    /// Content root exists but is not a directory.
    #[error("Content root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// I/O error while walking or reading.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl DiscoveryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_error_display() {
        let err = ContentError::UnsupportedLanguage("ko".to_owned());
        assert_eq!(err.to_string(), "Unsupported language: ko");

        let err = ContentError::PageNotFound {
            language: Language::De,
            slug: "types/INTJ".to_owned(),
        };
        assert_eq!(err.to_string(), "Page not found: de/types/INTJ");
    }

    #[test]
    fn test_content_error_reason() {
        assert_eq!(
            ContentError::UnsupportedLanguage(String::new()).reason(),
            "unsupported_language"
        );
        assert_eq!(
            ContentError::PageNotFound {
                language: Language::En,
                slug: "x".to_owned(),
            }
            .reason(),
            "page_not_found"
        );
    }

    #[test]
    fn test_discovery_error_display() {
        let err = DiscoveryError::RootMissing(PathBuf::from("/srv/content"));
        assert_eq!(err.to_string(), "Content root not found: /srv/content");

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = DiscoveryError::io("/srv/content/en", io_err);
        assert_eq!(err.to_string(), "I/O error at /srv/content/en: denied");
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ContentError>();
        assert_send_sync::<DiscoveryError>();
    }
}
