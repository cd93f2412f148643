//! Document discovery by filesystem walking.
//!
//! Layout: `{root}/{language}/{slug}.{ext}`, where the slug may contain
//! subdirectories (`en/types/INTJ.md` → language `en`, slug `types/INTJ`).
//! Only top-level directories named after a supported language are walked.
//! Symlinked directories are never followed; symlinked documents are read.

use std::fs;
use std::path::{Path, PathBuf};

use crate::document::RawDocument;
use crate::error::DiscoveryError;
use crate::locale::Language;

/// Walks a content root and reads every document under it.
pub(crate) struct Scanner {
    root: PathBuf,
    /// File suffix including the dot (e.g. ".md").
    suffix: String,
}

impl Scanner {
    /// Create a scanner for `root`, matching files with the given extension
    /// (without the leading dot).
    pub fn new(root: PathBuf, extension: &str) -> Self {
        Self {
            root,
            suffix: format!(".{}", extension.trim_start_matches('.')),
        }
    }

    /// Scan the content root and read all documents.
    ///
    /// # Errors
    ///
    /// Fails if the root is missing, not a directory, or any directory or
    /// document under a language directory cannot be read.
    pub fn scan(&self) -> Result<Vec<RawDocument>, DiscoveryError> {
        let metadata = fs::metadata(&self.root).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiscoveryError::RootMissing(self.root.clone())
            } else {
                DiscoveryError::io(&self.root, e)
            }
        })?;
        if !metadata.is_dir() {
            return Err(DiscoveryError::NotADirectory(self.root.clone()));
        }

        let mut documents = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(|e| DiscoveryError::io(&self.root, e))? {
            let entry = entry.map_err(|e| DiscoveryError::io(&self.root, e))?;
            let path = entry.path();
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                tracing::warn!(path = %path.display(), "Skipping non-UTF-8 path");
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            // `DirEntry::file_type` does not follow symlinks.
            let file_type = entry.file_type().map_err(|e| DiscoveryError::io(&path, e))?;
            if file_type.is_symlink() {
                tracing::debug!(path = %path.display(), "Not following symlink");
                continue;
            }
            if !file_type.is_dir() {
                tracing::debug!(path = %path.display(), "Skipping file outside a language directory");
                continue;
            }

            match Language::from_code(&name) {
                Some(language) => self.scan_directory(&path, language, "", &mut documents)?,
                None => {
                    tracing::debug!(directory = %name, "Skipping unsupported language directory");
                }
            }
        }

        Ok(documents)
    }

    /// Recursively collect documents below `dir`.
    fn scan_directory(
        &self,
        dir: &Path,
        language: Language,
        slug_prefix: &str,
        documents: &mut Vec<RawDocument>,
    ) -> Result<(), DiscoveryError> {
        for entry in fs::read_dir(dir).map_err(|e| DiscoveryError::io(dir, e))? {
            let entry = entry.map_err(|e| DiscoveryError::io(dir, e))?;
            let path = entry.path();
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                tracing::warn!(path = %path.display(), "Skipping non-UTF-8 path");
                continue;
            };
            if name.starts_with('.') {
                continue;
            }

            let file_type = entry.file_type().map_err(|e| DiscoveryError::io(&path, e))?;
            if file_type.is_dir() {
                let child_prefix = join_slug(slug_prefix, &name);
                self.scan_directory(&path, language, &child_prefix, documents)?;
            } else if file_type.is_symlink() && path.is_dir() {
                tracing::debug!(path = %path.display(), "Not following symlinked directory");
            } else if let Some(stem) = name.strip_suffix(self.suffix.as_str())
                && !stem.is_empty()
            {
                let slug = join_slug(slug_prefix, stem);
                let text = read_text(&path)?;
                documents.push(RawDocument::new(language, slug, text));
            }
        }
        Ok(())
    }
}

/// Append a path segment to a slug prefix.
fn join_slug(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}/{segment}")
    }
}

/// Read a document, decoding invalid UTF-8 lossily.
fn read_text(path: &Path) -> Result<String, DiscoveryError> {
    let bytes = fs::read(path).map_err(|e| DiscoveryError::io(path, e))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!(path = %path.display(), "Document is not valid UTF-8, decoding lossily");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn slugs(docs: &[RawDocument]) -> Vec<(Language, String)> {
        let mut out: Vec<_> = docs
            .iter()
            .map(|d| (d.path.language, d.path.slug.clone()))
            .collect();
        out.sort();
        out
    }

    #[test]
    fn test_join_slug() {
        assert_eq!(join_slug("", "types"), "types");
        assert_eq!(join_slug("types", "INTJ"), "types/INTJ");
        assert_eq!(join_slug("a/b", "c"), "a/b/c");
    }

    #[test]
    fn test_scan_nested_slugs_preserved() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "en/types/INTJ.md", "# INTJ");
        write(temp_dir.path(), "es/types/INTJ.md", "# INTJ");
        write(temp_dir.path(), "en/about.md", "# About");

        let docs = Scanner::new(temp_dir.path().to_path_buf(), "md")
            .scan()
            .unwrap();

        assert_eq!(
            slugs(&docs),
            vec![
                (Language::En, "about".to_owned()),
                (Language::En, "types/INTJ".to_owned()),
                (Language::Es, "types/INTJ".to_owned()),
            ]
        );
    }

    #[test]
    fn test_scan_reads_content() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "fr/index.md", "---\ntitle: Accueil\n---\n");

        let docs = Scanner::new(temp_dir.path().to_path_buf(), "md")
            .scan()
            .unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].path.slug, "index");
        assert_eq!(docs[0].text, "---\ntitle: Accueil\n---\n");
    }

    #[test]
    fn test_scan_skips_unsupported_language_dirs() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "ko/types/INTJ.md", "# INTJ");
        write(temp_dir.path(), "en-US/page.md", "# Page");
        write(temp_dir.path(), "de/page.md", "# Seite");

        let docs = Scanner::new(temp_dir.path().to_path_buf(), "md")
            .scan()
            .unwrap();

        assert_eq!(slugs(&docs), vec![(Language::De, "page".to_owned())]);
    }

    #[test]
    fn test_scan_skips_root_files_hidden_and_other_extensions() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "README.md", "# Root file");
        write(temp_dir.path(), "en/.draft.md", "# Hidden");
        write(temp_dir.path(), "en/.cache/page.md", "# Hidden dir");
        write(temp_dir.path(), "en/notes.txt", "not markdown");
        write(temp_dir.path(), "en/visible.md", "# Visible");

        let docs = Scanner::new(temp_dir.path().to_path_buf(), "md")
            .scan()
            .unwrap();

        assert_eq!(slugs(&docs), vec![(Language::En, "visible".to_owned())]);
    }

    #[test]
    fn test_scan_custom_extension() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "ru/page.markdown", "# Страница");
        write(temp_dir.path(), "ru/other.md", "# Ignored");

        let docs = Scanner::new(temp_dir.path().to_path_buf(), ".markdown")
            .scan()
            .unwrap();

        assert_eq!(slugs(&docs), vec![(Language::Ru, "page".to_owned())]);
    }

    #[test]
    fn test_scan_empty_root() {
        let temp_dir = create_test_dir();
        let docs = Scanner::new(temp_dir.path().to_path_buf(), "md")
            .scan()
            .unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_scan_missing_root_is_error() {
        let temp_dir = create_test_dir();
        let missing = temp_dir.path().join("nope");

        let err = Scanner::new(missing.clone(), "md").scan().unwrap_err();

        assert!(matches!(err, DiscoveryError::RootMissing(ref p) if *p == missing));
    }

    #[test]
    fn test_scan_root_is_file_is_error() {
        let temp_dir = create_test_dir();
        let file = temp_dir.path().join("content.md");
        fs::write(&file, "x").unwrap();

        let err = Scanner::new(file, "md").scan().unwrap_err();

        assert!(matches!(err, DiscoveryError::NotADirectory(_)));
    }

    #[test]
    fn test_scan_invalid_utf8_is_lossy() {
        let temp_dir = create_test_dir();
        fs::create_dir(temp_dir.path().join("en")).unwrap();
        fs::write(temp_dir.path().join("en/bad.md"), b"ok \xFF end").unwrap();

        let docs = Scanner::new(temp_dir.path().to_path_buf(), "md")
            .scan()
            .unwrap();

        assert_eq!(docs[0].text, "ok \u{FFFD} end");
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_symlink_loop_is_not_followed() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "en/page.md", "# Page");
        std::os::unix::fs::symlink(".", temp_dir.path().join("en/loop")).unwrap();
        std::os::unix::fs::symlink("en", temp_dir.path().join("es")).unwrap();

        let docs = Scanner::new(temp_dir.path().to_path_buf(), "md")
            .scan()
            .unwrap();

        assert_eq!(slugs(&docs), vec![(Language::En, "page".to_owned())]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_symlinked_document_is_read() {
        let temp_dir = create_test_dir();
        write(temp_dir.path(), "shared/intro.md", "# Intro");
        fs::create_dir(temp_dir.path().join("fr")).unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("shared/intro.md"),
            temp_dir.path().join("fr/intro.md"),
        )
        .unwrap();

        let docs = Scanner::new(temp_dir.path().to_path_buf(), "md")
            .scan()
            .unwrap();

        assert_eq!(slugs(&docs), vec![(Language::Fr, "intro".to_owned())]);
        assert_eq!(docs[0].text, "# Intro");
    }
}
