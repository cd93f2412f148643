//! Document types and the document parser.

use serde::Serialize;

use crate::frontmatter::{FrontMatter, split};
use crate::locale::Language;
use crate::markdown::render_markdown;

/// Identity of a document: one language plus a slug.
///
/// Slugs are path-like and keep their `/` separators (e.g. `types/INTJ`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentPath {
    pub language: Language,
    pub slug: String,
}

impl ContentPath {
    #[must_use]
    pub fn new(language: Language, slug: impl Into<String>) -> Self {
        Self {
            language,
            slug: slug.into(),
        }
    }

    /// Site-relative URL of the page (`/{language}/{slug}`).
    #[must_use]
    pub fn url(&self) -> String {
        format!("/{}/{}", self.language.code(), self.slug)
    }
}

/// Unparsed document text as discovered by a content source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawDocument {
    pub path: ContentPath,
    pub text: String,
}

impl RawDocument {
    #[must_use]
    pub fn new(language: Language, slug: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: ContentPath::new(language, slug),
            text: text.into(),
        }
    }
}

/// A parsed content page.
///
/// `title` falls back to the slug and `description` to an empty string; every
/// other metadata field is `None` unless the source set it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocument {
    pub slug: String,
    pub language: Language,
    pub title: String,
    pub description: String,
    /// Rendered HTML body.
    pub body_markup: String,
    /// Markdown body before rendering.
    pub raw_body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,

    // Type profile fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superpowers_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annoyances_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_text: Option<String>,

    // SEO fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_card_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots_directive: Option<String>,
}

impl ParsedDocument {
    /// Listing projection of this document.
    #[must_use]
    pub fn meta(&self) -> ContentMeta {
        ContentMeta {
            url: ContentPath::new(self.language, self.slug.as_str()).url(),
            slug: self.slug.clone(),
            language: self.language,
            title: self.title.clone(),
            description: self.description.clone(),
            last_modified: self.last_modified.clone(),
        }
    }
}

/// Listing entry for a page, used by index listings and the sitemap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMeta {
    pub slug: String,
    pub language: Language,
    pub title: String,
    pub description: String,
    /// Site-relative URL (`/{language}/{slug}`).
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

/// Parse a raw document.
///
/// Never fails: absent or malformed front matter leaves every metadata field
/// at its default, and the whole text after a broken block is still rendered.
#[must_use]
pub fn parse(raw: &str, language: Language, slug: &str) -> ParsedDocument {
    let (yaml, body) = split(raw);

    let front_matter = match yaml.map(FrontMatter::from_yaml) {
        Some(Ok(front_matter)) => front_matter,
        Some(Err(e)) => {
            tracing::debug!(language = %language, slug, error = %e, "Malformed front matter, using defaults");
            FrontMatter::default()
        }
        None => FrontMatter::default(),
    };

    from_parts(front_matter, body, language, slug)
}

fn from_parts(fm: FrontMatter, body: &str, language: Language, slug: &str) -> ParsedDocument {
    let title = fm
        .title
        .filter(|title| !title.trim().is_empty())
        .unwrap_or_else(|| slug.to_owned());

    ParsedDocument {
        slug: slug.to_owned(),
        language,
        title,
        description: fm.description.unwrap_or_default(),
        body_markup: render_markdown(body),
        raw_body: body.to_owned(),
        author: fm.author,
        last_modified: fm.last_modified,
        emoji: fm.emoji,
        color_group: fm.color_group,
        superpowers_text: fm.superpowers_text,
        annoyances_text: fm.annoyances_text,
        relationships_text: fm.relationships_text,
        career_text: fm.career_text,
        keywords: fm.keywords,
        canonical_url: fm.canonical_url,
        og_image: fm.og_image,
        og_type: fm.og_type,
        twitter_card_type: fm.twitter_card_type,
        robots_directive: fm.robots_directive,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_title_description_body() {
        let raw = "---\ntitle: \"Architect\"\ndescription: \"x\"\n---\nhello\n";
        let doc = parse(raw, Language::En, "types/INTJ");

        assert_eq!(doc.slug, "types/INTJ");
        assert_eq!(doc.language, Language::En);
        assert_eq!(doc.title, "Architect");
        assert_eq!(doc.description, "x");
        assert!(doc.body_markup.contains("hello"));
        assert_eq!(doc.raw_body, "hello\n");
    }

    #[test]
    fn test_parse_without_front_matter() {
        let doc = parse("# Just a body", Language::Es, "about");

        assert_eq!(doc.title, "about");
        assert_eq!(doc.description, "");
        assert!(doc.author.is_none());
        assert!(doc.emoji.is_none());
        assert!(doc.canonical_url.is_none());
        assert!(doc.body_markup.contains("<h1>Just a body</h1>"));
    }

    #[test]
    fn test_parse_missing_description_is_empty_string() {
        let doc = parse("---\ntitle: T\n---\n", Language::En, "t");
        assert_eq!(doc.description, "");
    }

    #[test]
    fn test_parse_malformed_front_matter_falls_back() {
        let raw = "---\ntitle: [broken\n---\nBody survives";
        let doc = parse(raw, Language::Fr, "broken");

        assert_eq!(doc.slug, "broken");
        assert_eq!(doc.language, Language::Fr);
        assert_eq!(doc.title, "broken");
        assert_eq!(doc.description, "");
        assert!(doc.author.is_none());
        assert!(doc.body_markup.contains("Body survives"));
    }

    #[test]
    fn test_parse_empty_title_falls_back_to_slug() {
        let doc = parse("---\ntitle: \"  \"\n---\n", Language::En, "guide");
        assert_eq!(doc.title, "guide");
    }

    #[test]
    fn test_parse_empty_input() {
        let doc = parse("", Language::Ru, "empty");
        assert_eq!(doc.title, "empty");
        assert_eq!(doc.body_markup, "");
        assert_eq!(doc.raw_body, "");
    }

    #[test]
    fn test_parse_optional_fields_distinguish_empty() {
        let raw = "---\nauthor: \"\"\nemoji: \"🦉\"\n---\n";
        let doc = parse(raw, Language::En, "x");
        assert_eq!(doc.author, Some(String::new()));
        assert_eq!(doc.emoji, Some("🦉".to_owned()));
        assert!(doc.career_text.is_none());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let raw = "---\ntitle: A\nkeywords: [a, b]\nlastModified: 2024-02-02\n---\n\n| x |\n|---|\n| 1 |\n";
        assert_eq!(
            parse(raw, Language::De, "a/b"),
            parse(raw, Language::De, "a/b")
        );
    }

    #[test]
    fn test_meta_projection() {
        let raw = "---\ntitle: Logician\ndescription: d\nlastModified: 2024-03-01\n---\n";
        let meta = parse(raw, Language::Es, "types/INTP").meta();

        assert_eq!(
            meta,
            ContentMeta {
                slug: "types/INTP".to_owned(),
                language: Language::Es,
                title: "Logician".to_owned(),
                description: "d".to_owned(),
                url: "/es/types/INTP".to_owned(),
                last_modified: Some("2024-03-01".to_owned()),
            }
        );
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let doc = parse("---\ntitle: A\nogType: profile\n---\nbody", Language::En, "a");
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["title"], "A");
        assert_eq!(json["language"], "en");
        assert_eq!(json["ogType"], "profile");
        assert!(json["bodyMarkup"].as_str().unwrap().contains("body"));
        assert!(json.get("author").is_none());
        assert!(json.get("lastModified").is_none());
    }

    #[test]
    fn test_content_path_url() {
        let path = ContentPath::new(Language::Ru, "types/ENFP");
        assert_eq!(path.url(), "/ru/types/ENFP");
    }
}
