//! SEO head tags for content pages.

use serde::Serialize;

use crate::document::ParsedDocument;

const DEFAULT_OG_TYPE: &str = "article";
const DEFAULT_TWITTER_CARD: &str = "summary";
const NOT_FOUND_DESCRIPTION: &str = "The requested page could not be found.";

/// One element of a page `<head>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HeadTag {
    /// `<title>`
    Title { title: String },
    /// `<meta name=… content=…>`
    Meta { name: String, content: String },
    /// `<meta property=… content=…>` (Open Graph)
    Property { property: String, content: String },
    /// `<link rel=… href=…>`
    Link { rel: String, href: String },
}

impl HeadTag {
    fn title(title: String) -> Self {
        Self::Title { title }
    }

    fn meta(name: &str, content: impl Into<String>) -> Self {
        Self::Meta {
            name: name.to_owned(),
            content: content.into(),
        }
    }

    fn property(property: &str, content: impl Into<String>) -> Self {
        Self::Property {
            property: property.to_owned(),
            content: content.into(),
        }
    }
}

/// Non-empty value of an optional metadata field.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Head tags for a content page.
///
/// Optional tags (keywords, robots, image, canonical link) are emitted only
/// when the document sets a non-empty value.
#[must_use]
pub fn page_head(doc: &ParsedDocument, site_name: &str) -> Vec<HeadTag> {
    let mut tags = vec![
        HeadTag::title(format!("{} | {site_name}", doc.title)),
        HeadTag::meta("description", doc.description.as_str()),
        HeadTag::property("og:title", doc.title.as_str()),
        HeadTag::property("og:description", doc.description.as_str()),
        HeadTag::property(
            "og:type",
            present(doc.og_type.as_ref()).unwrap_or(DEFAULT_OG_TYPE),
        ),
        HeadTag::property("og:locale", doc.language.code()),
        HeadTag::meta("twitter:title", doc.title.as_str()),
        HeadTag::meta("twitter:description", doc.description.as_str()),
        HeadTag::meta(
            "twitter:card",
            present(doc.twitter_card_type.as_ref()).unwrap_or(DEFAULT_TWITTER_CARD),
        ),
    ];

    if let Some(keywords) = present(doc.keywords.as_ref()) {
        tags.push(HeadTag::meta("keywords", keywords));
    }
    if let Some(robots) = present(doc.robots_directive.as_ref()) {
        tags.push(HeadTag::meta("robots", robots));
    }
    if let Some(image) = present(doc.og_image.as_ref()) {
        tags.push(HeadTag::property("og:image", image));
        tags.push(HeadTag::meta("twitter:image", image));
    }
    if let Some(canonical) = present(doc.canonical_url.as_ref()) {
        tags.push(HeadTag::Link {
            rel: "canonical".to_owned(),
            href: canonical.to_owned(),
        });
    }

    tags
}

/// Head tags for the not-found presentation.
#[must_use]
pub fn not_found_head(site_name: &str) -> Vec<HeadTag> {
    vec![
        HeadTag::title(format!("Page Not Found | {site_name}")),
        HeadTag::meta("description", NOT_FOUND_DESCRIPTION),
        HeadTag::meta("robots", "noindex, nofollow"),
    ]
}
