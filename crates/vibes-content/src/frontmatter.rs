//! Front matter splitting and lenient field extraction.
//!
//! A document may start with a YAML block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Architect
//! color_group: analyst
//! ---
//!
//! Body text.
//! ```
//!
//! Fields are extracted one by one, so a single badly typed value never
//! discards the rest of the block.

use serde::Serialize;
use serde_yaml::Value;

use crate::error::MetadataError;

/// Opening and closing delimiter.
const DELIMITER: &str = "---";

/// Alternative closing delimiter (YAML document end marker).
const END_MARKER: &str = "...";

/// Metadata fields recognised in a document's front matter.
///
/// All fields are optional. `None` means the key was absent (or had no usable
/// scalar value); an explicitly empty string stays `Some("")`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FrontMatter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "lastModified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_group: Option<String>,
    #[serde(rename = "superpowers", skip_serializing_if = "Option::is_none")]
    pub superpowers_text: Option<String>,
    #[serde(rename = "annoyances", skip_serializing_if = "Option::is_none")]
    pub annoyances_text: Option<String>,
    #[serde(rename = "relationships", skip_serializing_if = "Option::is_none")]
    pub relationships_text: Option<String>,
    #[serde(rename = "career", skip_serializing_if = "Option::is_none")]
    pub career_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(rename = "canonical", skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(rename = "ogImage", skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(rename = "ogType", skip_serializing_if = "Option::is_none")]
    pub og_type: Option<String>,
    #[serde(rename = "twitterCard", skip_serializing_if = "Option::is_none")]
    pub twitter_card_type: Option<String>,
    #[serde(rename = "robots", skip_serializing_if = "Option::is_none")]
    pub robots_directive: Option<String>,
}

impl FrontMatter {
    /// Parse front matter fields from a YAML block.
    ///
    /// Empty (or all-whitespace) input yields the default instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or is not a mapping.
    pub fn from_yaml(yaml: &str) -> Result<Self, MetadataError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let map = match serde_yaml::from_str::<Value>(yaml)? {
            Value::Mapping(map) => map,
            Value::Null => return Ok(Self::default()),
            _ => return Err(MetadataError::NotAMapping),
        };

        // First key present wins; the second name is an accepted alias.
        let field = |keys: &[&str]| {
            keys.iter()
                .find_map(|key| map.get(*key))
                .and_then(scalar_text)
        };

        Ok(Self {
            title: field(&["title"]),
            description: field(&["description"]),
            author: field(&["author"]),
            last_modified: field(&["lastModified", "last_modified"]),
            emoji: field(&["emoji"]),
            color_group: field(&["color_group", "colorGroup"]),
            superpowers_text: field(&["superpowers", "superpowersText"]),
            annoyances_text: field(&["annoyances", "annoyancesText"]),
            relationships_text: field(&["relationships", "relationshipsText"]),
            career_text: field(&["career", "careerText"]),
            keywords: field(&["keywords"]),
            canonical_url: field(&["canonical", "canonicalUrl"]),
            og_image: field(&["ogImage"]),
            og_type: field(&["ogType"]),
            twitter_card_type: field(&["twitterCard", "twitterCardType"]),
            robots_directive: field(&["robots", "robotsDirective"]),
        })
    }

    /// Check if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Convert a YAML value to text.
///
/// Strings are taken verbatim, numbers and booleans are stringified, and a
/// sequence of scalars is joined with `", "`. Anything else has no text.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Sequence(items) => {
            let parts: Option<Vec<String>> = items
                .iter()
                .map(|item| match item {
                    Value::Sequence(_) => None,
                    other => scalar_text(other),
                })
                .collect();
            parts.map(|parts| parts.join(", "))
        }
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Mapping(_) => None,
    }
}

/// Split a document into its front matter block (if any) and body.
///
/// The opening delimiter must be the first line (after an optional BOM).
/// Without a closing delimiter the whole text is treated as body.
pub(crate) fn split(raw: &str) -> (Option<&str>, &str) {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let (first_line, rest) = match text.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (text, ""),
    };
    if first_line.trim_end() != DELIMITER {
        return (None, text);
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end();
        if trimmed == DELIMITER || trimmed == END_MARKER {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    (None, text)
}

/// Write a document source from front matter and body.
///
/// The result parses back to the same fields.
///
/// # Errors
///
/// Returns an error if the front matter cannot be serialized.
pub fn compose(front_matter: &FrontMatter, body: &str) -> Result<String, MetadataError> {
    if front_matter.is_empty() {
        return Ok(body.to_owned());
    }

    let yaml = serde_yaml::to_string(front_matter)?;
    let mut out = String::with_capacity(yaml.len() + body.len() + 16);
    out.push_str(DELIMITER);
    out.push('\n');
    out.push_str(&yaml);
    if !yaml.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(DELIMITER);
    out.push_str("\n\n");
    out.push_str(body);
    Ok(out)
}
