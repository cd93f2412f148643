//! Sitemap entries and the route catalog they are built from.

use std::fmt;

use serde::{Deserialize, Serialize};
use vibes_catalog::TypeCode;

/// How often a location is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One URL in the sitemap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    /// Absolute URL.
    pub location: String,
    pub change_frequency: ChangeFrequency,
    /// Relative priority in `[0.0, 1.0]`.
    pub priority: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

/// A per-language feature page (`/{lang}/{path}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRoute {
    pub path: String,
    #[serde(rename = "changefreq")]
    pub change_frequency: ChangeFrequency,
}

impl FeatureRoute {
    pub fn new(path: impl Into<String>, change_frequency: ChangeFrequency) -> Self {
        Self {
            path: path.into(),
            change_frequency,
        }
    }
}

/// Application routes listed in the sitemap next to content pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCatalog {
    pub feature_routes: Vec<FeatureRoute>,
    /// Path segment before each detail identifier (`types`).
    pub detail_prefix: String,
    pub detail_ids: Vec<String>,
}

impl Default for RouteCatalog {
    fn default() -> Self {
        Self {
            feature_routes: vec![
                FeatureRoute::new("scenarios", ChangeFrequency::Weekly),
                FeatureRoute::new("fandoms", ChangeFrequency::Weekly),
                FeatureRoute::new("battle", ChangeFrequency::Monthly),
            ],
            detail_prefix: "types".to_owned(),
            detail_ids: TypeCode::ALL
                .iter()
                .map(|code| code.as_str().to_owned())
                .collect(),
        }
    }
}
