//! Supported content languages.
//!
//! The supported set is fixed and ordered. Discovery, lookups and the sitemap
//! all read it from here, so a language is either served everywhere or
//! nowhere.
//!
//! Matching is exact: `en-US` is not coerced to `en`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// A supported content language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default).
    En,
    /// Spanish.
    Es,
    /// German.
    De,
    /// French.
    Fr,
    /// Russian.
    Ru,
}

impl Language {
    /// Every supported language, in canonical order.
    pub const ALL: [Self; 5] = [Self::En, Self::Es, Self::De, Self::Fr, Self::Ru];

    /// Language used when none (or an unsupported one) is requested.
    pub const DEFAULT: Self = Self::En;

    /// Two-letter language code as used in URLs and content directories.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Ru => "ru",
        }
    }

    /// Look up a language by its exact code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ContentError::UnsupportedLanguage(s.to_owned()))
    }
}

/// The fixed, ordered set of supported languages.
#[must_use]
pub fn supported_languages() -> &'static [Language] {
    &Language::ALL
}

/// Check whether a language code is in the supported set.
#[must_use]
pub fn is_supported(code: &str) -> bool {
    Language::from_code(code).is_some()
}

/// Resolve a requested language code, falling back to [`Language::DEFAULT`].
#[must_use]
pub fn resolve(requested: Option<&str>) -> Language {
    requested
        .and_then(Language::from_code)
        .unwrap_or(Language::DEFAULT)
}
