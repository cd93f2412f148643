//! Type codes and their groups.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Error returned when a string is not one of the sixteen type codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown type code: {0}")]
pub struct UnknownTypeCode(pub String);

/// One of the sixteen personality type codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeCode {
    Intj,
    Intp,
    Entj,
    Entp,
    Infj,
    Infp,
    Enfj,
    Enfp,
    Istj,
    Isfj,
    Estj,
    Esfj,
    Istp,
    Isfp,
    Estp,
    Esfp,
}

impl TypeCode {
    /// Every type code, grouped (analysts, diplomats, sentinels, explorers).
    pub const ALL: [Self; 16] = [
        Self::Intj,
        Self::Intp,
        Self::Entj,
        Self::Entp,
        Self::Infj,
        Self::Infp,
        Self::Enfj,
        Self::Enfp,
        Self::Istj,
        Self::Isfj,
        Self::Estj,
        Self::Esfj,
        Self::Istp,
        Self::Isfp,
        Self::Estp,
        Self::Esfp,
    ];

    /// Upper-case four-letter code (`"INTJ"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intj => "INTJ",
            Self::Intp => "INTP",
            Self::Entj => "ENTJ",
            Self::Entp => "ENTP",
            Self::Infj => "INFJ",
            Self::Infp => "INFP",
            Self::Enfj => "ENFJ",
            Self::Enfp => "ENFP",
            Self::Istj => "ISTJ",
            Self::Isfj => "ISFJ",
            Self::Estj => "ESTJ",
            Self::Esfj => "ESFJ",
            Self::Istp => "ISTP",
            Self::Isfp => "ISFP",
            Self::Estp => "ESTP",
            Self::Esfp => "ESFP",
        }
    }

    /// Temperament group of this type.
    #[must_use]
    pub const fn group(self) -> TypeGroup {
        match self {
            Self::Intj | Self::Intp | Self::Entj | Self::Entp => TypeGroup::Analyst,
            Self::Infj | Self::Infp | Self::Enfj | Self::Enfp => TypeGroup::Diplomat,
            Self::Istj | Self::Isfj | Self::Estj | Self::Esfj => TypeGroup::Sentinel,
            Self::Istp | Self::Isfp | Self::Estp | Self::Esfp => TypeGroup::Explorer,
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeCode {
    type Err = UnknownTypeCode;

    /// Exact match on the upper-case code. `"intj"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownTypeCode(s.to_owned()))
    }
}

impl Serialize for TypeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The four temperament groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeGroup {
    Analyst,
    Diplomat,
    Sentinel,
    Explorer,
}

impl TypeGroup {
    /// Lower-case group name as used in content front matter (`color_group`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Analyst => "analyst",
            Self::Diplomat => "diplomat",
            Self::Sentinel => "sentinel",
            Self::Explorer => "explorer",
        }
    }

    /// Parse a group name. Unknown names return `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "analyst" => Some(Self::Analyst),
            "diplomat" => Some(Self::Diplomat),
            "sentinel" => Some(Self::Sentinel),
            "explorer" => Some(Self::Explorer),
            _ => None,
        }
    }
}

impl fmt::Display for TypeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
