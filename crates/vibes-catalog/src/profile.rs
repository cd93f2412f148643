//! Static type profiles and card colours.

use serde::Serialize;

use crate::code::{TypeCode, TypeGroup};

/// Display record for one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeProfile {
    pub code: TypeCode,
    /// Display name ("Architect").
    pub name: &'static str,
    /// Playful nickname ("The Tired Mastermind").
    pub nickname: &'static str,
    /// Totem animal emoji.
    pub totem: &'static str,
    /// Accent colour as `#RRGGBB`.
    pub color: &'static str,
    pub superpower: &'static str,
    pub lucky_item: &'static str,
}

/// Background and shade colours for a type card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardColors {
    pub background: &'static str,
    pub shade: &'static str,
}

impl TypeGroup {
    /// Card colours for this group.
    #[must_use]
    pub const fn card_colors(self) -> CardColors {
        match self {
            Self::Analyst => CardColors {
                background: "#e2d1f9",
                shade: "#c9b3e6",
            },
            Self::Diplomat => CardColors {
                background: "#c8f7dc",
                shade: "#9ee7c0",
            },
            Self::Sentinel => CardColors {
                background: "#bde0fe",
                shade: "#89c4f4",
            },
            Self::Explorer => CardColors {
                background: "#fef3c7",
                shade: "#fde68a",
            },
        }
    }
}

/// Card colours for a code given as text.
///
/// Unknown codes use the analyst colours.
#[must_use]
pub fn card_colors_for(code: &str) -> CardColors {
    code.parse::<TypeCode>()
        .map_or(TypeGroup::Analyst, TypeCode::group)
        .card_colors()
}

const fn entry(
    code: TypeCode,
    name: &'static str,
    nickname: &'static str,
    totem: &'static str,
    color: &'static str,
    superpower: &'static str,
    lucky_item: &'static str,
) -> TypeProfile {
    TypeProfile {
        code,
        name,
        nickname,
        totem,
        color,
        superpower,
        lucky_item,
    }
}

/// Profiles indexed in [`TypeCode::ALL`] order.
#[rustfmt::skip]
static PROFILES: [TypeProfile; 16] = [
    entry(TypeCode::Intj, "Architect", "The Tired Mastermind", "🦉", "#9F7AEA", "Predicting 'I told you so' moments", "Noise-canceling Headphones"),
    entry(TypeCode::Intp, "Logician", "Naptime Philosopher", "🐙", "#805AD5", "Debugging reality", "Unfinished Projects"),
    entry(TypeCode::Entj, "Commander", "CEO of Everything", "🦁", "#553C9A", "Hostile takeover", "Megaphone"),
    entry(TypeCode::Entp, "Debater", "Chaos Agent", "🦊", "#9F7AEA", "Winning arguments", "Badge"),
    entry(TypeCode::Infj, "Advocate", "Mystic Therapist", "🦋", "#48BB78", "Soul reading", "Crystal Ball"),
    entry(TypeCode::Infp, "Mediator", "Daydream Believer", "🦌", "#38B2AC", "Crying beautifully", "Cookie"),
    entry(TypeCode::Enfj, "Protagonist", "Golden Retriever", "🐬", "#2F855A", "Supportiveness", "Bracelet"),
    entry(TypeCode::Enfp, "Campaigner", "Human Glitter", "🦄", "#38B2AC", "Befriending introverts against their will", "Shiny Object"),
    entry(TypeCode::Istj, "Logistician", "Spreadsheet Warrior", "🐝", "#2B6CB0", "Deadlines", "Label Maker"),
    entry(TypeCode::Isfj, "Defender", "Secret Guardian", "🐻", "#4299E1", "Cleaning", "Cookies"),
    entry(TypeCode::Estj, "Executive", "The Manager", "🦅", "#2C5282", "Yelling", "Clipboard"),
    entry(TypeCode::Esfj, "Consul", "Gossip Queen", "🦚", "#3182CE", "Social network dominance", "Party Planner"),
    entry(TypeCode::Istp, "Virtuoso", "Chill Mechanic", "🐆", "#D69E2E", "Fixing things with brute force", "Multi-tool"),
    entry(TypeCode::Isfp, "Adventurer", "Aesthetic Rebel", "🦢", "#ECC94B", "Vibing", "Camera"),
    entry(TypeCode::Estp, "Entrepreneur", "Risk Taker", "🦈", "#DD6B20", "Doing it live", "Energy Drink"),
    entry(TypeCode::Esfp, "Performer", "Party Starter", "🦜", "#ED8936", "Entertainment", "Mic"),
];

/// Profile for a type code.
#[must_use]
pub fn profile(code: TypeCode) -> &'static TypeProfile {
    // ALL and PROFILES share the same order; the enum discriminant is the position.
    &PROFILES[code as usize]
}
