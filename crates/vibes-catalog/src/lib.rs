//! The sixteen personality types as a closed catalog.
//!
//! Type codes arriving as text (URL segments, front matter) are parsed into
//! [`TypeCode`] once; everything downstream is a total lookup. Text that is
//! not a known code gets a defined fallback rather than a missing entry.

mod code;
mod profile;

pub use code::{TypeCode, TypeGroup, UnknownTypeCode};
pub use profile::{CardColors, TypeProfile, card_colors_for, profile};
