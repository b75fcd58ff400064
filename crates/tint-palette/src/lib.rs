//! Tint's canonical color model.
//!
//! Color parsing and color-space conversion, the closed palette slot and
//! token key enumerations, syntax roles with their token maps, and the
//! [`Theme`] type together with presets, loading and random derivation.
//!
//! Everything that enters from outside (theme files, stored snapshots,
//! command-line edits) is converted to the typed enumerations once, at the
//! boundary. Unknown keys fail with a [`tint_common::KeyError`]; malformed
//! colors are corrected and logged.

/// Implements `Serialize`/`Deserialize` for a key type through its
/// `Display` and `FromStr` impls.
macro_rules! serde_as_str {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod colors;
pub mod slots;
pub mod syntax;
pub mod theme;

pub use colors::{normalize_color, parse_color, Hsla, Normalized, Oklch};
pub use slots::{ChartPalette, ChartSlot, Hue, PaletteSlot, SemanticPalette, StyleKey, TokenKey};
pub use syntax::{SyntaxRole, TokenMapId};
pub use theme::{load_theme, random_theme, Ownership, Theme, ThemeDocument, BUILT_IN_THEMES};
