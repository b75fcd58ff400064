//! Theme model, presets and loading.
//!
//! Theme files are YAML (or JSON) documents naming any subset of slots per
//! mode. Missing slots are filled from a base preset before a [`Theme`] is
//! produced, so every theme is complete for both modes.

pub mod defaults;
mod document;
mod loader;
pub mod presets;
mod random;
mod types;


pub use document::{ChartsDocument, ThemeDocument, TypographyDocument};
pub use loader::{
    load_theme, load_theme_from_path, save_theme_to_path, theme_from_json, theme_from_yaml,
    themes_dir,
};
pub use presets::{preset, BUILT_IN_THEMES};
pub use random::random_theme;
pub use types::{format_rem, normalize_style, parse_rem, slugify, Ownership, Theme, Typography};
