//! What every generator reads.

use tint_common::Mode;
use tint_palette::syntax::{SyntaxRole, TokenMapId};
use tint_palette::{ChartPalette, PaletteSlot, SemanticPalette, StyleKey, Theme};

/// Mode-independent style tokens, already in their textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTokens {
    pub font_heading: String,
    pub font_body: String,
    pub radius: String,
    pub spacing: String,
    pub shadow: String,
    pub icon_set: String,
}

impl StyleTokens {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            font_heading: theme.style_value(StyleKey::FontHeading),
            font_body: theme.style_value(StyleKey::FontBody),
            radius: theme.style_value(StyleKey::Radius),
            spacing: theme.style_value(StyleKey::Spacing),
            shadow: theme.style_value(StyleKey::Shadow),
            icon_set: theme.style_value(StyleKey::IconSet),
        }
    }

    pub fn get(&self, key: StyleKey) -> &str {
        match key {
            StyleKey::FontHeading => &self.font_heading,
            StyleKey::FontBody => &self.font_body,
            StyleKey::Radius => &self.radius,
            StyleKey::Spacing => &self.spacing,
            StyleKey::Shadow => &self.shadow,
            StyleKey::IconSet => &self.icon_set,
        }
    }

    pub fn set(&mut self, key: StyleKey, value: String) {
        match key {
            StyleKey::FontHeading => self.font_heading = value,
            StyleKey::FontBody => self.font_body = value,
            StyleKey::Radius => self.radius = value,
            StyleKey::Spacing => self.spacing = value,
            StyleKey::Shadow => self.shadow = value,
            StyleKey::IconSet => self.icon_set = value,
        }
    }
}

/// Fully resolved palettes for both modes plus the requested mode.
///
/// Overrides are applied before this is built; generators never see them.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorInput {
    pub name: String,
    pub mode: Mode,
    pub light: SemanticPalette,
    pub dark: SemanticPalette,
    pub light_charts: ChartPalette,
    pub dark_charts: ChartPalette,
    pub token_map: TokenMapId,
    pub style: StyleTokens,
}

impl GeneratorInput {
    /// Input straight from a theme's base palettes, with no overrides.
    pub fn from_theme(theme: &Theme, mode: Mode) -> Self {
        Self {
            name: single_line(&theme.name),
            mode,
            light: theme.light,
            dark: theme.dark,
            light_charts: theme.light_charts,
            dark_charts: theme.dark_charts,
            token_map: theme.token_map,
            style: StyleTokens::from_theme(theme),
        }
    }

    /// Palette of the requested mode.
    pub fn palette(&self) -> &SemanticPalette {
        self.palette_for(self.mode)
    }

    pub fn palette_for(&self, mode: Mode) -> &SemanticPalette {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    pub fn charts_for(&self, mode: Mode) -> &ChartPalette {
        match mode {
            Mode::Light => &self.light_charts,
            Mode::Dark => &self.dark_charts,
        }
    }

    /// Hex of a slot in the requested mode.
    pub fn hex(&self, slot: PaletteSlot) -> String {
        self.palette().hex(slot)
    }

    /// Slot for a syntax role under the active token map, or `fallback`
    /// when the map has no entry for it.
    pub fn role_slot(&self, role: SyntaxRole, fallback: PaletteSlot) -> PaletteSlot {
        self.token_map.slot_for(role).unwrap_or(fallback)
    }

    /// `<name> (<mode>)`, used in artifact headers.
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.mode)
    }
}

/// Artifact headers are line-oriented; control characters become spaces.
fn single_line(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
