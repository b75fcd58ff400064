//! The canonical theme type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tint_common::{Mode, ThemeId, UserId};

use super::defaults::{DEFAULT_FONT, DEFAULT_ICON_SET, DEFAULT_RADIUS, DEFAULT_SHADOW, DEFAULT_SPACING};
use super::document::ThemeDocument;
use crate::colors::parse_color;
use crate::slots::{ChartPalette, SemanticPalette, StyleKey, TokenKey};
use crate::syntax::TokenMapId;

/// Heading and body font families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typography {
    pub heading: String,
    pub body: String,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            heading: DEFAULT_FONT.into(),
            body: DEFAULT_FONT.into(),
        }
    }
}

/// Whether the current user may mutate a theme in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Owned,
    Foreign,
}

impl Ownership {
    pub fn requires_fork(self) -> bool {
        self == Ownership::Foreign
    }
}

/// A complete theme: identity, one palette per mode, chart colors and
/// mode-independent style tokens.
///
/// Every slot is populated for both modes. Partial input is completed when
/// a [`ThemeDocument`] is converted, so nothing downstream handles gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ThemeDocument", into = "ThemeDocument")]
pub struct Theme {
    pub id: ThemeId,
    pub name: String,
    pub display_name: String,
    /// `None` for presets and anonymous themes.
    pub owner: Option<UserId>,
    pub light: SemanticPalette,
    pub dark: SemanticPalette,
    pub light_charts: ChartPalette,
    pub dark_charts: ChartPalette,
    pub typography: Typography,
    /// Corner radius in rem.
    pub radius: f32,
    /// Base spacing unit in rem.
    pub spacing: f32,
    pub shadow: String,
    pub icon_set: String,
    pub token_map: TokenMapId,
}

impl Theme {
    /// A theme with the given palettes and default style tokens.
    pub fn new(name: impl Into<String>, light: SemanticPalette, dark: SemanticPalette) -> Self {
        let name = name.into();
        Self {
            id: ThemeId::new(),
            display_name: name.clone(),
            name,
            owner: None,
            light_charts: ChartPalette::from_palette(&light),
            dark_charts: ChartPalette::from_palette(&dark),
            light,
            dark,
            typography: Typography::default(),
            radius: DEFAULT_RADIUS,
            spacing: DEFAULT_SPACING,
            shadow: DEFAULT_SHADOW.into(),
            icon_set: DEFAULT_ICON_SET.into(),
            token_map: TokenMapId::default(),
        }
    }

    pub fn palette(&self, mode: Mode) -> &SemanticPalette {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    pub fn palette_mut(&mut self, mode: Mode) -> &mut SemanticPalette {
        match mode {
            Mode::Light => &mut self.light,
            Mode::Dark => &mut self.dark,
        }
    }

    pub fn charts(&self, mode: Mode) -> &ChartPalette {
        match mode {
            Mode::Light => &self.light_charts,
            Mode::Dark => &self.dark_charts,
        }
    }

    pub fn charts_mut(&mut self, mode: Mode) -> &mut ChartPalette {
        match mode {
            Mode::Light => &mut self.light_charts,
            Mode::Dark => &mut self.dark_charts,
        }
    }

    /// Textual value of a style token, as it appears in a resolved map.
    pub fn style_value(&self, key: StyleKey) -> String {
        match key {
            StyleKey::FontHeading => self.typography.heading.clone(),
            StyleKey::FontBody => self.typography.body.clone(),
            StyleKey::Radius => format_rem(self.radius),
            StyleKey::Spacing => format_rem(self.spacing),
            StyleKey::Shadow => self.shadow.clone(),
            StyleKey::IconSet => self.icon_set.clone(),
        }
    }

    /// Every token of `mode` as a flat map: the base layer of resolution.
    pub fn base_tokens(&self, mode: Mode) -> BTreeMap<TokenKey, String> {
        let mut tokens = BTreeMap::new();
        for (slot, color) in self.palette(mode).iter() {
            tokens.insert(TokenKey::Slot(slot), color.to_hex());
        }
        for (chart, color) in self.charts(mode).iter() {
            tokens.insert(TokenKey::Chart(chart), color.to_hex());
        }
        for style in StyleKey::ALL {
            tokens.insert(TokenKey::Style(style), self.style_value(style));
        }
        tokens
    }

    /// Write one token value into the theme. Color keys land in `mode`'s
    /// palette; style keys are shared by both modes.
    ///
    /// Returns `false` and leaves the theme untouched when the value does
    /// not parse for that key.
    pub fn apply_token(&mut self, mode: Mode, key: TokenKey, value: &str) -> bool {
        match key {
            TokenKey::Slot(slot) => match parse_color(value) {
                Some(color) => {
                    self.palette_mut(mode).set(slot, color);
                    true
                }
                None => false,
            },
            TokenKey::Chart(chart) => match parse_color(value) {
                Some(color) => {
                    self.charts_mut(mode).set(chart, color);
                    true
                }
                None => false,
            },
            TokenKey::Style(style) => self.apply_style(style, value),
        }
    }

    fn apply_style(&mut self, key: StyleKey, value: &str) -> bool {
        let Some(value) = normalize_style(key, value) else {
            return false;
        };
        match key {
            StyleKey::FontHeading => self.typography.heading = value,
            StyleKey::FontBody => self.typography.body = value,
            StyleKey::Radius => match parse_rem(&value) {
                Some(rem) => self.radius = rem,
                None => return false,
            },
            StyleKey::Spacing => match parse_rem(&value) {
                Some(rem) => self.spacing = rem,
                None => return false,
            },
            StyleKey::Shadow => self.shadow = value,
            StyleKey::IconSet => self.icon_set = value,
        }
        true
    }

    pub fn ownership(&self, user: &UserId) -> Ownership {
        match &self.owner {
            Some(owner) if owner == user => Ownership::Owned,
            _ => Ownership::Foreign,
        }
    }

    /// Copy this theme under a fresh identity owned by `user`.
    pub fn fork_for(&self, user: &UserId) -> Theme {
        Theme {
            id: ThemeId::new(),
            owner: Some(user.clone()),
            ..self.clone()
        }
    }
}

/// Canonical text of a style value, or `None` when it cannot be stored.
///
/// Lengths are rewritten through [`parse_rem`] and [`format_rem`], so a
/// value that normalizes here reads back identically from
/// [`Theme::style_value`].
pub fn normalize_style(key: StyleKey, value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value.chars().any(char::is_control) {
        return None;
    }
    match key {
        StyleKey::Radius | StyleKey::Spacing => parse_rem(value).map(format_rem),
        _ => Some(value.to_string()),
    }
}

/// Lowercase `[a-z0-9-]` form of a theme name, for ids and file names.
/// Runs of other characters collapse to one `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("theme");
    }
    slug
}

/// Format a rem length without trailing zeros (`0.5rem`, `1rem`).
pub fn format_rem(value: f32) -> String {
    format!("{value}rem")
}

/// Parse `0.5rem`, `8px` (at 16px per rem) or a bare number as rem.
/// Negative and non-finite lengths are rejected.
pub fn parse_rem(value: &str) -> Option<f32> {
    let value = value.trim();
    let rem = if let Some(px) = value.strip_suffix("px") {
        px.trim().parse::<f32>().ok()? / 16.0
    } else {
        value
            .strip_suffix("rem")
            .unwrap_or(value)
            .trim()
            .parse::<f32>()
            .ok()?
    };
    (rem.is_finite() && rem >= 0.0).then_some(rem)
}
