use std::fmt;
use std::str::FromStr;

use tint_common::KeyError;

use super::slot::PaletteSlot;

/// One of the five chart colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChartSlot {
    Chart1,
    Chart2,
    Chart3,
    Chart4,
    Chart5,
}

impl ChartSlot {
    pub const COUNT: usize = 5;

    pub const ALL: [ChartSlot; Self::COUNT] = [
        ChartSlot::Chart1,
        ChartSlot::Chart2,
        ChartSlot::Chart3,
        ChartSlot::Chart4,
        ChartSlot::Chart5,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn key(self) -> &'static str {
        match self {
            ChartSlot::Chart1 => "chart-1",
            ChartSlot::Chart2 => "chart-2",
            ChartSlot::Chart3 => "chart-3",
            ChartSlot::Chart4 => "chart-4",
            ChartSlot::Chart5 => "chart-5",
        }
    }
}

impl fmt::Display for ChartSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ChartSlot {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|slot| slot.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| KeyError::UnknownSlot(s.to_string()))
    }
}

serde_as_str!(ChartSlot);

/// Non-color theme tokens. These are mode-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleKey {
    FontHeading,
    FontBody,
    Radius,
    Spacing,
    Shadow,
    IconSet,
}

impl StyleKey {
    pub const ALL: [StyleKey; 6] = [
        StyleKey::FontHeading,
        StyleKey::FontBody,
        StyleKey::Radius,
        StyleKey::Spacing,
        StyleKey::Shadow,
        StyleKey::IconSet,
    ];

    pub fn key(self) -> &'static str {
        match self {
            StyleKey::FontHeading => "font-heading",
            StyleKey::FontBody => "font-body",
            StyleKey::Radius => "radius",
            StyleKey::Spacing => "spacing",
            StyleKey::Shadow => "shadow",
            StyleKey::IconSet => "icon-set",
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StyleKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| KeyError::UnknownToken(s.to_string()))
    }
}

serde_as_str!(StyleKey);

/// Any key of a resolved token map.
///
/// Ordering follows declaration order (palette slots, then charts, then
/// style tokens), which keeps every map keyed by `TokenKey` in a stable
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKey {
    Slot(PaletteSlot),
    Chart(ChartSlot),
    Style(StyleKey),
}

impl TokenKey {
    /// Every token key, in map order.
    pub fn all() -> impl Iterator<Item = TokenKey> {
        PaletteSlot::ALL
            .into_iter()
            .map(TokenKey::Slot)
            .chain(ChartSlot::ALL.into_iter().map(TokenKey::Chart))
            .chain(StyleKey::ALL.into_iter().map(TokenKey::Style))
    }

    pub fn key(self) -> &'static str {
        match self {
            TokenKey::Slot(slot) => slot.key(),
            TokenKey::Chart(chart) => chart.key(),
            TokenKey::Style(style) => style.key(),
        }
    }

    /// Color keys are normalized on edit and scoped to one mode.
    pub fn is_color(self) -> bool {
        !matches!(self, TokenKey::Style(_))
    }
}

impl From<PaletteSlot> for TokenKey {
    fn from(slot: PaletteSlot) -> Self {
        TokenKey::Slot(slot)
    }
}

impl From<ChartSlot> for TokenKey {
    fn from(chart: ChartSlot) -> Self {
        TokenKey::Chart(chart)
    }
}

impl From<StyleKey> for TokenKey {
    fn from(style: StyleKey) -> Self {
        TokenKey::Style(style)
    }
}

impl fmt::Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TokenKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(slot) = PaletteSlot::from_key(s) {
            return Ok(TokenKey::Slot(slot));
        }
        if let Ok(chart) = s.parse::<ChartSlot>() {
            return Ok(TokenKey::Chart(chart));
        }
        if let Ok(style) = s.parse::<StyleKey>() {
            return Ok(TokenKey::Style(style));
        }
        Err(KeyError::UnknownToken(s.trim().to_string()))
    }
}

serde_as_str!(TokenKey);
