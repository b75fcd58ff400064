use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tint_common::Color;

use super::key::ChartSlot;
use super::slot::{Hue, PaletteSlot};

/// A complete single-mode palette: exactly one color per [`PaletteSlot`].
///
/// There is no way to build a partial palette, so every consumer can read
/// any slot without a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SemanticPalette([Color; PaletteSlot::COUNT]);

impl SemanticPalette {
    pub fn from_fn(mut f: impl FnMut(PaletteSlot) -> Color) -> Self {
        let mut colors = [Color::BLACK; PaletteSlot::COUNT];
        for slot in PaletteSlot::ALL {
            colors[slot.index()] = f(slot);
        }
        Self(colors)
    }

    pub fn get(&self, slot: PaletteSlot) -> Color {
        self.0[slot.index()]
    }

    pub fn set(&mut self, slot: PaletteSlot, color: Color) {
        self.0[slot.index()] = color;
    }

    /// Lowercase hex of a slot.
    pub fn hex(&self, slot: PaletteSlot) -> String {
        self.get(slot).to_hex()
    }

    /// `(shade, alt_shade)` of a hue accent.
    pub fn hue_pair(&self, hue: Hue) -> (Color, Color) {
        (self.get(hue.shade()), self.get(hue.alt_shade()))
    }

    /// Slots and colors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (PaletteSlot, Color)> + '_ {
        PaletteSlot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }

    /// Keyed by the descriptive slot key, as stored in theme documents.
    pub fn to_key_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(slot, color)| (slot.key().to_string(), color.to_hex()))
            .collect()
    }
}

impl Serialize for SemanticPalette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PaletteSlot::COUNT))?;
        for (slot, color) in self.iter() {
            map.serialize_entry(slot.key(), &color.to_hex())?;
        }
        map.end()
    }
}

/// Five chart colors for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartPalette([Color; ChartSlot::COUNT]);

impl ChartPalette {
    pub fn new(colors: [Color; ChartSlot::COUNT]) -> Self {
        Self(colors)
    }

    /// Default chart colors drawn from a palette's hue accents.
    pub fn from_palette(palette: &SemanticPalette) -> Self {
        Self([
            palette.get(PaletteSlot::Blue),
            palette.get(PaletteSlot::Green),
            palette.get(PaletteSlot::Yellow),
            palette.get(PaletteSlot::Red),
            palette.get(PaletteSlot::Purple),
        ])
    }

    pub fn get(&self, slot: ChartSlot) -> Color {
        self.0[slot.index()]
    }

    pub fn set(&mut self, slot: ChartSlot, color: Color) {
        self.0[slot.index()] = color;
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChartSlot, Color)> + '_ {
        ChartSlot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }

    pub fn to_key_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(slot, color)| (slot.key().to_string(), color.to_hex()))
            .collect()
    }
}
