//! Defaults and completion of partial theme input.
//!
//! A theme document may name any subset of slots. Completion starts from a
//! complete base palette and overlays the valid entries, so a generator
//! never sees a missing slot.

use std::collections::BTreeMap;

use tint_common::{KeyError, Mode};
use tracing::warn;

use crate::colors::parse_color;
use crate::slots::{ChartPalette, ChartSlot, PaletteSlot, SemanticPalette};

pub const DEFAULT_THEME: &str = "flexoki";
pub const DEFAULT_FONT: &str = "Inter";
pub const DEFAULT_RADIUS: f32 = 0.5;
pub const DEFAULT_SPACING: f32 = 0.25;
pub const DEFAULT_SHADOW: &str = "0 1px 3px 0 rgb(0 0 0 / 0.1)";
pub const DEFAULT_ICON_SET: &str = "lucide";

/// Overlay `entries` on `base`.
///
/// Unknown slot keys are an error. Colors that fail to parse keep the base
/// value and are logged.
pub fn complete_palette(
    base: &SemanticPalette,
    entries: &BTreeMap<String, String>,
    mode: Mode,
) -> Result<SemanticPalette, KeyError> {
    let mut palette = *base;
    for (key, value) in entries {
        let slot: PaletteSlot = key.parse()?;
        match parse_color(value) {
            Some(color) => palette.set(slot, color),
            None => warn!("{mode} slot '{slot}': invalid color '{value}', keeping default"),
        }
    }
    Ok(palette)
}

/// Chart counterpart of [`complete_palette`].
pub fn complete_charts(
    base: &ChartPalette,
    entries: &BTreeMap<String, String>,
    mode: Mode,
) -> Result<ChartPalette, KeyError> {
    let mut charts = *base;
    for (key, value) in entries {
        let slot: ChartSlot = key.parse()?;
        match parse_color(value) {
            Some(color) => charts.set(slot, color),
            None => warn!("{mode} chart '{slot}': invalid color '{value}', keeping default"),
        }
    }
    Ok(charts)
}

/// A non-negative finite length, or `default` with a warning.
pub fn length_or(name: &str, value: Option<f32>, default: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        Some(v) => {
            warn!("invalid {name} {v}, using {default}");
            default
        }
        None => default,
    }
}

/// A non-blank string, or `default`.
pub fn text_or(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
