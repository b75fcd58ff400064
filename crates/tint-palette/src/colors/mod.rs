//! Color parsing, normalization and color-space conversion.
//!
//! Supports `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, `rgb()`/`rgba()`,
//! `hsl()`/`hsla()`, bare `H S% L%` triplets and `oklch()`.
//!
//! Malformed input never fails hard: the lenient conversions fall back to
//! black and [`normalize_color`] reports when it had to fall back, leaving
//! the warning to the caller.

mod hsl;
mod oklch;
mod parse;

#[cfg(test)]
mod tests;

pub use hsl::Hsla;
pub use oklch::Oklch;

use tint_common::Color;

use parse::{parse_hex, parse_hsl, parse_oklch, parse_rgb};

/// Neutral fallback for unparseable input.
pub const FALLBACK_COLOR: Color = Color::BLACK;

/// Parse any supported color string into a [`Color`].
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if s.starts_with('#') {
        return parse_hex(s);
    }

    let lower = s.to_ascii_lowercase();
    if lower.starts_with("rgb") {
        return parse_rgb(&lower);
    }
    if lower.starts_with("oklch") {
        return parse_oklch(&lower).map(Oklch::to_color);
    }

    // hsl(), hsla() and the bare triplet form
    parse_hsl(&lower).map(Hsla::to_color)
}

/// Outcome of [`normalize_color`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Canonical lowercase hex (`#rrggbb`, or `#rrggbbaa` when translucent).
    pub value: String,
    /// True when the input was malformed and `value` is a fallback.
    pub fell_back: bool,
}

/// Normalize user color input to canonical hex.
///
/// Malformed input resolves to `previous` when that is itself a valid color,
/// otherwise to [`FALLBACK_COLOR`].
pub fn normalize_color(input: &str, previous: Option<&str>) -> Normalized {
    if let Some(color) = parse_color(input) {
        return Normalized {
            value: color.to_hex(),
            fell_back: false,
        };
    }

    let fallback = previous
        .and_then(parse_color)
        .unwrap_or(FALLBACK_COLOR);
    Normalized {
        value: fallback.to_hex(),
        fell_back: true,
    }
}

pub fn try_hex_to_hsla(hex: &str) -> Option<Hsla> {
    parse_color(hex).map(Hsla::from_color)
}

/// Convert a color string to HSLA, falling back to black.
pub fn hex_to_hsla(hex: &str) -> Hsla {
    try_hex_to_hsla(hex).unwrap_or_else(|| Hsla::from_color(FALLBACK_COLOR))
}

/// Convert HSLA to hex. Channels are clamped before conversion.
pub fn hsla_to_hex(hsla: Hsla) -> String {
    hsla.to_color().to_hex()
}

pub fn try_hex_to_oklch(hex: &str) -> Option<Oklch> {
    parse_color(hex).map(Oklch::from_color)
}

/// Convert a color string to OKLCH, falling back to black.
pub fn hex_to_oklch(hex: &str) -> Oklch {
    try_hex_to_oklch(hex).unwrap_or_else(|| Oklch::from_color(FALLBACK_COLOR))
}

/// Convert OKLCH to hex, clipping out-of-gamut channels.
pub fn oklch_to_hex(oklch: Oklch) -> String {
    oklch.to_color().to_hex()
}
