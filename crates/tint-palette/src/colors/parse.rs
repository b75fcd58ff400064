//! Internal color parsing helpers.
//!
//! Handles the low-level conversion of the accepted textual formats into
//! [`Color`], [`Hsla`] or [`Oklch`] values. Not part of the public API.

use regex::Regex;
use std::sync::LazyLock;
use tint_common::Color;

use super::hsl::Hsla;
use super::oklch::Oklch;

/// Regex for hex color: #RGB, #RGBA, #RRGGBB, or #RRGGBBAA.
pub(crate) static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

/// Regex for rgb()/rgba() with an optional float or int alpha.
pub(crate) static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
    )
    .unwrap()
});

/// Regex for hsl()/hsla(), comma or space separated, `%` optional.
pub(crate) static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hsla?\(\s*(-?[0-9]*\.?[0-9]+)(?:deg)?\s*[,\s]\s*([0-9]*\.?[0-9]+)%?\s*[,\s]\s*([0-9]*\.?[0-9]+)%?\s*(?:[,/]\s*([0-9]*\.?[0-9]+)(%)?\s*)?\)$",
    )
    .unwrap()
});

/// Regex for the bare `H S% L%` triplet used by CSS-variable themes.
pub(crate) static BARE_HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?[0-9]*\.?[0-9]+)(?:deg)?\s+([0-9]*\.?[0-9]+)%\s+([0-9]*\.?[0-9]+)%$").unwrap()
});

/// Regex for oklch(L C H [/ A]); L may be 0-1 or a percentage.
pub(crate) static OKLCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^oklch\(\s*([0-9]*\.?[0-9]+)(%)?\s+([0-9]*\.?[0-9]+)\s+(-?[0-9]*\.?[0-9]+)(?:deg)?\s*(?:/\s*([0-9]*\.?[0-9]+)(%)?\s*)?\)$",
    )
    .unwrap()
});

/// Parse a hex color string (#RGB, #RGBA, #RRGGBB, or #RRGGBBAA).
pub(super) fn parse_hex(s: &str) -> Option<Color> {
    if !HEX_RE.is_match(s) {
        return None;
    }
    let hex = s.strip_prefix('#')?;
    match hex.len() {
        3 | 4 => {
            // Expand #RGB(A) to #RRGGBB(AA)
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
            let r = digit(0)?;
            let g = digit(1)?;
            let b = digit(2)?;
            let a = if hex.len() == 4 { digit(3)? } else { 15 };
            Some(Color::from_rgba(r * 17, g * 17, b * 17, a * 17))
        }
        6 | 8 => Color::from_hex(s),
        _ => None,
    }
}

/// Parse an `rgb(r,g,b)` or `rgba(r,g,b,a)` color string.
/// Alpha with a decimal point is 0.0-1.0 (CSS convention), otherwise 0-255.
pub(super) fn parse_rgb(s: &str) -> Option<Color> {
    let caps = RGB_RE.captures(s)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;

    let a = match caps.get(4) {
        None => 255,
        Some(m) if m.as_str().contains('.') => {
            let a_float: f64 = m.as_str().parse().ok()?;
            if !(0.0..=1.0).contains(&a_float) {
                return None;
            }
            (a_float * 255.0).round() as u8
        }
        Some(m) => {
            let a_int: u32 = m.as_str().parse().ok()?;
            if a_int > 255 {
                return None;
            }
            a_int as u8
        }
    };

    Some(Color::from_rgba(r, g, b, a))
}

/// Parse `hsl()`/`hsla()` or a bare `H S% L%` triplet.
pub(super) fn parse_hsl(s: &str) -> Option<Hsla> {
    if let Some(caps) = HSL_RE.captures(s) {
        let h: f64 = caps[1].parse().ok()?;
        let sat: f64 = caps[2].parse().ok()?;
        let l: f64 = caps[3].parse().ok()?;
        let a = match caps.get(4) {
            None => 1.0,
            Some(m) => {
                let v: f64 = m.as_str().parse().ok()?;
                if caps.get(5).is_some() {
                    v / 100.0
                } else {
                    v
                }
            }
        };
        return Some(Hsla::new(h, sat, l, a));
    }

    let caps = BARE_HSL_RE.captures(s)?;
    let h: f64 = caps[1].parse().ok()?;
    let sat: f64 = caps[2].parse().ok()?;
    let l: f64 = caps[3].parse().ok()?;
    Some(Hsla::new(h, sat, l, 1.0))
}

/// Parse an `oklch()` color string.
pub(super) fn parse_oklch(s: &str) -> Option<Oklch> {
    let caps = OKLCH_RE.captures(s)?;
    let mut l: f64 = caps[1].parse().ok()?;
    if caps.get(2).is_some() {
        l /= 100.0;
    }
    let c: f64 = caps[3].parse().ok()?;
    let h: f64 = caps[4].parse().ok()?;
    let alpha = match caps.get(5) {
        None => 1.0,
        Some(m) => {
            let v: f64 = m.as_str().parse().ok()?;
            if caps.get(6).is_some() {
                v / 100.0
            } else {
                v
            }
        }
    };
    Some(Oklch::new(l, c, h, alpha))
}
