//! HSL(A) representation and sRGB conversion.

use std::fmt;
use tint_common::Color;

/// Hue in degrees [0, 360), saturation and lightness in percent [0, 100],
/// alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Bring every channel into its valid range. Non-finite values become 0
    /// (alpha becomes 1).
    pub fn clamped(self) -> Self {
        let finite = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };
        Self {
            h: finite(self.h, 0.0).rem_euclid(360.0),
            s: finite(self.s, 0.0).clamp(0.0, 100.0),
            l: finite(self.l, 0.0).clamp(0.0, 100.0),
            a: finite(self.a, 1.0).clamp(0.0, 1.0),
        }
    }

    pub fn from_color(color: Color) -> Self {
        let r = f64::from(color.r) / 255.0;
        let g = f64::from(color.g) / 255.0;
        let b = f64::from(color.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        let (h, s) = if delta == 0.0 {
            (0.0, 0.0)
        } else {
            let s = delta / (1.0 - (2.0 * l - 1.0).abs());
            let h = if max == r {
                60.0 * ((g - b) / delta).rem_euclid(6.0)
            } else if max == g {
                60.0 * ((b - r) / delta + 2.0)
            } else {
                60.0 * ((r - g) / delta + 4.0)
            };
            (h, s)
        };

        Self {
            h: h.rem_euclid(360.0),
            s: s * 100.0,
            l: l * 100.0,
            a: f64::from(color.a) / 255.0,
        }
    }

    pub fn to_color(self) -> Color {
        let Hsla { h, s, l, a } = self.clamped();
        let s = s / 100.0;
        let l = l / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hp = h / 60.0;
        let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
        let (r1, g1, b1) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;

        Color::from_rgba(
            to_channel(r1 + m),
            to_channel(g1 + m),
            to_channel(b1 + m),
            to_channel(a),
        )
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.clamped();
        if c.a < 1.0 {
            write!(
                f,
                "hsla({:.1}, {:.1}%, {:.1}%, {:.2})",
                c.h, c.s, c.l, c.a
            )
        } else {
            write!(f, "hsl({:.1}, {:.1}%, {:.1}%)", c.h, c.s, c.l)
        }
    }
}

/// Scale a unit-interval value to a clamped 8-bit channel.
pub(crate) fn to_channel(v: f64) -> u8 {
    if !v.is_finite() {
        return 0;
    }
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
