//! OKLCH representation and sRGB conversion.
//!
//! Goes sRGB -> linear sRGB -> LMS -> Oklab -> OKLCH using Björn Ottosson's
//! matrices. Everything runs in `f64` so hex round-trips stay exact.

use std::fmt;
use tint_common::Color;

use super::hsl::to_channel;

/// Lightness in [0, 1], chroma >= 0, hue in degrees [0, 360), alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
    pub alpha: f64,
}

impl Oklch {
    pub fn new(l: f64, c: f64, h: f64, alpha: f64) -> Self {
        Self { l, c, h, alpha }
    }

    pub fn clamped(self) -> Self {
        let finite = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };
        Self {
            l: finite(self.l, 0.0).clamp(0.0, 1.0),
            c: finite(self.c, 0.0).max(0.0),
            h: finite(self.h, 0.0).rem_euclid(360.0),
            alpha: finite(self.alpha, 1.0).clamp(0.0, 1.0),
        }
    }

    pub fn from_color(color: Color) -> Self {
        let r = srgb_to_linear(f64::from(color.r) / 255.0);
        let g = srgb_to_linear(f64::from(color.g) / 255.0);
        let b = srgb_to_linear(f64::from(color.b) / 255.0);
        let (l, a, b_ok) = linear_srgb_to_oklab(r, g, b);

        let c = a.hypot(b_ok);
        let h = if c < 1e-8 {
            // Achromatic: hue is undefined
            0.0
        } else {
            b_ok.atan2(a).to_degrees().rem_euclid(360.0)
        };

        Self {
            l,
            c,
            h,
            alpha: f64::from(color.a) / 255.0,
        }
    }

    /// Convert to sRGB. Out-of-gamut results are clipped per channel.
    pub fn to_color(self) -> Color {
        let Oklch { l, c, h, alpha } = self.clamped();
        let h_rad = h.to_radians();
        let (a, b) = (c * h_rad.cos(), c * h_rad.sin());
        let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);

        Color::from_rgba(
            to_channel(linear_to_srgb(lr)),
            to_channel(linear_to_srgb(lg)),
            to_channel(linear_to_srgb(lb)),
            to_channel(alpha),
        )
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.clamped();
        if c.alpha < 1.0 {
            write!(f, "oklch({:.4} {:.4} {:.2} / {:.2})", c.l, c.c, c.h, c.alpha)
        } else {
            write!(f, "oklch({:.4} {:.4} {:.2})", c.l, c.c, c.h)
        }
    }
}

fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l_ = l_ok + 0.396_337_777_4 * a + 0.215_803_757_3 * b;
    let m_ = l_ok - 0.105_561_345_8 * a - 0.063_854_172_8 * b;
    let s_ = l_ok - 0.089_484_177_5 * a - 1.291_485_548_0 * b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    (
        4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s,
        -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s,
        -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701_0 * s,
    )
}

fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let l = 0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b;
    let m = 0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b;
    let s = 0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    (
        0.210_454_255_3 * l_ + 0.793_617_785_0 * m_ - 0.004_072_046_8 * s_,
        1.977_998_495_1 * l_ - 2.428_592_205_0 * m_ + 0.450_593_709_9 * s_,
        0.025_904_037_1 * l_ + 0.782_771_766_2 * m_ - 0.808_675_766_0 * s_,
    )
}

fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
