//! Random theme derivation.
//!
//! Light and dark palettes come from separate draws: each mode picks its
//! own neutral tint, brand hue and accent jitter.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tint_common::{Color, Mode};
use tracing::debug;

use super::types::Theme;
use crate::colors::Hsla;
use crate::slots::{Hue, PaletteSlot, SemanticPalette};

/// Anchor hue angle for each accent, in [`Hue::ALL`] order.
const HUE_ANGLES: [f64; 8] = [25.0, 45.0, 60.0, 120.0, 180.0, 220.0, 275.0, 325.0];

/// Lightness per tonal slot (tx, tx-2, tx-3, ui, ui-2, ui-3, bg, bg-2).
const LIGHT_NEUTRALS: [f64; 8] = [10.0, 40.0, 65.0, 90.0, 86.0, 82.0, 98.0, 95.0];
const DARK_NEUTRALS: [f64; 8] = [88.0, 62.0, 40.0, 16.0, 20.0, 24.0, 6.0, 10.0];

/// Generate a random theme. The same seed always yields the same palettes.
pub fn random_theme(seed: Option<u64>) -> Theme {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let light = random_palette(&mut rng, Mode::Light);
    let dark = random_palette(&mut rng, Mode::Dark);
    let name = format!("random-{:08x}", rng.gen::<u32>());
    debug!("derived random theme {name}");

    let mut theme = Theme::new(name, light, dark);
    theme.display_name = "Random".into();
    theme
}

fn hsl(h: f64, s: f64, l: f64) -> Color {
    Hsla::new(h, s, l, 1.0).to_color()
}

/// One mode's palette from its own draws.
fn random_palette(rng: &mut impl Rng, mode: Mode) -> SemanticPalette {
    let light = mode == Mode::Light;
    let neutral_hue: f64 = rng.gen_range(0.0..360.0);
    let neutral_sat: f64 = rng.gen_range(2.0..12.0);
    let brand_hue: f64 = rng.gen_range(0.0..360.0);
    let brand_sat: f64 = rng.gen_range(55.0..80.0);
    let secondary_hue = brand_hue + rng.gen_range(60.0_f64..150.0);
    let accent_hue = brand_hue + rng.gen_range(150.0_f64..210.0);

    let (strong, soft, faint) = if light {
        (40.0, 58.0, 90.0)
    } else {
        (65.0, 45.0, 20.0)
    };

    let mut palette = SemanticPalette::from_fn(|_| Color::BLACK);

    let lightness = if light { LIGHT_NEUTRALS } else { DARK_NEUTRALS };
    for (slot, l) in PaletteSlot::ALL.iter().take(8).zip(lightness) {
        palette.set(*slot, hsl(neutral_hue, neutral_sat, l));
    }

    palette.set(PaletteSlot::Primary, hsl(brand_hue, brand_sat, strong));
    palette.set(PaletteSlot::Secondary, hsl(secondary_hue, brand_sat, strong));
    palette.set(PaletteSlot::Accent, hsl(accent_hue, brand_sat, strong));
    palette.set(PaletteSlot::AccentMuted, hsl(accent_hue, brand_sat, soft));
    palette.set(PaletteSlot::AccentFaint, hsl(accent_hue, brand_sat * 0.5, faint));

    let (shade_l, alt_l) = if light { (38.0, 58.0) } else { (62.0, 40.0) };
    for (hue, angle) in Hue::ALL.into_iter().zip(HUE_ANGLES) {
        let h = angle + rng.gen_range(-10.0_f64..10.0);
        let s: f64 = rng.gen_range(55.0..85.0);
        palette.set(hue.shade(), hsl(h, s, shade_l));
        palette.set(hue.alt_shade(), hsl(h, s, alt_l));
    }

    palette
}
