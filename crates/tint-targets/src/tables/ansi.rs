//! 16-color ANSI mapping shared by every terminal target.
//!
//! Hue colors follow the palette's contrast convention: the normal slot
//! takes `<hue>` and the bright slot takes `<hue>-2`. Since a dark palette
//! stores its shades the other way round from a light one, the same rule
//! puts the lighter shade in the normal slot on dark backgrounds.
//!
//! Black and white are not hues and are picked per mode from the neutral
//! tiers.

use tint_common::{Color, Mode};
use tint_palette::{PaletteSlot, SemanticPalette};

use tint_palette::PaletteSlot as P;

/// ANSI color index names, in index order.
pub const ANSI_NAMES: [&str; 16] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "bright-black",
    "bright-red",
    "bright-green",
    "bright-yellow",
    "bright-blue",
    "bright-magenta",
    "bright-cyan",
    "bright-white",
];

const LIGHT: [PaletteSlot; 16] = [
    P::Text,
    P::Red,
    P::Green,
    P::Yellow,
    P::Blue,
    P::Magenta,
    P::Cyan,
    P::InterfaceActive,
    P::TextMuted,
    P::Red2,
    P::Green2,
    P::Yellow2,
    P::Blue2,
    P::Magenta2,
    P::Cyan2,
    P::BackgroundSecondary,
];

const DARK: [PaletteSlot; 16] = [
    P::BackgroundSecondary,
    P::Red,
    P::Green,
    P::Yellow,
    P::Blue,
    P::Magenta,
    P::Cyan,
    P::TextMuted,
    P::TextFaint,
    P::Red2,
    P::Green2,
    P::Yellow2,
    P::Blue2,
    P::Magenta2,
    P::Cyan2,
    P::Text,
];

/// Palette slot behind each ANSI index for `mode`.
pub fn ansi_slots(mode: Mode) -> &'static [PaletteSlot; 16] {
    match mode {
        Mode::Light => &LIGHT,
        Mode::Dark => &DARK,
    }
}

/// The 16 ANSI colors of a palette.
pub fn ansi_colors(palette: &SemanticPalette, mode: Mode) -> [Color; 16] {
    let slots = *ansi_slots(mode);
    slots.map(|slot| palette.get(slot))
}

/// Terminal chrome colors outside the 16-color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalChrome {
    pub foreground: Color,
    pub background: Color,
    pub cursor: Color,
    pub cursor_text: Color,
    pub selection_foreground: Color,
    pub selection_background: Color,
}

impl TerminalChrome {
    pub fn from_palette(palette: &SemanticPalette) -> Self {
        Self {
            foreground: palette.get(P::Text),
            background: palette.get(P::Background),
            cursor: palette.get(P::Text),
            cursor_text: palette.get(P::Background),
            selection_foreground: palette.get(P::Text),
            selection_background: palette.get(P::InterfaceActive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_palette::Hue;

    #[test]
    fn normal_and_bright_hues_use_shade_and_alt_shade() {
        for mode in Mode::ALL {
            let slots = ansi_slots(mode);
            for i in 1..7 {
                let hue = slots[i].hue().unwrap();
                assert_eq!(slots[i], hue.shade());
                assert_eq!(slots[i + 8], hue.alt_shade());
            }
        }
    }

    #[test]
    fn orange_and_purple_are_not_ansi_colors() {
        for mode in Mode::ALL {
            let slots = ansi_slots(mode);
            for hue in [Hue::Orange, Hue::Purple] {
                assert!(!slots.contains(&hue.shade()));
                assert!(!slots.contains(&hue.alt_shade()));
            }
        }
    }

    #[test]
    fn black_and_white_flip_between_modes() {
        assert_eq!(ansi_slots(Mode::Light)[0], P::Text);
        assert_eq!(ansi_slots(Mode::Dark)[15], P::Text);
    }
}
