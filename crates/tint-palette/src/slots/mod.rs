//! Palette slots, token keys and the per-mode palettes built from them.

mod key;
mod palette;
mod slot;


pub use key::{ChartSlot, StyleKey, TokenKey};
pub use palette::{ChartPalette, SemanticPalette};
pub use slot::{Hue, PaletteSlot};
