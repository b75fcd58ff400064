//! GIMP palette (`.gpl`) files listing every slot of one mode.

use tint_common::{Color, RenderError};
use tint_palette::PaletteSlot;

use crate::input::GeneratorInput;
use crate::tables::labels::label;
use crate::target::{Generator, Target};

const COLUMNS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GimpPalette {
    pub name: String,
    pub entries: Vec<(PaletteSlot, Color)>,
}

#[derive(Debug, Clone, Copy)]
pub struct Gimp;

impl Generator for Gimp {
    type Artifact = GimpPalette;

    fn target(&self) -> Target {
        Target::Gimp
    }

    fn generate(&self, input: &GeneratorInput) -> GimpPalette {
        GimpPalette {
            name: input.title(),
            entries: input.palette().iter().collect(),
        }
    }

    fn serialize(&self, palette: &GimpPalette) -> Result<String, RenderError> {
        let mut out = format!("GIMP Palette\nName: {}\nColumns: {COLUMNS}\n#\n", palette.name);
        for (slot, color) in &palette.entries {
            out.push_str(&format!(
                "{:>3} {:>3} {:>3}\t{} ({})\n",
                color.r,
                color.g,
                color.b,
                slot.abbreviation(),
                label(*slot)
            ));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_common::Mode;
    use tint_palette::theme::presets;

    #[test]
    fn header_and_one_line_per_slot() {
        let input = GeneratorInput::from_theme(&presets::flexoki(), Mode::Light);
        let text = Gimp.render(&input).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "GIMP Palette");
        assert_eq!(lines[1], "Name: flexoki (light)");
        assert_eq!(lines[2], "Columns: 8");
        assert_eq!(lines.len(), 4 + PaletteSlot::COUNT);
    }

    #[test]
    fn entries_carry_channels_and_labels() {
        let input = GeneratorInput::from_theme(&presets::flexoki(), Mode::Light);
        let text = Gimp.render(&input).unwrap();
        let red = input.palette().get(PaletteSlot::Red);
        let expected = format!("{:>3} {:>3} {:>3}\tre (Red)", red.r, red.g, red.b);
        assert!(text.lines().any(|l| l == expected), "{text}");
    }
}
