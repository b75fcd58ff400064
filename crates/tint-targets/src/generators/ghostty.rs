//! Ghostty theme files: `key = value` lines.

use std::fmt::Write;

use tint_common::{Color, RenderError};

use crate::input::GeneratorInput;
use crate::tables::ansi::{ansi_colors, TerminalChrome};
use crate::target::{Generator, Target};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GhosttyTheme {
    pub palette: [Color; 16],
    pub chrome: TerminalChrome,
}

#[derive(Debug, Clone, Copy)]
pub struct Ghostty;

impl Generator for Ghostty {
    type Artifact = GhosttyTheme;

    fn target(&self) -> Target {
        Target::Ghostty
    }

    fn generate(&self, input: &GeneratorInput) -> GhosttyTheme {
        let palette = input.palette();
        GhosttyTheme {
            palette: ansi_colors(palette, input.mode),
            chrome: TerminalChrome::from_palette(palette),
        }
    }

    fn serialize(&self, theme: &GhosttyTheme) -> Result<String, RenderError> {
        let mut out = String::new();
        for (i, color) in theme.palette.iter().enumerate() {
            let _ = writeln!(out, "palette = {i}={}", color.to_hex_opaque());
        }
        let chrome = &theme.chrome;
        for (key, color) in [
            ("background", chrome.background),
            ("foreground", chrome.foreground),
            ("cursor-color", chrome.cursor),
            ("cursor-text", chrome.cursor_text),
            ("selection-background", chrome.selection_background),
            ("selection-foreground", chrome.selection_foreground),
        ] {
            let _ = writeln!(out, "{key} = {}", color.to_hex_opaque());
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_common::Mode;
    use tint_palette::theme::presets;
    use tint_palette::PaletteSlot;

    #[test]
    fn palette_entries_are_in_index_order() {
        let input = GeneratorInput::from_theme(&presets::flexoki(), Mode::Dark);
        let text = Ghostty.render(&input).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 22);
        for (i, line) in lines[..16].iter().enumerate() {
            assert!(line.starts_with(&format!("palette = {i}=#")), "{line}");
        }
        assert_eq!(
            lines[16],
            format!("background = {}", input.hex(PaletteSlot::Background))
        );
    }
}
