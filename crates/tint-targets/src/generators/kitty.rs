//! kitty theme files: aligned `key value` lines.

use tint_common::{Color, RenderError};

use crate::input::GeneratorInput;
use crate::tables::ansi::{ansi_colors, TerminalChrome};
use crate::target::{Generator, Target};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KittyTheme {
    pub title: String,
    pub entries: Vec<(String, Color)>,
}

#[derive(Debug, Clone, Copy)]
pub struct Kitty;

impl Generator for Kitty {
    type Artifact = KittyTheme;

    fn target(&self) -> Target {
        Target::Kitty
    }

    fn generate(&self, input: &GeneratorInput) -> KittyTheme {
        let palette = input.palette();
        let chrome = TerminalChrome::from_palette(palette);

        let mut entries: Vec<(String, Color)> = [
            ("foreground", chrome.foreground),
            ("background", chrome.background),
            ("cursor", chrome.cursor),
            ("cursor_text_color", chrome.cursor_text),
            ("selection_foreground", chrome.selection_foreground),
            ("selection_background", chrome.selection_background),
        ]
        .into_iter()
        .map(|(k, c)| (k.to_string(), c))
        .collect();

        entries.extend(
            ansi_colors(palette, input.mode)
                .into_iter()
                .enumerate()
                .map(|(i, c)| (format!("color{i}"), c)),
        );

        KittyTheme {
            title: input.title(),
            entries,
        }
    }

    fn serialize(&self, theme: &KittyTheme) -> Result<String, RenderError> {
        let width = theme.entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        let mut out = format!("## name: {}\n\n", theme.title);
        for (key, color) in &theme.entries {
            out.push_str(&format!("{key:<width$} {}\n", color.to_hex_opaque()));
        }
        Ok(out)
    }
}
