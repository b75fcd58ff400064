//! Windows Terminal color scheme objects, ready to paste into the
//! `schemes` array of `settings.json`.

use serde::Serialize;
use tint_common::RenderError;

use crate::input::GeneratorInput;
use crate::tables::ansi::{ansi_colors, TerminalChrome};
use crate::target::{serialize_error, Generator, Target};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowsTerminalScheme {
    pub name: String,
    pub background: String,
    pub foreground: String,
    pub cursor_color: String,
    pub selection_background: String,
    pub black: String,
    pub red: String,
    pub green: String,
    pub yellow: String,
    pub blue: String,
    // Windows Terminal calls ANSI magenta "purple"
    pub purple: String,
    pub cyan: String,
    pub white: String,
    pub bright_black: String,
    pub bright_red: String,
    pub bright_green: String,
    pub bright_yellow: String,
    pub bright_blue: String,
    pub bright_purple: String,
    pub bright_cyan: String,
    pub bright_white: String,
}

#[derive(Debug, Clone, Copy)]
pub struct WindowsTerminal;

impl Generator for WindowsTerminal {
    type Artifact = WindowsTerminalScheme;

    fn target(&self) -> Target {
        Target::WindowsTerminal
    }

    fn generate(&self, input: &GeneratorInput) -> WindowsTerminalScheme {
        let palette = input.palette();
        let chrome = TerminalChrome::from_palette(palette);
        let [
            black,
            red,
            green,
            yellow,
            blue,
            purple,
            cyan,
            white,
            bright_black,
            bright_red,
            bright_green,
            bright_yellow,
            bright_blue,
            bright_purple,
            bright_cyan,
            bright_white,
        ] = ansi_colors(palette, input.mode).map(|color| color.to_hex_opaque());

        WindowsTerminalScheme {
            name: input.title(),
            background: chrome.background.to_hex_opaque(),
            foreground: chrome.foreground.to_hex_opaque(),
            cursor_color: chrome.cursor.to_hex_opaque(),
            selection_background: chrome.selection_background.to_hex_opaque(),
            black,
            red,
            green,
            yellow,
            blue,
            purple,
            cyan,
            white,
            bright_black,
            bright_red,
            bright_green,
            bright_yellow,
            bright_blue,
            bright_purple,
            bright_cyan,
            bright_white,
        }
    }

    fn serialize(&self, scheme: &WindowsTerminalScheme) -> Result<String, RenderError> {
        let mut out =
            serde_json::to_string_pretty(scheme).map_err(|e| serialize_error(self.target(), e))?;
        out.push('\n');
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
    fn uses_windows_terminal_key_names() {
        let input = GeneratorInput::from_theme(&presets::flexoki(), Mode::Dark);
        let json: serde_json::Value =
            serde_json::from_str(&WindowsTerminal.render(&input).unwrap()).unwrap();
        assert_eq!(json["name"], "flexoki (dark)");
        assert_eq!(json["purple"], input.hex(PaletteSlot::Magenta));
        assert_eq!(json["brightPurple"], input.hex(PaletteSlot::Magenta2));
        assert_eq!(json["cursorColor"], input.hex(PaletteSlot::Text));
        assert!(json.get("magenta").is_none());
    }
}
