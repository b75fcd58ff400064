//! Neovim colorschemes as a Lua script of `nvim_set_hl` calls.

use tint_common::{Color, Mode, RenderError};
use tint_palette::PaletteSlot;

use crate::input::GeneratorInput;
use crate::tables::ansi::ansi_colors;
use crate::tables::neovim::{Source, GROUPS};
use crate::target::{Generator, Target};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub group: &'static str,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeovimScheme {
    pub name: String,
    pub mode: Mode,
    pub highlights: Vec<Highlight>,
    pub terminal: [Color; 16],
}

#[derive(Debug, Clone, Copy)]
pub struct Neovim;

impl Generator for Neovim {
    type Artifact = NeovimScheme;

    fn target(&self) -> Target {
        Target::Neovim
    }

    fn generate(&self, input: &GeneratorInput) -> NeovimScheme {
        let palette = input.palette();
        let resolve = |source: Source| match source {
            Source::Slot(slot) => palette.get(slot),
            Source::Role(role) => palette.get(input.role_slot(role, PaletteSlot::Text)),
        };

        let highlights = GROUPS
            .iter()
            .map(|g| Highlight {
                group: g.name,
                fg: g.fg.map(resolve),
                bg: g.bg.map(resolve),
                bold: g.bold,
                italic: g.italic,
                underline: g.underline,
            })
            .collect();

        NeovimScheme {
            name: format!("{}-{}", input.name, input.mode),
            mode: input.mode,
            highlights,
            terminal: ansi_colors(palette, input.mode),
        }
    }

    fn serialize(&self, scheme: &NeovimScheme) -> Result<String, RenderError> {
        let mut out = String::new();
        out.push_str("vim.cmd(\"highlight clear\")\n");
        out.push_str("if vim.fn.exists(\"syntax_on\") == 1 then\n  vim.cmd(\"syntax reset\")\nend\n");
        out.push_str(&format!("vim.o.background = \"{}\"\n", scheme.mode));
        out.push_str(&format!("vim.g.colors_name = {}\n\n", lua_string(&scheme.name)));
        out.push_str("local hl = vim.api.nvim_set_hl\n\n");

        for h in &scheme.highlights {
            let mut attrs = Vec::new();
            if let Some(fg) = h.fg {
                attrs.push(format!("fg = \"{}\"", fg.to_hex_opaque()));
            }
            if let Some(bg) = h.bg {
                attrs.push(format!("bg = \"{}\"", bg.to_hex_opaque()));
            }
            for (flag, name) in [(h.bold, "bold"), (h.italic, "italic"), (h.underline, "underline")] {
                if flag {
                    attrs.push(format!("{name} = true"));
                }
            }
            out.push_str(&format!(
                "hl(0, {}, {{ {} }})\n",
                lua_string(h.group),
                attrs.join(", ")
            ));
        }

        out.push('\n');
        for (i, color) in scheme.terminal.iter().enumerate() {
            out.push_str(&format!(
                "vim.g.terminal_color_{i} = \"{}\"\n",
                color.to_hex_opaque()
            ));
        }
        Ok(out)
    }
}

/// Double-quoted Lua string literal.
fn lua_string(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r");
    format!("\"{escaped}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_palette::theme::presets;
    use tint_palette::SyntaxRole;

    #[test]
    fn header_sets_background_and_name() {
        let input = GeneratorInput::from_theme(&presets::flexoki(), Mode::Dark);
        let text = Neovim.render(&input).unwrap();
        assert!(text.contains("vim.o.background = \"dark\"\n"));
        assert!(text.contains("vim.g.colors_name = \"flexoki-dark\"\n"));
        assert!(text.contains("vim.g.terminal_color_15 = "));
    }

    #[test]
    fn syntax_groups_follow_the_token_map() {
        let theme = presets::flexoki();
        let input = GeneratorInput::from_theme(&theme, Mode::Light);
        let slot = theme.token_map.slot_for(SyntaxRole::String).unwrap();
        let text = Neovim.render(&input).unwrap();
        let expected = format!("hl(0, \"String\", {{ fg = \"{}\" }})", input.hex(slot));
        assert!(text.contains(&expected), "{text}");
    }

    #[test]
    fn attributes_are_emitted() {
        let input = GeneratorInput::from_theme(&presets::flexoki(), Mode::Light);
        let text = Neovim.render(&input).unwrap();
        let comment = text
            .lines()
            .find(|l| l.starts_with("hl(0, \"Comment\""))
            .unwrap();
        assert!(comment.ends_with("italic = true })"));
    }

    #[test]
    fn lua_strings_are_escaped() {
        assert_eq!(lua_string("a\"b"), "\"a\\\"b\"");
        assert_eq!(lua_string("a\nb\rc"), "\"a\\nb\\rc\"");
    }
}
