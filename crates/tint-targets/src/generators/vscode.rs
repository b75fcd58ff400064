//! VS Code color themes in three mapping variants.

use std::collections::BTreeMap;

use serde::Serialize;
use tint_common::{Mode, RenderError};
use tint_palette::syntax::SyntaxRole;
use tint_palette::PaletteSlot;

use crate::input::GeneratorInput;
use crate::tables::ansi::ansi_colors;
use crate::tables::vscode::{
    font_style, CHROME, CLASSIC_CHROME, LEGACY_CHROME, SCOPES, SEMANTIC_TOKENS,
    TERMINAL_ANSI_KEYS,
};
use crate::target::{serialize_error, Generator, Target};

const SCHEMA: &str = "vscode://schemas/color-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VscodeVariant {
    /// Full workbench keys, semantic tokens, terminal ANSI.
    Current,
    /// Smaller key set with terminal ANSI and no semantic tokens.
    Legacy,
    /// Minimal key set; scopes joined into one selector string.
    Classic,
}

#[derive(Debug, Clone, Copy)]
pub struct Vscode(pub VscodeVariant);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VscodeTheme {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(rename = "semanticHighlighting", skip_serializing_if = "Option::is_none")]
    pub semantic_highlighting: Option<bool>,
    pub colors: BTreeMap<String, String>,
    #[serde(rename = "tokenColors")]
    pub token_colors: Vec<TokenColor>,
    #[serde(rename = "semanticTokenColors", skip_serializing_if = "Option::is_none")]
    pub semantic_token_colors: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenColor {
    pub name: String,
    pub scope: Scope,
    pub settings: TokenSettings,
}

/// Classic themes use a comma-joined selector, newer ones an array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scope {
    List(Vec<String>),
    Joined(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenSettings {
    pub foreground: String,
    #[serde(rename = "fontStyle", skip_serializing_if = "Option::is_none")]
    pub font_style: Option<&'static str>,
}

impl Vscode {
    fn chrome(&self) -> &'static [(&'static str, PaletteSlot)] {
        match self.0 {
            VscodeVariant::Current => CHROME,
            VscodeVariant::Legacy => LEGACY_CHROME,
            VscodeVariant::Classic => CLASSIC_CHROME,
        }
    }

    fn has_terminal_ansi(&self) -> bool {
        self.0 != VscodeVariant::Classic
    }
}

impl Generator for Vscode {
    type Artifact = VscodeTheme;

    fn target(&self) -> Target {
        match self.0 {
            VscodeVariant::Current => Target::Vscode,
            VscodeVariant::Legacy => Target::VscodeLegacy,
            VscodeVariant::Classic => Target::VscodeClassic,
        }
    }

    fn generate(&self, input: &GeneratorInput) -> VscodeTheme {
        let palette = input.palette();

        let mut colors: BTreeMap<String, String> = self
            .chrome()
            .iter()
            .map(|(key, slot)| (key.to_string(), palette.hex(*slot)))
            .collect();

        if self.has_terminal_ansi() {
            let ansi = ansi_colors(palette, input.mode);
            for (key, color) in TERMINAL_ANSI_KEYS.iter().zip(ansi) {
                colors.insert(key.to_string(), color.to_hex());
            }
        }

        // Roles missing from the token map render as plain text.
        let role_hex = |role: SyntaxRole| input.hex(input.role_slot(role, PaletteSlot::Text));

        let token_colors = SCOPES
            .iter()
            .map(|(role, scopes)| TokenColor {
                name: role.key().to_string(),
                scope: match self.0 {
                    VscodeVariant::Classic => Scope::Joined(scopes.join(", ")),
                    _ => Scope::List(scopes.iter().map(|s| s.to_string()).collect()),
                },
                settings: TokenSettings {
                    foreground: role_hex(*role),
                    font_style: font_style(*role),
                },
            })
            .collect();

        let semantic_token_colors = (self.0 == VscodeVariant::Current).then(|| {
            SEMANTIC_TOKENS
                .iter()
                .map(|(token, role)| (token.to_string(), role_hex(*role)))
                .collect()
        });

        VscodeTheme {
            schema: SCHEMA,
            name: input.title(),
            kind: match input.mode {
                Mode::Light => "light",
                Mode::Dark => "dark",
            },
            semantic_highlighting: semantic_token_colors.as_ref().map(|_| true),
            colors,
            token_colors,
            semantic_token_colors,
        }
    }

    fn serialize(&self, artifact: &VscodeTheme) -> Result<String, RenderError> {
        let mut out = serde_json::to_string_pretty(artifact)
            .map_err(|e| serialize_error(self.target(), e))?;
        out.push('\n');
        Ok(out)
    }
}
