//! Alacritty color configuration, in the old YAML and the current TOML
//! format. Both serialize the same artifact.

use serde::Serialize;
use tint_common::{Color, RenderError};

use crate::input::GeneratorInput;
use crate::tables::ansi::{ansi_colors, TerminalChrome};
use crate::target::{serialize_error, Generator, Target};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlacrittyConfig {
    pub colors: AlacrittyColors,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlacrittyColors {
    pub primary: Primary,
    pub cursor: Pair,
    pub selection: Pair,
    pub normal: AnsiSet,
    pub bright: AnsiSet,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Primary {
    pub background: String,
    pub foreground: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pair {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnsiSet {
    pub black: String,
    pub red: String,
    pub green: String,
    pub yellow: String,
    pub blue: String,
    pub magenta: String,
    pub cyan: String,
    pub white: String,
}

impl AnsiSet {
    fn from_colors(c: &[Color]) -> Self {
        Self {
            black: c[0].to_hex_opaque(),
            red: c[1].to_hex_opaque(),
            green: c[2].to_hex_opaque(),
            yellow: c[3].to_hex_opaque(),
            blue: c[4].to_hex_opaque(),
            magenta: c[5].to_hex_opaque(),
            cyan: c[6].to_hex_opaque(),
            white: c[7].to_hex_opaque(),
        }
    }
}

fn generate(input: &GeneratorInput) -> AlacrittyConfig {
    let palette = input.palette();
    let chrome = TerminalChrome::from_palette(palette);
    let ansi = ansi_colors(palette, input.mode);

    AlacrittyConfig {
        colors: AlacrittyColors {
            primary: Primary {
                background: chrome.background.to_hex_opaque(),
                foreground: chrome.foreground.to_hex_opaque(),
            },
            cursor: Pair {
                text: chrome.cursor_text.to_hex_opaque(),
                cursor: Some(chrome.cursor.to_hex_opaque()),
                background: None,
            },
            selection: Pair {
                text: chrome.selection_foreground.to_hex_opaque(),
                cursor: None,
                background: Some(chrome.selection_background.to_hex_opaque()),
            },
            normal: AnsiSet::from_colors(&ansi[..8]),
            bright: AnsiSet::from_colors(&ansi[8..]),
        },
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AlacrittyYaml;

impl Generator for AlacrittyYaml {
    type Artifact = AlacrittyConfig;

    fn target(&self) -> Target {
        Target::AlacrittyYaml
    }

    fn generate(&self, input: &GeneratorInput) -> AlacrittyConfig {
        generate(input)
    }

    fn serialize(&self, artifact: &AlacrittyConfig) -> Result<String, RenderError> {
        serde_yaml::to_string(artifact).map_err(|e| serialize_error(self.target(), e))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AlacrittyToml;

impl Generator for AlacrittyToml {
    type Artifact = AlacrittyConfig;

    fn target(&self) -> Target {
        Target::AlacrittyToml
    }

    fn generate(&self, input: &GeneratorInput) -> AlacrittyConfig {
        generate(input)
    }

    fn serialize(&self, artifact: &AlacrittyConfig) -> Result<String, RenderError> {
        toml::to_string(artifact).map_err(|e| serialize_error(self.target(), e))
    }
}
