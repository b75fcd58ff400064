//! The closed set of output targets and the generator seam.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tint_common::{KeyError, Mode, RenderError};

use crate::generators::{
    alacritty::{AlacrittyToml, AlacrittyYaml},
    css::Css,
    ghostty::Ghostty,
    gimp::Gimp,
    kitty::Kitty,
    neovim::Neovim,
    vscode::{Vscode, VscodeVariant},
    windows_terminal::WindowsTerminal,
    xresources::Xresources,
};
use crate::input::GeneratorInput;

/// A target generator: a pure `generate` step producing a typed artifact,
/// then `serialize` into the target's concrete syntax.
///
/// Both steps must be deterministic. Identical input yields byte-identical
/// output.
pub trait Generator {
    type Artifact;

    fn target(&self) -> Target;

    fn generate(&self, input: &GeneratorInput) -> Self::Artifact;

    fn serialize(&self, artifact: &Self::Artifact) -> Result<String, RenderError>;

    fn render(&self, input: &GeneratorInput) -> Result<String, RenderError> {
        let artifact = self.generate(input);
        self.serialize(&artifact)
    }
}

/// Shorthand for generators whose serializer can fail.
pub(crate) fn serialize_error(target: Target, err: impl fmt::Display) -> RenderError {
    RenderError::Serialize {
        target: target.slug().to_string(),
        message: err.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    Vscode,
    VscodeLegacy,
    VscodeClassic,
    AlacrittyYaml,
    AlacrittyToml,
    Ghostty,
    Kitty,
    WindowsTerminal,
    Gimp,
    Xresources,
    Neovim,
    Css,
}

impl Target {
    pub const ALL: [Target; 12] = [
        Target::Vscode,
        Target::VscodeLegacy,
        Target::VscodeClassic,
        Target::AlacrittyYaml,
        Target::AlacrittyToml,
        Target::Ghostty,
        Target::Kitty,
        Target::WindowsTerminal,
        Target::Gimp,
        Target::Xresources,
        Target::Neovim,
        Target::Css,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Target::Vscode => "vscode",
            Target::VscodeLegacy => "vscode-legacy",
            Target::VscodeClassic => "vscode-classic",
            Target::AlacrittyYaml => "alacritty-yaml",
            Target::AlacrittyToml => "alacritty-toml",
            Target::Ghostty => "ghostty",
            Target::Kitty => "kitty",
            Target::WindowsTerminal => "windows-terminal",
            Target::Gimp => "gimp",
            Target::Xresources => "xresources",
            Target::Neovim => "neovim",
            Target::Css => "css",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Target::Vscode => "VS Code color theme",
            Target::VscodeLegacy => "VS Code color theme (legacy mapping)",
            Target::VscodeClassic => "VS Code color theme (classic mapping)",
            Target::AlacrittyYaml => "Alacritty colors (YAML)",
            Target::AlacrittyToml => "Alacritty colors (TOML)",
            Target::Ghostty => "Ghostty theme",
            Target::Kitty => "kitty theme",
            Target::WindowsTerminal => "Windows Terminal color scheme",
            Target::Gimp => "GIMP palette",
            Target::Xresources => "X resources",
            Target::Neovim => "Neovim colorscheme (Lua)",
            Target::Css => "CSS custom properties",
        }
    }

    /// Targets whose single artifact covers both modes.
    pub fn covers_both_modes(self) -> bool {
        self == Target::Css
    }

    /// File name for an exported artifact.
    pub fn file_name(self, theme: &str, mode: Mode) -> String {
        match self {
            Target::Vscode | Target::VscodeLegacy | Target::VscodeClassic => {
                let suffix = match self {
                    Target::VscodeLegacy => "-legacy",
                    Target::VscodeClassic => "-classic",
                    _ => "",
                };
                format!("{theme}-{mode}{suffix}-color-theme.json")
            }
            Target::AlacrittyYaml => format!("{theme}-{mode}.yml"),
            Target::AlacrittyToml => format!("{theme}-{mode}.toml"),
            // Ghostty theme files carry no extension
            Target::Ghostty => format!("{theme}-{mode}"),
            Target::Kitty => format!("{theme}-{mode}.conf"),
            Target::WindowsTerminal => format!("{theme}-{mode}.json"),
            Target::Gimp => format!("{theme}-{mode}.gpl"),
            Target::Xresources => format!("{theme}-{mode}.Xresources"),
            Target::Neovim => format!("{theme}-{mode}.lua"),
            Target::Css => format!("{theme}.css"),
        }
    }

    /// Generate and serialize this target's artifact.
    pub fn render(self, input: &GeneratorInput) -> Result<String, RenderError> {
        match self {
            Target::Vscode => Vscode(VscodeVariant::Current).render(input),
            Target::VscodeLegacy => Vscode(VscodeVariant::Legacy).render(input),
            Target::VscodeClassic => Vscode(VscodeVariant::Classic).render(input),
            Target::AlacrittyYaml => AlacrittyYaml.render(input),
            Target::AlacrittyToml => AlacrittyToml.render(input),
            Target::Ghostty => Ghostty.render(input),
            Target::Kitty => Kitty.render(input),
            Target::WindowsTerminal => WindowsTerminal.render(input),
            Target::Gimp => Gimp.render(input),
            Target::Xresources => Xresources.render(input),
            Target::Neovim => Neovim.render(input),
            Target::Css => Css.render(input),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Target {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| KeyError::UnknownTarget(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_round_trip() {
        for target in Target::ALL {
            assert_eq!(target.slug().parse::<Target>().unwrap(), target);
        }
    }

    #[test]
    fn serde_uses_slugs() {
        for target in Target::ALL {
            let json = serde_json::to_string(&target).unwrap();
            assert_eq!(json, format!("\"{}\"", target.slug()));
        }
    }

    #[test]
    fn unknown_target_is_key_error() {
        assert_eq!(
            "sublime".parse::<Target>().unwrap_err(),
            KeyError::UnknownTarget("sublime".into())
        );
    }

    #[test]
    fn file_names_are_unique_per_mode() {
        let names: HashSet<_> = Target::ALL
            .iter()
            .flat_map(|t| Mode::ALL.map(|m| t.file_name("demo", m)))
            .collect();
        // css shares one file across modes
        assert_eq!(names.len(), Target::ALL.len() * 2 - 1);
        assert_eq!(Target::Gimp.file_name("demo", Mode::Dark), "demo-dark.gpl");
        assert_eq!(
            Target::VscodeLegacy.file_name("demo", Mode::Light),
            "demo-light-legacy-color-theme.json"
        );
    }
}
