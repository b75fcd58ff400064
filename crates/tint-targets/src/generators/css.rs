//! CSS custom properties covering both modes in one stylesheet.
//!
//! Light values live in `:root`, dark values in `.dark`. Style tokens do not
//! vary by mode and are only written to `:root`. Every value passes the
//! sanitizer; rejected values are replaced by a safe fallback and logged.

use tint_common::{Mode, RenderError};
use tint_palette::StyleKey;

use crate::input::GeneratorInput;
use crate::sanitize::CssValueKind;
use crate::target::{Generator, Target};

/// A CSS variable ready for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssVariable {
    /// Custom property name, e.g. `--background`.
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssBlock {
    pub selector: &'static str,
    pub variables: Vec<CssVariable>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    pub blocks: Vec<CssBlock>,
}

fn selector(mode: Mode) -> &'static str {
    match mode {
        Mode::Light => ":root",
        Mode::Dark => ".dark",
    }
}

/// Validate `value` as `kind`, falling back when it is rejected.
fn variable(name: String, value: &str, kind: CssValueKind) -> CssVariable {
    let value = match kind.validate(value) {
        Ok(()) => value.trim().to_string(),
        Err(e) => {
            tracing::warn!(
                name = %name,
                value,
                error = %e,
                "Theme variable rejected by sanitizer"
            );
            kind.fallback().to_string()
        }
    };
    CssVariable { name, value }
}

fn generate_block(input: &GeneratorInput, mode: Mode) -> CssBlock {
    let mut variables: Vec<CssVariable> = input
        .palette_for(mode)
        .iter()
        .map(|(slot, color)| {
            variable(format!("--{}", slot.key()), &color.to_hex(), CssValueKind::Color)
        })
        .collect();

    variables.extend(input.charts_for(mode).iter().map(|(slot, color)| {
        variable(format!("--{}", slot.key()), &color.to_hex(), CssValueKind::Color)
    }));

    if mode == Mode::Light {
        variables.extend(StyleKey::ALL.iter().map(|key| {
            let kind = CssValueKind::for_style(*key);
            variable(format!("--{}", key.key()), input.style.get(*key), kind)
        }));
    }

    CssBlock {
        selector: selector(mode),
        variables,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Css;

impl Generator for Css {
    type Artifact = Stylesheet;

    fn target(&self) -> Target {
        Target::Css
    }

    fn generate(&self, input: &GeneratorInput) -> Stylesheet {
        Stylesheet {
            blocks: Mode::ALL.iter().map(|m| generate_block(input, *m)).collect(),
        }
    }

    fn serialize(&self, sheet: &Stylesheet) -> Result<String, RenderError> {
        let blocks: Vec<String> = sheet
            .blocks
            .iter()
            .map(|block| {
                let mut css = format!("{} {{\n", block.selector);
                for var in &block.variables {
                    css.push_str(&format!("  {}: {};\n", var.name, var.value));
                }
                css.push('}');
                css
            })
            .collect();
        Ok(blocks.join("\n\n") + "\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_palette::theme::presets;
    use tint_palette::{ChartSlot, PaletteSlot};

    fn render(input: &GeneratorInput) -> String {
        Css.render(input).unwrap()
    }

    #[test]
    fn one_stylesheet_for_both_modes() {
        let theme = presets::flexoki();
        let light = render(&GeneratorInput::from_theme(&theme, Mode::Light));
        let dark = render(&GeneratorInput::from_theme(&theme, Mode::Dark));
        assert_eq!(light, dark);
        assert!(light.starts_with(":root {\n"));
        assert!(light.contains("\n.dark {\n"));
    }

    #[test]
    fn mode_blocks_carry_their_palette() {
        let theme = presets::flexoki();
        let sheet = Css.generate(&GeneratorInput::from_theme(&theme, Mode::Light));
        for (block, mode) in sheet.blocks.iter().zip(Mode::ALL) {
            let bg = block
                .variables
                .iter()
                .find(|v| v.name == "--background")
                .unwrap();
            assert_eq!(bg.value, theme.palette(mode).hex(PaletteSlot::Background));
            let chart = block.variables.iter().find(|v| v.name == "--chart-1").unwrap();
            assert_eq!(chart.value, theme.charts(mode).get(ChartSlot::Chart1).to_hex());
        }
    }

    #[test]
    fn style_tokens_only_in_root() {
        let text = render(&GeneratorInput::from_theme(&presets::flexoki(), Mode::Light));
        let (root, dark) = text.split_once(".dark").unwrap();
        assert!(root.contains("  --radius: 0.5rem;\n"));
        assert!(root.contains("  --font-body: Inter;\n"));
        assert!(root.contains("  --icon-set: lucide;\n"));
        assert!(!dark.contains("--radius"));
    }

    #[test]
    fn rejected_values_fall_back() {
        let mut input = GeneratorInput::from_theme(&presets::flexoki(), Mode::Light);
        input.style.set(StyleKey::FontBody, "Inter; } body { color: red".into());
        input.style.set(StyleKey::Shadow, "url(evil)".into());
        input.style.set(StyleKey::Radius, "huge".into());
        let text = render(&input);
        assert!(text.contains("  --font-body: sans-serif;\n"));
        assert!(text.contains("  --shadow: none;\n"));
        assert!(text.contains("  --radius: 0;\n"));
        assert!(!text.contains("evil"));
    }
}
