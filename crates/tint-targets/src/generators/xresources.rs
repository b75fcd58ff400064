//! X resources: one `#define` per slot, then the terminal resources
//! expressed through those names.

use tint_common::{Color, RenderError};
use tint_palette::PaletteSlot;

use crate::input::GeneratorInput;
use crate::tables::ansi::ansi_slots;
use crate::target::{Generator, Target};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XresourcesFile {
    pub title: String,
    pub defines: Vec<(PaletteSlot, Color)>,
    pub resources: Vec<(String, PaletteSlot)>,
}

/// Preprocessor-safe name for a slot: `tx-2` becomes `tx_2`.
fn define_name(slot: PaletteSlot) -> String {
    slot.abbreviation().replace('-', "_")
}

#[derive(Debug, Clone, Copy)]
pub struct Xresources;

impl Generator for Xresources {
    type Artifact = XresourcesFile;

    fn target(&self) -> Target {
        Target::Xresources
    }

    fn generate(&self, input: &GeneratorInput) -> XresourcesFile {
        let mut resources: Vec<(String, PaletteSlot)> = vec![
            ("*.foreground".into(), PaletteSlot::Text),
            ("*.background".into(), PaletteSlot::Background),
            ("*.cursorColor".into(), PaletteSlot::Text),
        ];
        resources.extend(
            ansi_slots(input.mode)
                .iter()
                .enumerate()
                .map(|(i, slot)| (format!("*.color{i}"), *slot)),
        );

        XresourcesFile {
            title: input.title(),
            defines: input.palette().iter().collect(),
            resources,
        }
    }

    fn serialize(&self, file: &XresourcesFile) -> Result<String, RenderError> {
        let mut out = format!("! {}\n\n", file.title);
        for (slot, color) in &file.defines {
            out.push_str(&format!(
                "#define {} {}\n",
                define_name(*slot),
                color.to_hex_opaque()
            ));
        }
        out.push('\n');
        for (resource, slot) in &file.resources {
            out.push_str(&format!("{resource}: {}\n", define_name(*slot)));
        }
        Ok(out)
    }
}
