//! Built-in themes.
//!
//! Presets carry fixed ids and no owner, so they are foreign to every user
//! and any edit forks them.

use tint_common::{Color, ThemeId};

use super::types::{Theme, Typography};
use crate::slots::{Hue, PaletteSlot, SemanticPalette};
use crate::syntax::TokenMapId;

/// Built-in theme names.
pub const BUILT_IN_THEMES: &[&str] = &["flexoki", "paper", "midnight"];

/// Look up a built-in theme by name.
pub fn preset(name: &str) -> Option<Theme> {
    match name.trim().to_ascii_lowercase().as_str() {
        "flexoki" => Some(flexoki()),
        "paper" => Some(paper()),
        "midnight" => Some(midnight()),
        _ => None,
    }
}

/// Tonal input for one mode.
struct Tones {
    /// tx, tx-2, tx-3, ui, ui-2, ui-3, bg, bg-2
    neutrals: [u32; 8],
    /// pr, se, ac, ac-2, ac-3
    accents: [u32; 5],
}

/// Per hue: (darker shade, lighter shade).
type HueShades = [(u32, u32); 8];

/// Build a palette. Light palettes put the darker shade in `<hue>`; dark
/// palettes put the lighter one there, so `<hue>` always reads against
/// the palette's own background.
fn build(tones: &Tones, hues: &HueShades, light: bool) -> SemanticPalette {
    let mut palette = SemanticPalette::from_fn(|_| Color::BLACK);

    let tonal = PaletteSlot::ALL.iter().take(8);
    for (slot, hex) in tonal.zip(tones.neutrals) {
        palette.set(*slot, Color::from_u32(hex));
    }
    let accents = [
        PaletteSlot::Primary,
        PaletteSlot::Secondary,
        PaletteSlot::Accent,
        PaletteSlot::AccentMuted,
        PaletteSlot::AccentFaint,
    ];
    for (slot, hex) in accents.into_iter().zip(tones.accents) {
        palette.set(slot, Color::from_u32(hex));
    }
    for (hue, (darker, lighter)) in Hue::ALL.into_iter().zip(hues.iter().copied()) {
        let (shade, alt) = if light { (darker, lighter) } else { (lighter, darker) };
        palette.set(hue.shade(), Color::from_u32(shade));
        palette.set(hue.alt_shade(), Color::from_u32(alt));
    }
    palette
}

fn preset_theme(
    name: &str,
    display_name: &str,
    light: SemanticPalette,
    dark: SemanticPalette,
) -> Theme {
    let mut theme = Theme::new(name, light, dark);
    theme.id = ThemeId::from_string(format!("preset-{name}"));
    theme.display_name = display_name.to_string();
    theme
}

const FLEXOKI_HUES: HueShades = [
    (0xAF3029, 0xD14D41),
    (0xBC5215, 0xDA702C),
    (0xAD8301, 0xD0A215),
    (0x66800B, 0x879A39),
    (0x24837B, 0x3AA99F),
    (0x205EA6, 0x4385BE),
    (0x5E409D, 0x8B7EC8),
    (0xA02F6F, 0xCE5D97),
];

pub fn flexoki() -> Theme {
    let light = Tones {
        neutrals: [
            0x100F0F, 0x6F6E69, 0xB7B5AC, 0xE6E4D9, 0xDAD8CE, 0xCECDC3, 0xFFFCF0, 0xF2F0E5,
        ],
        accents: [0x205EA6, 0x5E409D, 0x24837B, 0x3AA99F, 0xBFE8D9],
    };
    let dark = Tones {
        neutrals: [
            0xCECDC3, 0x878580, 0x575653, 0x282726, 0x343331, 0x403E3C, 0x100F0F, 0x1C1B1A,
        ],
        accents: [0x4385BE, 0x8B7EC8, 0x3AA99F, 0x24837B, 0x164F4A],
    };
    preset_theme(
        "flexoki",
        "Flexoki",
        build(&light, &FLEXOKI_HUES, true),
        build(&dark, &FLEXOKI_HUES, false),
    )
}

const PAPER_HUES: HueShades = [
    (0xB3261E, 0xE0574F),
    (0xB85C1A, 0xE08A3C),
    (0x9A7B0A, 0xD1AD2B),
    (0x3F7A2A, 0x6FAE55),
    (0x1F7A80, 0x46A8AE),
    (0x2457A6, 0x5A8AD6),
    (0x6640A8, 0x9675D4),
    (0x9C2F74, 0xCC609F),
];

pub fn paper() -> Theme {
    let light = Tones {
        neutrals: [
            0x1A1A1A, 0x5C5C5C, 0x9E9E9E, 0xE8E8E6, 0xDDDDDB, 0xD0D0CD, 0xFFFFFF, 0xF5F5F3,
        ],
        accents: [0x1F4E8C, 0x6B4E9B, 0x2F7D6D, 0x4FA391, 0xD4ECE6],
    };
    let dark = Tones {
        neutrals: [
            0xEDEDED, 0xA3A3A3, 0x6B6B6B, 0x2A2A2A, 0x333333, 0x3D3D3D, 0x121212, 0x1C1C1C,
        ],
        accents: [0x6F9FD8, 0xA28DD0, 0x4FA391, 0x2F7D6D, 0x1F3F38],
    };
    let mut theme = preset_theme(
        "paper",
        "Paper",
        build(&light, &PAPER_HUES, true),
        build(&dark, &PAPER_HUES, false),
    );
    theme.typography = Typography {
        heading: "Source Serif 4".into(),
        body: "Inter".into(),
    };
    theme.radius = 0.25;
    theme.shadow = "none".into();
    theme.token_map = TokenMapId::Muted;
    theme
}

const MIDNIGHT_HUES: HueShades = [
    (0xDC2626, 0xF87171),
    (0xEA580C, 0xFB923C),
    (0xCA8A04, 0xFACC15),
    (0x16A34A, 0x4ADE80),
    (0x0891B2, 0x22D3EE),
    (0x2563EB, 0x60A5FA),
    (0x9333EA, 0xC084FC),
    (0xDB2777, 0xF472B6),
];

pub fn midnight() -> Theme {
    let light = Tones {
        neutrals: [
            0x0F172A, 0x475569, 0x94A3B8, 0xE2E8F0, 0xCBD5E1, 0xB6C2D1, 0xF8FAFC, 0xF1F5F9,
        ],
        accents: [0x4F46E5, 0x7C3AED, 0x0891B2, 0x22B8D6, 0xCFF4FC],
    };
    let dark = Tones {
        neutrals: [
            0xE2E8F0, 0x94A3B8, 0x64748B, 0x1E293B, 0x27344A, 0x334155, 0x0B1120, 0x111A2E,
        ],
        accents: [0x818CF8, 0xA78BFA, 0x22D3EE, 0x0891B2, 0x164E63],
    };
    let mut theme = preset_theme(
        "midnight",
        "Midnight",
        build(&light, &MIDNIGHT_HUES, true),
        build(&dark, &MIDNIGHT_HUES, false),
    );
    theme.radius = 0.75;
    theme.shadow = "0 4px 12px 0 rgb(0 0 0 / 0.25)".into();
    theme.icon_set = "phosphor".into();
    theme.token_map = TokenMapId::Vivid;
    theme
}
