//! Human-readable labels for palette abbreviations.

use tint_palette::PaletteSlot;

use tint_palette::PaletteSlot as P;

pub const LABELS: [(PaletteSlot, &str); PaletteSlot::COUNT] = [
    (P::Text, "Text"),
    (P::TextMuted, "Muted Text"),
    (P::TextFaint, "Faint Text"),
    (P::Interface, "Interface"),
    (P::InterfaceHover, "Hovered Interface"),
    (P::InterfaceActive, "Active Interface"),
    (P::Background, "Background"),
    (P::BackgroundSecondary, "Secondary Background"),
    (P::Primary, "Primary"),
    (P::Secondary, "Secondary"),
    (P::Accent, "Accent"),
    (P::AccentMuted, "Muted Accent"),
    (P::AccentFaint, "Faint Accent"),
    (P::Red, "Red"),
    (P::Red2, "Red Alt"),
    (P::Orange, "Orange"),
    (P::Orange2, "Orange Alt"),
    (P::Yellow, "Yellow"),
    (P::Yellow2, "Yellow Alt"),
    (P::Green, "Green"),
    (P::Green2, "Green Alt"),
    (P::Cyan, "Cyan"),
    (P::Cyan2, "Cyan Alt"),
    (P::Blue, "Blue"),
    (P::Blue2, "Blue Alt"),
    (P::Purple, "Purple"),
    (P::Purple2, "Purple Alt"),
    (P::Magenta, "Magenta"),
    (P::Magenta2, "Magenta Alt"),
];

/// Label for a slot's abbreviation, e.g. `tx-2` -> `Muted Text`.
pub fn label(slot: PaletteSlot) -> &'static str {
    LABELS[slot.index()].1
}
