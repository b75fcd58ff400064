use std::fmt;
use std::str::FromStr;

use tint_common::KeyError;

/// One named color role of a single-mode palette.
///
/// The set is closed. Each slot has a descriptive key (`text-muted`) and a
/// short abbreviation (`tx-2`); both parse to the same slot.
///
/// Hue accents come in pairs. `<hue>` holds the shade that reads against
/// the palette's own background and `<hue>-2` the opposite-contrast shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PaletteSlot {
    Text,
    TextMuted,
    TextFaint,
    Interface,
    InterfaceHover,
    InterfaceActive,
    Background,
    BackgroundSecondary,
    Primary,
    Secondary,
    Accent,
    AccentMuted,
    AccentFaint,
    Red,
    Red2,
    Orange,
    Orange2,
    Yellow,
    Yellow2,
    Green,
    Green2,
    Cyan,
    Cyan2,
    Blue,
    Blue2,
    Purple,
    Purple2,
    Magenta,
    Magenta2,
}

/// (key, abbreviation), indexed by discriminant.
const NAMES: [(&str, &str); PaletteSlot::COUNT] = [
    ("text", "tx"),
    ("text-muted", "tx-2"),
    ("text-faint", "tx-3"),
    ("interface", "ui"),
    ("interface-hover", "ui-2"),
    ("interface-active", "ui-3"),
    ("background", "bg"),
    ("background-secondary", "bg-2"),
    ("primary", "pr"),
    ("secondary", "se"),
    ("accent", "ac"),
    ("accent-muted", "ac-2"),
    ("accent-faint", "ac-3"),
    ("red", "re"),
    ("red-2", "re-2"),
    ("orange", "or"),
    ("orange-2", "or-2"),
    ("yellow", "ye"),
    ("yellow-2", "ye-2"),
    ("green", "gr"),
    ("green-2", "gr-2"),
    ("cyan", "cy"),
    ("cyan-2", "cy-2"),
    ("blue", "bl"),
    ("blue-2", "bl-2"),
    ("purple", "pu"),
    ("purple-2", "pu-2"),
    ("magenta", "ma"),
    ("magenta-2", "ma-2"),
];

impl PaletteSlot {
    pub const COUNT: usize = 29;

    pub const ALL: [PaletteSlot; Self::COUNT] = [
        PaletteSlot::Text,
        PaletteSlot::TextMuted,
        PaletteSlot::TextFaint,
        PaletteSlot::Interface,
        PaletteSlot::InterfaceHover,
        PaletteSlot::InterfaceActive,
        PaletteSlot::Background,
        PaletteSlot::BackgroundSecondary,
        PaletteSlot::Primary,
        PaletteSlot::Secondary,
        PaletteSlot::Accent,
        PaletteSlot::AccentMuted,
        PaletteSlot::AccentFaint,
        PaletteSlot::Red,
        PaletteSlot::Red2,
        PaletteSlot::Orange,
        PaletteSlot::Orange2,
        PaletteSlot::Yellow,
        PaletteSlot::Yellow2,
        PaletteSlot::Green,
        PaletteSlot::Green2,
        PaletteSlot::Cyan,
        PaletteSlot::Cyan2,
        PaletteSlot::Blue,
        PaletteSlot::Blue2,
        PaletteSlot::Purple,
        PaletteSlot::Purple2,
        PaletteSlot::Magenta,
        PaletteSlot::Magenta2,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn key(self) -> &'static str {
        NAMES[self.index()].0
    }

    pub fn abbreviation(self) -> &'static str {
        NAMES[self.index()].1
    }

    /// Look up a slot by its descriptive key or its abbreviation.
    pub fn from_key(key: &str) -> Result<Self, KeyError> {
        let key = key.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|slot| {
                let (name, abbr) = NAMES[slot.index()];
                name.eq_ignore_ascii_case(key) || abbr.eq_ignore_ascii_case(key)
            })
            .ok_or_else(|| KeyError::UnknownSlot(key.to_string()))
    }

    /// The hue this slot belongs to, if it is one of the hue accents.
    pub fn hue(self) -> Option<Hue> {
        Hue::ALL
            .iter()
            .copied()
            .find(|hue| hue.shade() == self || hue.alt_shade() == self)
    }
}

impl fmt::Display for PaletteSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PaletteSlot {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

serde_as_str!(PaletteSlot);

/// The eight hue accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Hue {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Magenta,
}

impl Hue {
    pub const ALL: [Hue; 8] = [
        Hue::Red,
        Hue::Orange,
        Hue::Yellow,
        Hue::Green,
        Hue::Cyan,
        Hue::Blue,
        Hue::Purple,
        Hue::Magenta,
    ];

    pub fn as_str(self) -> &'static str {
        self.shade().key()
    }

    /// Shade that reads against the palette's own background.
    pub fn shade(self) -> PaletteSlot {
        match self {
            Hue::Red => PaletteSlot::Red,
            Hue::Orange => PaletteSlot::Orange,
            Hue::Yellow => PaletteSlot::Yellow,
            Hue::Green => PaletteSlot::Green,
            Hue::Cyan => PaletteSlot::Cyan,
            Hue::Blue => PaletteSlot::Blue,
            Hue::Purple => PaletteSlot::Purple,
            Hue::Magenta => PaletteSlot::Magenta,
        }
    }

    /// Opposite-contrast shade.
    pub fn alt_shade(self) -> PaletteSlot {
        match self {
            Hue::Red => PaletteSlot::Red2,
            Hue::Orange => PaletteSlot::Orange2,
            Hue::Yellow => PaletteSlot::Yellow2,
            Hue::Green => PaletteSlot::Green2,
            Hue::Cyan => PaletteSlot::Cyan2,
            Hue::Blue => PaletteSlot::Blue2,
            Hue::Purple => PaletteSlot::Purple2,
            Hue::Magenta => PaletteSlot::Magenta2,
        }
    }
}

impl fmt::Display for Hue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
