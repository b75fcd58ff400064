use std::fmt;
use std::str::FromStr;

use tint_common::KeyError;

use super::role::SyntaxRole;
use super::role::SyntaxRole as R;
use crate::slots::PaletteSlot;
use crate::slots::PaletteSlot as P;

/// Which role-to-slot skin a theme uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenMapId {
    /// Hue-forward assignment; the default.
    #[default]
    Classic,
    /// Mostly text tiers with accents reserved for literals and keywords.
    Muted,
    /// Spreads roles across all eight hues.
    Vivid,
}

impl TokenMapId {
    pub const ALL: [TokenMapId; 3] = [TokenMapId::Classic, TokenMapId::Muted, TokenMapId::Vivid];

    pub fn as_str(self) -> &'static str {
        match self {
            TokenMapId::Classic => "classic",
            TokenMapId::Muted => "muted",
            TokenMapId::Vivid => "vivid",
        }
    }

    pub fn table(self) -> &'static [(SyntaxRole, PaletteSlot)] {
        match self {
            TokenMapId::Classic => CLASSIC,
            TokenMapId::Muted => MUTED,
            TokenMapId::Vivid => VIVID,
        }
    }

    /// Slot bound to `role`, or `None` when the table has no entry.
    pub fn slot_for(self, role: SyntaxRole) -> Option<PaletteSlot> {
        self.table()
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, slot)| *slot)
    }
}

impl fmt::Display for TokenMapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenMapId {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(TokenMapId::Classic),
            "muted" => Ok(TokenMapId::Muted),
            "vivid" => Ok(TokenMapId::Vivid),
            other => Err(KeyError::UnknownTokenMap(other.to_string())),
        }
    }
}

serde_as_str!(TokenMapId);

const CLASSIC: &[(SyntaxRole, PaletteSlot)] = &[
    (R::Class, P::Yellow),
    (R::Interface, P::Yellow),
    (R::Struct, P::Yellow),
    (R::Enum, P::Yellow),
    (R::Type, P::Yellow),
    (R::TypeParameter, P::Orange),
    (R::Function, P::Orange),
    (R::Method, P::Orange),
    (R::Macro, P::Magenta),
    (R::Keyword, P::Green),
    (R::ControlFlow, P::Green),
    (R::Storage, P::Blue),
    (R::Operator, P::TextMuted),
    (R::String, P::Cyan),
    (R::StringEscape, P::Yellow),
    (R::Regexp, P::Magenta),
    (R::Number, P::Purple),
    (R::Boolean, P::Purple),
    (R::Constant, P::Yellow),
    (R::Comment, P::TextFaint),
    (R::DocComment, P::TextMuted),
    (R::Variable, P::Text),
    (R::Parameter, P::Text),
    (R::Property, P::Blue),
    (R::Attribute, P::Magenta),
    (R::Tag, P::Blue),
    (R::TagAttribute, P::Yellow),
    (R::Namespace, P::Red),
    (R::Label, P::Red),
    (R::Punctuation, P::TextMuted),
    (R::Heading, P::Orange),
    (R::Link, P::Cyan),
    (R::Emphasis, P::Text),
    (R::Strong, P::Text),
    (R::Quote, P::TextMuted),
    (R::InlineCode, P::Cyan),
    (R::Inserted, P::Green),
    (R::Deleted, P::Red),
    (R::Changed, P::Yellow),
    (R::Invalid, P::Red),
    (R::Decorator, P::Magenta),
    (R::Builtin, P::Blue),
];

const MUTED: &[(SyntaxRole, PaletteSlot)] = &[
    (R::Class, P::Text),
    (R::Interface, P::Text),
    (R::Struct, P::Text),
    (R::Enum, P::Text),
    (R::Type, P::Text),
    (R::TypeParameter, P::TextMuted),
    (R::Function, P::Secondary),
    (R::Method, P::Secondary),
    (R::Macro, P::Secondary),
    (R::Keyword, P::Primary),
    (R::ControlFlow, P::Primary),
    (R::Storage, P::Primary),
    (R::Operator, P::TextMuted),
    (R::String, P::Accent),
    (R::StringEscape, P::AccentMuted),
    (R::Regexp, P::Accent),
    (R::Number, P::AccentMuted),
    (R::Boolean, P::AccentMuted),
    (R::Constant, P::AccentMuted),
    (R::Comment, P::TextFaint),
    (R::DocComment, P::TextFaint),
    (R::Variable, P::Text),
    (R::Parameter, P::TextMuted),
    (R::Property, P::TextMuted),
    (R::Attribute, P::TextMuted),
    (R::Tag, P::Primary),
    (R::TagAttribute, P::TextMuted),
    (R::Namespace, P::TextMuted),
    (R::Label, P::TextMuted),
    (R::Punctuation, P::TextFaint),
    (R::Heading, P::Primary),
    (R::Link, P::Accent),
    (R::Emphasis, P::Text),
    (R::Strong, P::Text),
    (R::Quote, P::TextMuted),
    (R::InlineCode, P::Accent),
    (R::Inserted, P::Green),
    (R::Deleted, P::Red),
    (R::Changed, P::Yellow),
    (R::Invalid, P::Red),
    (R::Decorator, P::TextMuted),
    (R::Builtin, P::Secondary),
];

const VIVID: &[(SyntaxRole, PaletteSlot)] = &[
    (R::Class, P::Magenta),
    (R::Interface, P::Magenta),
    (R::Struct, P::Magenta),
    (R::Enum, P::Purple),
    (R::Type, P::Yellow),
    (R::TypeParameter, P::Yellow),
    (R::Function, P::Blue),
    (R::Method, P::Blue),
    (R::Macro, P::Cyan),
    (R::Keyword, P::Red),
    (R::ControlFlow, P::Red),
    (R::Storage, P::Purple),
    (R::Operator, P::Cyan),
    (R::String, P::Green),
    (R::StringEscape, P::Cyan),
    (R::Regexp, P::Orange),
    (R::Number, P::Orange),
    (R::Boolean, P::Orange),
    (R::Constant, P::Orange),
    (R::Comment, P::TextFaint),
    (R::DocComment, P::TextMuted),
    (R::Variable, P::Text),
    (R::Parameter, P::Yellow),
    (R::Property, P::Cyan),
    (R::Attribute, P::Yellow),
    (R::Tag, P::Red),
    (R::TagAttribute, P::Orange),
    (R::Namespace, P::Purple),
    (R::Label, P::Magenta),
    (R::Punctuation, P::TextMuted),
    (R::Heading, P::Magenta),
    (R::Link, P::Blue),
    (R::Emphasis, P::Yellow),
    (R::Strong, P::Orange),
    (R::Quote, P::TextMuted),
    (R::InlineCode, P::Green),
    (R::Inserted, P::Green),
    (R::Deleted, P::Red),
    (R::Changed, P::Orange),
    (R::Invalid, P::Red),
    (R::Decorator, P::Cyan),
    (R::Builtin, P::Purple),
];
