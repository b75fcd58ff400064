//! Neovim highlight groups.

use tint_palette::syntax::SyntaxRole as R;
use tint_palette::syntax::SyntaxRole;
use tint_palette::PaletteSlot;
use tint_palette::PaletteSlot as P;

/// Where a highlight attribute takes its color from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Slot(PaletteSlot),
    /// Resolved through the theme's token map.
    Role(SyntaxRole),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub name: &'static str,
    pub fg: Option<Source>,
    pub bg: Option<Source>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

const fn group(name: &'static str, fg: Option<Source>, bg: Option<Source>) -> Group {
    Group {
        name,
        fg,
        bg,
        bold: false,
        italic: false,
        underline: false,
    }
}

const fn ui(name: &'static str, fg: PaletteSlot, bg: PaletteSlot) -> Group {
    group(name, Some(Source::Slot(fg)), Some(Source::Slot(bg)))
}

const fn fg(name: &'static str, slot: PaletteSlot) -> Group {
    group(name, Some(Source::Slot(slot)), None)
}

const fn bg(name: &'static str, slot: PaletteSlot) -> Group {
    group(name, None, Some(Source::Slot(slot)))
}

const fn syn(name: &'static str, role: SyntaxRole) -> Group {
    group(name, Some(Source::Role(role)), None)
}

const fn italic(g: Group) -> Group {
    Group { italic: true, ..g }
}

const fn bold(g: Group) -> Group {
    Group { bold: true, ..g }
}

const fn underline(g: Group) -> Group {
    Group { underline: true, ..g }
}

pub const GROUPS: &[Group] = &[
    // editor
    ui("Normal", P::Text, P::Background),
    ui("NormalFloat", P::Text, P::BackgroundSecondary),
    ui("FloatBorder", P::Interface, P::BackgroundSecondary),
    bg("CursorLine", P::BackgroundSecondary),
    bg("ColorColumn", P::BackgroundSecondary),
    fg("LineNr", P::TextFaint),
    bold(fg("CursorLineNr", P::Text)),
    bg("Visual", P::InterfaceActive),
    ui("Search", P::Text, P::Yellow2),
    ui("IncSearch", P::Background, P::Orange),
    ui("Pmenu", P::Text, P::BackgroundSecondary),
    ui("PmenuSel", P::Text, P::InterfaceHover),
    ui("StatusLine", P::Text, P::BackgroundSecondary),
    ui("StatusLineNC", P::TextMuted, P::BackgroundSecondary),
    fg("WinSeparator", P::Interface),
    fg("NonText", P::TextFaint),
    bold(fg("MatchParen", P::Accent)),
    fg("Directory", P::Blue),
    fg("Title", P::Primary),
    // diagnostics
    fg("DiagnosticError", P::Red),
    fg("DiagnosticWarn", P::Yellow),
    fg("DiagnosticInfo", P::Blue),
    fg("DiagnosticHint", P::Cyan),
    fg("DiffAdd", P::Green),
    fg("DiffDelete", P::Red),
    fg("DiffChange", P::Yellow),
    // syntax
    italic(syn("Comment", R::Comment)),
    syn("Constant", R::Constant),
    syn("String", R::String),
    syn("Character", R::String),
    syn("Number", R::Number),
    syn("Boolean", R::Boolean),
    syn("Float", R::Number),
    syn("Identifier", R::Variable),
    syn("Function", R::Function),
    syn("Statement", R::Keyword),
    syn("Conditional", R::ControlFlow),
    syn("Repeat", R::ControlFlow),
    syn("Label", R::Label),
    syn("Operator", R::Operator),
    syn("Keyword", R::Keyword),
    syn("PreProc", R::Macro),
    syn("Macro", R::Macro),
    syn("Type", R::Type),
    syn("StorageClass", R::Storage),
    syn("Structure", R::Struct),
    syn("Special", R::StringEscape),
    syn("Tag", R::Tag),
    syn("Delimiter", R::Punctuation),
    underline(syn("Underlined", R::Link)),
    syn("Error", R::Invalid),
    // treesitter
    syn("@variable", R::Variable),
    syn("@variable.parameter", R::Parameter),
    syn("@variable.member", R::Property),
    syn("@variable.builtin", R::Builtin),
    syn("@property", R::Property),
    syn("@module", R::Namespace),
    syn("@type.builtin", R::Builtin),
    syn("@function.method", R::Method),
    syn("@function.macro", R::Macro),
    syn("@attribute", R::Attribute),
    syn("@tag.attribute", R::TagAttribute),
    syn("@string.regexp", R::Regexp),
    syn("@string.escape", R::StringEscape),
    italic(syn("@comment.documentation", R::DocComment)),
    bold(syn("@markup.heading", R::Heading)),
    italic(syn("@markup.italic", R::Emphasis)),
    bold(syn("@markup.strong", R::Strong)),
    syn("@markup.quote", R::Quote),
    syn("@markup.raw", R::InlineCode),
    underline(syn("@markup.link", R::Link)),
    syn("@diff.plus", R::Inserted),
    syn("@diff.minus", R::Deleted),
    syn("@diff.delta", R::Changed),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn group_names_are_unique() {
        let names: HashSet<_> = GROUPS.iter().map(|g| g.name).collect();
        assert_eq!(names.len(), GROUPS.len());
    }

    #[test]
    fn every_group_sets_a_color() {
        assert!(GROUPS.iter().all(|g| g.fg.is_some() || g.bg.is_some()));
    }
}
