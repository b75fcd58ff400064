//! VS Code mapping tables: workbench color keys and TextMate scopes.
//!
//! The three chrome tables track the editor's key set over time. They share
//! the scope table, which binds each syntax role to one or more scopes.

use tint_palette::syntax::SyntaxRole;
use tint_palette::syntax::SyntaxRole as R;
use tint_palette::PaletteSlot;
use tint_palette::PaletteSlot as P;

pub const CHROME: &[(&str, PaletteSlot)] = &[
    ("activityBar.background", P::BackgroundSecondary),
    ("activityBar.foreground", P::Text),
    ("activityBar.inactiveForeground", P::TextFaint),
    ("activityBarBadge.background", P::Accent),
    ("activityBarBadge.foreground", P::Background),
    ("badge.background", P::Accent),
    ("badge.foreground", P::Background),
    ("button.background", P::Primary),
    ("button.foreground", P::Background),
    ("button.hoverBackground", P::Secondary),
    ("dropdown.background", P::Background),
    ("dropdown.border", P::Interface),
    ("editor.background", P::Background),
    ("editor.findMatchBackground", P::Yellow2),
    ("editor.foreground", P::Text),
    ("editor.lineHighlightBackground", P::BackgroundSecondary),
    ("editor.selectionBackground", P::InterfaceActive),
    ("editor.wordHighlightBackground", P::InterfaceHover),
    ("editorBracketMatch.border", P::TextFaint),
    ("editorCursor.foreground", P::Text),
    ("editorError.foreground", P::Red),
    ("editorGroupHeader.tabsBackground", P::BackgroundSecondary),
    ("editorGutter.addedBackground", P::Green),
    ("editorGutter.deletedBackground", P::Red),
    ("editorGutter.modifiedBackground", P::Yellow),
    ("editorIndentGuide.activeBackground1", P::InterfaceActive),
    ("editorIndentGuide.background1", P::Interface),
    ("editorInfo.foreground", P::Blue),
    ("editorLineNumber.activeForeground", P::TextMuted),
    ("editorLineNumber.foreground", P::TextFaint),
    ("editorWarning.foreground", P::Yellow),
    ("editorWhitespace.foreground", P::InterfaceActive),
    ("editorWidget.background", P::BackgroundSecondary),
    ("focusBorder", P::Primary),
    ("gitDecoration.addedResourceForeground", P::Green),
    ("gitDecoration.deletedResourceForeground", P::Red),
    ("gitDecoration.modifiedResourceForeground", P::Yellow),
    ("gitDecoration.untrackedResourceForeground", P::Cyan),
    ("input.background", P::Background),
    ("input.border", P::Interface),
    ("input.foreground", P::Text),
    ("input.placeholderForeground", P::TextFaint),
    ("list.activeSelectionBackground", P::InterfaceHover),
    ("list.activeSelectionForeground", P::Text),
    ("list.hoverBackground", P::Interface),
    ("panel.background", P::BackgroundSecondary),
    ("panel.border", P::Interface),
    ("sideBar.background", P::BackgroundSecondary),
    ("sideBar.border", P::Interface),
    ("sideBar.foreground", P::TextMuted),
    ("sideBarSectionHeader.foreground", P::Text),
    ("statusBar.background", P::BackgroundSecondary),
    ("statusBar.border", P::Interface),
    ("statusBar.foreground", P::TextMuted),
    ("tab.activeBackground", P::Background),
    ("tab.activeForeground", P::Text),
    ("tab.border", P::Interface),
    ("tab.inactiveBackground", P::BackgroundSecondary),
    ("tab.inactiveForeground", P::TextMuted),
    ("terminal.background", P::Background),
    ("terminal.foreground", P::Text),
    ("textLink.foreground", P::Cyan),
    ("titleBar.activeBackground", P::BackgroundSecondary),
    ("titleBar.activeForeground", P::Text),
    ("titleBar.inactiveForeground", P::TextMuted),
];

/// Earlier mapping: flat sidebar and a primary-colored status bar.
pub const LEGACY_CHROME: &[(&str, PaletteSlot)] = &[
    ("activityBar.background", P::Background),
    ("activityBar.foreground", P::Text),
    ("badge.background", P::Primary),
    ("badge.foreground", P::Background),
    ("button.background", P::Primary),
    ("button.foreground", P::Background),
    ("editor.background", P::Background),
    ("editor.foreground", P::Text),
    ("editor.lineHighlightBackground", P::BackgroundSecondary),
    ("editor.selectionBackground", P::Interface),
    ("editorCursor.foreground", P::Primary),
    ("editorError.foreground", P::Red),
    ("editorIndentGuide.background", P::Interface),
    ("editorLineNumber.activeForeground", P::Text),
    ("editorLineNumber.foreground", P::TextFaint),
    ("editorWarning.foreground", P::Yellow),
    ("focusBorder", P::Primary),
    ("list.activeSelectionBackground", P::Interface),
    ("list.hoverBackground", P::BackgroundSecondary),
    ("panel.background", P::Background),
    ("sideBar.background", P::Background),
    ("sideBar.foreground", P::TextMuted),
    ("statusBar.background", P::Primary),
    ("statusBar.foreground", P::Background),
    ("tab.activeBackground", P::Background),
    ("tab.activeForeground", P::Text),
    ("tab.inactiveBackground", P::BackgroundSecondary),
    ("tab.inactiveForeground", P::TextMuted),
    ("terminal.background", P::Background),
    ("terminal.foreground", P::Text),
    ("titleBar.activeBackground", P::Background),
    ("titleBar.activeForeground", P::Text),
];

/// Oldest mapping: accent-driven cursor and selection, no terminal keys.
pub const CLASSIC_CHROME: &[(&str, PaletteSlot)] = &[
    ("activityBar.background", P::BackgroundSecondary),
    ("activityBar.foreground", P::TextMuted),
    ("editor.background", P::Background),
    ("editor.foreground", P::Text),
    ("editor.lineHighlightBackground", P::Interface),
    ("editor.selectionBackground", P::AccentFaint),
    ("editorCursor.foreground", P::Accent),
    ("editorIndentGuide.background", P::InterfaceHover),
    ("editorLineNumber.foreground", P::TextFaint),
    ("sideBar.background", P::BackgroundSecondary),
    ("sideBar.foreground", P::TextMuted),
    ("statusBar.background", P::InterfaceHover),
    ("statusBar.foreground", P::Text),
    ("tab.activeBackground", P::Background),
    ("tab.inactiveBackground", P::BackgroundSecondary),
    ("titleBar.activeBackground", P::BackgroundSecondary),
];

/// Terminal ANSI key names, in ANSI index order.
pub const TERMINAL_ANSI_KEYS: [&str; 16] = [
    "terminal.ansiBlack",
    "terminal.ansiRed",
    "terminal.ansiGreen",
    "terminal.ansiYellow",
    "terminal.ansiBlue",
    "terminal.ansiMagenta",
    "terminal.ansiCyan",
    "terminal.ansiWhite",
    "terminal.ansiBrightBlack",
    "terminal.ansiBrightRed",
    "terminal.ansiBrightGreen",
    "terminal.ansiBrightYellow",
    "terminal.ansiBrightBlue",
    "terminal.ansiBrightMagenta",
    "terminal.ansiBrightCyan",
    "terminal.ansiBrightWhite",
];

/// TextMate scopes per role. Several scopes may map to one role.
pub const SCOPES: &[(SyntaxRole, &[&str])] = &[
    (R::Class, &["entity.name.class", "entity.other.inherited-class"]),
    (R::Interface, &["entity.name.type.interface", "entity.name.type.trait"]),
    (R::Struct, &["entity.name.type.struct", "storage.type.struct"]),
    (R::Enum, &["entity.name.type.enum", "variable.other.enummember"]),
    (R::Type, &["entity.name.type", "support.type", "support.class"]),
    (R::TypeParameter, &["entity.name.type.parameter", "variable.type.parameter"]),
    (R::Function, &["entity.name.function", "support.function"]),
    (R::Method, &["entity.name.function.member", "meta.method-call entity.name.function"]),
    (R::Macro, &["entity.name.function.macro", "support.function.macro"]),
    (R::Keyword, &["keyword", "keyword.other"]),
    (R::ControlFlow, &["keyword.control", "keyword.control.flow"]),
    (R::Storage, &["storage", "storage.type", "storage.modifier"]),
    (R::Operator, &["keyword.operator"]),
    (R::String, &["string", "string.quoted"]),
    (R::StringEscape, &["constant.character.escape", "constant.other.placeholder"]),
    (R::Regexp, &["string.regexp"]),
    (R::Number, &["constant.numeric"]),
    (R::Boolean, &["constant.language.boolean"]),
    (R::Constant, &["constant", "constant.language", "variable.other.constant"]),
    (R::Comment, &["comment", "punctuation.definition.comment"]),
    (R::DocComment, &["comment.block.documentation", "comment.line.documentation"]),
    (R::Variable, &["variable", "variable.other"]),
    (R::Parameter, &["variable.parameter"]),
    (R::Property, &["variable.other.property", "support.variable.property", "meta.object-literal.key"]),
    (R::Attribute, &["meta.attribute", "entity.other.attribute"]),
    (R::Tag, &["entity.name.tag"]),
    (R::TagAttribute, &["entity.other.attribute-name"]),
    (R::Namespace, &["entity.name.namespace", "entity.name.module"]),
    (R::Label, &["entity.name.label", "punctuation.definition.label"]),
    (R::Punctuation, &["punctuation", "meta.brace"]),
    (R::Heading, &["markup.heading", "entity.name.section"]),
    (R::Link, &["markup.underline.link", "string.other.link"]),
    (R::Emphasis, &["markup.italic"]),
    (R::Strong, &["markup.bold"]),
    (R::Quote, &["markup.quote"]),
    (R::InlineCode, &["markup.inline.raw", "markup.raw"]),
    (R::Inserted, &["markup.inserted"]),
    (R::Deleted, &["markup.deleted"]),
    (R::Changed, &["markup.changed"]),
    (R::Invalid, &["invalid", "invalid.illegal"]),
    (R::Decorator, &["meta.decorator", "punctuation.decorator"]),
    (R::Builtin, &["support.function.builtin", "variable.language", "support.constant"]),
];

/// Semantic token types for the current mapping.
pub const SEMANTIC_TOKENS: &[(&str, SyntaxRole)] = &[
    ("class", R::Class),
    ("decorator", R::Decorator),
    ("enum", R::Enum),
    ("enumMember", R::Constant),
    ("function", R::Function),
    ("interface", R::Interface),
    ("keyword", R::Keyword),
    ("macro", R::Macro),
    ("method", R::Method),
    ("namespace", R::Namespace),
    ("number", R::Number),
    ("operator", R::Operator),
    ("parameter", R::Parameter),
    ("property", R::Property),
    ("regexp", R::Regexp),
    ("string", R::String),
    ("struct", R::Struct),
    ("type", R::Type),
    ("typeParameter", R::TypeParameter),
    ("variable", R::Variable),
];

/// TextMate `fontStyle` for roles that carry one.
pub fn font_style(role: SyntaxRole) -> Option<&'static str> {
    match role {
        R::Comment | R::DocComment | R::Emphasis | R::Quote => Some("italic"),
        R::Strong | R::Heading => Some("bold"),
        R::Link => Some("underline"),
        R::Invalid => Some("strikethrough"),
        _ => None,
    }
}
