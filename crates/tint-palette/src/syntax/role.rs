use std::fmt;
use std::str::FromStr;

use tint_common::KeyError;

/// A syntax-highlighting role shared by every editor-style target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SyntaxRole {
    Class,
    Interface,
    Struct,
    Enum,
    Type,
    TypeParameter,
    Function,
    Method,
    Macro,
    Keyword,
    ControlFlow,
    Storage,
    Operator,
    String,
    StringEscape,
    Regexp,
    Number,
    Boolean,
    Constant,
    Comment,
    DocComment,
    Variable,
    Parameter,
    Property,
    Attribute,
    Tag,
    TagAttribute,
    Namespace,
    Label,
    Punctuation,
    Heading,
    Link,
    Emphasis,
    Strong,
    Quote,
    InlineCode,
    Inserted,
    Deleted,
    Changed,
    Invalid,
    Decorator,
    Builtin,
}

impl SyntaxRole {
    pub const COUNT: usize = 42;

    pub const ALL: [SyntaxRole; Self::COUNT] = [
        SyntaxRole::Class,
        SyntaxRole::Interface,
        SyntaxRole::Struct,
        SyntaxRole::Enum,
        SyntaxRole::Type,
        SyntaxRole::TypeParameter,
        SyntaxRole::Function,
        SyntaxRole::Method,
        SyntaxRole::Macro,
        SyntaxRole::Keyword,
        SyntaxRole::ControlFlow,
        SyntaxRole::Storage,
        SyntaxRole::Operator,
        SyntaxRole::String,
        SyntaxRole::StringEscape,
        SyntaxRole::Regexp,
        SyntaxRole::Number,
        SyntaxRole::Boolean,
        SyntaxRole::Constant,
        SyntaxRole::Comment,
        SyntaxRole::DocComment,
        SyntaxRole::Variable,
        SyntaxRole::Parameter,
        SyntaxRole::Property,
        SyntaxRole::Attribute,
        SyntaxRole::Tag,
        SyntaxRole::TagAttribute,
        SyntaxRole::Namespace,
        SyntaxRole::Label,
        SyntaxRole::Punctuation,
        SyntaxRole::Heading,
        SyntaxRole::Link,
        SyntaxRole::Emphasis,
        SyntaxRole::Strong,
        SyntaxRole::Quote,
        SyntaxRole::InlineCode,
        SyntaxRole::Inserted,
        SyntaxRole::Deleted,
        SyntaxRole::Changed,
        SyntaxRole::Invalid,
        SyntaxRole::Decorator,
        SyntaxRole::Builtin,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SyntaxRole::Class => "class",
            SyntaxRole::Interface => "interface",
            SyntaxRole::Struct => "struct",
            SyntaxRole::Enum => "enum",
            SyntaxRole::Type => "type",
            SyntaxRole::TypeParameter => "type-parameter",
            SyntaxRole::Function => "function",
            SyntaxRole::Method => "method",
            SyntaxRole::Macro => "macro",
            SyntaxRole::Keyword => "keyword",
            SyntaxRole::ControlFlow => "control-flow",
            SyntaxRole::Storage => "storage",
            SyntaxRole::Operator => "operator",
            SyntaxRole::String => "string",
            SyntaxRole::StringEscape => "string-escape",
            SyntaxRole::Regexp => "regexp",
            SyntaxRole::Number => "number",
            SyntaxRole::Boolean => "boolean",
            SyntaxRole::Constant => "constant",
            SyntaxRole::Comment => "comment",
            SyntaxRole::DocComment => "doc-comment",
            SyntaxRole::Variable => "variable",
            SyntaxRole::Parameter => "parameter",
            SyntaxRole::Property => "property",
            SyntaxRole::Attribute => "attribute",
            SyntaxRole::Tag => "tag",
            SyntaxRole::TagAttribute => "tag-attribute",
            SyntaxRole::Namespace => "namespace",
            SyntaxRole::Label => "label",
            SyntaxRole::Punctuation => "punctuation",
            SyntaxRole::Heading => "heading",
            SyntaxRole::Link => "link",
            SyntaxRole::Emphasis => "emphasis",
            SyntaxRole::Strong => "strong",
            SyntaxRole::Quote => "quote",
            SyntaxRole::InlineCode => "inline-code",
            SyntaxRole::Inserted => "inserted",
            SyntaxRole::Deleted => "deleted",
            SyntaxRole::Changed => "changed",
            SyntaxRole::Invalid => "invalid",
            SyntaxRole::Decorator => "decorator",
            SyntaxRole::Builtin => "builtin",
        }
    }
}

impl fmt::Display for SyntaxRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SyntaxRole {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| KeyError::UnknownRole(s.to_string()))
    }
}

serde_as_str!(SyntaxRole);
