//! CSS value sanitization for the stylesheet target.
//!
//! Only allows safe CSS value formats:
//! - Hex colors: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb()`/`rgba()` with numeric arguments
//! - Font families: quoted or unquoted names, comma-separated
//! - Numeric values with units: `4px`, `0.5rem`, `1.2em`
//! - Box shadows built from lengths and colors, or `none`
//! - Lowercase identifiers such as icon set names
//!
//! Rejects anything containing: `expression(`, `url(`, `javascript:`,
//! `eval(`, `import`, `;`, `}`, `{`, `@`, `<`, `>`

use std::sync::LazyLock;

use regex::Regex;
use tint_palette::StyleKey;

static SHADOW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z#.,()/%\s-]+$").expect("valid regex"));

static IDENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]*$").expect("valid regex"));

/// The kind of validation to apply to a CSS value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssValueKind {
    /// Hex or rgb()/rgba() color.
    Color,
    /// Font family name(s).
    FontFamily,
    /// Numeric value with optional unit.
    Numeric,
    /// `box-shadow` value.
    Shadow,
    /// Bare identifier.
    Ident,
}

impl CssValueKind {
    /// How a style token is checked when it is written as a variable.
    pub fn for_style(key: StyleKey) -> Self {
        match key {
            StyleKey::FontHeading | StyleKey::FontBody => CssValueKind::FontFamily,
            StyleKey::Radius | StyleKey::Spacing => CssValueKind::Numeric,
            StyleKey::Shadow => CssValueKind::Shadow,
            StyleKey::IconSet => CssValueKind::Ident,
        }
    }

    /// Value emitted in place of a rejected one.
    pub fn fallback(self) -> &'static str {
        match self {
            CssValueKind::Color => "#000000",
            CssValueKind::FontFamily => "sans-serif",
            CssValueKind::Numeric => "0",
            CssValueKind::Shadow | CssValueKind::Ident => "none",
        }
    }

    pub fn validate(self, value: &str) -> Result<(), String> {
        match self {
            CssValueKind::Color => validate_css_color(value),
            CssValueKind::FontFamily => validate_css_font_family(value),
            CssValueKind::Numeric => validate_css_numeric(value),
            CssValueKind::Shadow => validate_css_shadow(value),
            CssValueKind::Ident => validate_css_ident(value),
        }
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Validate a CSS color value.
///
/// Accepts hex and `rgb()`/`rgba()` with numeric args. Named colors are
/// rejected.
pub fn validate_css_color(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty CSS color value".to_string());
    }

    check_injection_patterns(trimmed)?;

    if trimmed.starts_with('#') {
        return validate_hex_color(trimmed);
    }
    if trimmed.starts_with("rgba(") || trimmed.starts_with("rgb(") {
        return validate_rgb_function(trimmed);
    }

    Err(format!(
        "invalid CSS color: only hex and rgb()/rgba() allowed, got '{trimmed}'"
    ))
}

/// Validate a CSS font-family value.
pub fn validate_css_font_family(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty font-family value".to_string());
    }

    check_injection_patterns(trimmed)?;

    for ch in trimmed.chars() {
        if !ch.is_alphanumeric() && !matches!(ch, ' ' | '-' | '_' | '\'' | '"' | ',') {
            return Err(format!(
                "invalid character '{ch}' in font-family: '{trimmed}'"
            ));
        }
    }
    Ok(())
}

/// Validate a CSS numeric value with an optional `px`, `em`, `rem` or `%`
/// unit.
pub fn validate_css_numeric(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty CSS numeric value".to_string());
    }

    check_injection_patterns(trimmed)?;

    // rem before em: both end in "em"
    let numeric_part = ["rem", "px", "em", "%"]
        .iter()
        .find_map(|unit| trimmed.strip_suffix(unit))
        .unwrap_or(trimmed);

    match numeric_part.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(()),
        _ => Err(format!("invalid CSS numeric value: '{trimmed}'")),
    }
}

/// Validate a `box-shadow` value: `none`, or lengths and colors drawn from
/// a restricted character set.
pub fn validate_css_shadow(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty CSS shadow value".to_string());
    }

    check_injection_patterns(trimmed)?;

    if trimmed == "none" || SHADOW_RE.is_match(trimmed) {
        Ok(())
    } else {
        Err(format!("invalid CSS shadow value: '{trimmed}'"))
    }
}

/// Validate a lowercase identifier.
pub fn validate_css_ident(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if IDENT_RE.is_match(trimmed) {
        Ok(())
    } else {
        Err(format!("invalid identifier: '{trimmed}'"))
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn check_injection_patterns(value: &str) -> Result<(), String> {
    let lower = value.to_lowercase();

    let dangerous = [
        "expression(",
        "url(",
        "javascript:",
        "eval(",
        "import",
        "@charset",
        "behavior:",
        "-moz-binding",
    ];

    for pattern in &dangerous {
        if lower.contains(pattern) {
            return Err(format!("CSS injection blocked: contains '{pattern}'"));
        }
    }

    for ch in [';', '{', '}', '<', '>', '@'] {
        if value.contains(ch) {
            return Err(format!("CSS injection blocked: contains '{ch}'"));
        }
    }

    Ok(())
}

fn validate_hex_color(value: &str) -> Result<(), String> {
    let hex = &value[1..];

    if !matches!(hex.len(), 3 | 4 | 6 | 8) {
        return Err(format!(
            "invalid hex color length: expected 3/4/6/8 digits, got {} in '{value}'",
            hex.len()
        ));
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: non-hex character in '{value}'"));
    }
    Ok(())
}

fn validate_rgb_function(value: &str) -> Result<(), String> {
    let inner = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| format!("malformed rgb/rgba: '{value}'"))?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    let expected = if value.starts_with("rgba(") { 4 } else { 3 };
    if parts.len() != expected {
        return Err(format!(
            "expected {expected} arguments in '{value}', got {}",
            parts.len()
        ));
    }

    for (i, part) in parts.iter().enumerate() {
        if part.parse::<f64>().is_err() {
            return Err(format!(
                "non-numeric argument at position {i} in '{value}': '{part}'"
            ));
        }
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        assert!(validate_css_color("#fff").is_ok());
        assert!(validate_css_color("#100f0f").is_ok());
        assert!(validate_css_color("#100f0f80").is_ok());
        assert!(validate_css_color("#ff").is_err());
        assert!(validate_css_color("#gggggg").is_err());
    }

    #[test]
    fn rgb_functions() {
        assert!(validate_css_color("rgb(255, 0, 0)").is_ok());
        assert!(validate_css_color("rgba(0,0,0,0.5)").is_ok());
        assert!(validate_css_color("rgb(1, 2)").is_err());
        assert!(validate_css_color("rgb(a, b, c)").is_err());
    }

    #[test]
    fn named_colors_rejected() {
        assert!(validate_css_color("red").is_err());
    }

    #[test]
    fn font_families() {
        assert!(validate_css_font_family("Inter").is_ok());
        assert!(validate_css_font_family("'Source Serif 4', serif").is_ok());
        assert!(validate_css_font_family("Inter; color: red").is_err());
        assert!(validate_css_font_family("").is_err());
    }

    #[test]
    fn numerics_accept_every_unit() {
        for v in ["0", "0.5rem", "4px", "1.2em", "50%"] {
            assert!(validate_css_numeric(v).is_ok(), "{v}");
        }
        assert!(validate_css_numeric("wide").is_err());
        assert!(validate_css_numeric("1remx").is_err());
    }

    #[test]
    fn shadows() {
        assert!(validate_css_shadow("none").is_ok());
        assert!(validate_css_shadow("0 1px 3px 0 rgb(0 0 0 / 0.1)").is_ok());
        assert!(validate_css_shadow("0 0 0 #000, 1px 1px 2px #fff").is_ok());
        assert!(validate_css_shadow("0 0 url(x)").is_err());
        assert!(validate_css_shadow("0 0 0 red}").is_err());
    }

    #[test]
    fn idents() {
        assert!(validate_css_ident("lucide").is_ok());
        assert!(validate_css_ident("phosphor-duotone").is_ok());
        assert!(validate_css_ident("Lucide").is_err());
        assert!(validate_css_ident("a b").is_err());
    }

    #[test]
    fn injection_blocked() {
        assert!(validate_css_color("#fff;}</style>").is_err());
        assert!(validate_css_font_family("x@import").is_err());
        assert!(validate_css_shadow("expression(alert(1))").is_err());
    }

    #[test]
    fn fallbacks_are_themselves_valid() {
        for kind in [
            CssValueKind::Color,
            CssValueKind::FontFamily,
            CssValueKind::Numeric,
            CssValueKind::Shadow,
            CssValueKind::Ident,
        ] {
            assert!(kind.validate(kind.fallback()).is_ok(), "{kind:?}");
        }
    }
}
