//! Theme file resolution and loading.
//!
//! Resolves theme names to presets or filesystem paths and parses YAML or
//! JSON theme documents into a complete [`Theme`].

use std::path::{Path, PathBuf};

use tint_common::ThemeError;
use tracing::info;

use super::document::ThemeDocument;
use super::presets;
use super::types::Theme;

const EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Directory for user theme files: `<config_dir>/tint/themes`.
pub fn themes_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tint").join("themes"))
}

fn looks_like_path(name: &str) -> bool {
    name.contains('/')
        || name.contains('\\')
        || EXTENSIONS
            .iter()
            .any(|ext| name.ends_with(&format!(".{ext}")))
}

/// Resolve the filesystem path for a theme by name.
///
/// Names that look like paths are used directly. Anything else is looked up
/// in [`themes_dir`] under each supported extension.
fn resolve_theme_path(name: &str) -> Result<PathBuf, ThemeError> {
    if looks_like_path(name) {
        let path = PathBuf::from(name);
        if path.exists() {
            return Ok(path);
        }
        return Err(ThemeError::FileNotFound(path));
    }

    if let Some(dir) = themes_dir() {
        for ext in EXTENSIONS {
            let candidate = dir.join(format!("{name}.{ext}"));
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    Err(ThemeError::FileNotFound(PathBuf::from(format!(
        "theme '{name}' not found in any search path"
    ))))
}

/// Load a theme by preset name, path, or user theme name.
pub fn load_theme(name: &str) -> Result<Theme, ThemeError> {
    if let Some(theme) = presets::preset(name) {
        return Ok(theme);
    }

    let path = resolve_theme_path(name)?;
    load_theme_from_path(&path)
}

/// Load a theme from a specific filesystem path. `.json` files are parsed
/// as JSON, everything else as YAML.
pub fn load_theme_from_path(path: &Path) -> Result<Theme, ThemeError> {
    if !path.exists() {
        return Err(ThemeError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ThemeError::Parse(format!("failed to read theme file {}: {e}", path.display()))
    })?;

    let theme = if is_json(path) {
        theme_from_json(&content)
    } else {
        theme_from_yaml(&content)
    }
    .map_err(|e| match e {
        ThemeError::Parse(msg) => ThemeError::Parse(format!("{}: {msg}", path.display())),
        other => other,
    })?;

    info!("loaded theme '{}' from {}", theme.name, path.display());
    Ok(theme)
}

pub fn theme_from_yaml(content: &str) -> Result<Theme, ThemeError> {
    let doc: ThemeDocument =
        serde_yaml::from_str(content).map_err(|e| ThemeError::Parse(e.to_string()))?;
    Theme::try_from(doc)
}

pub fn theme_from_json(content: &str) -> Result<Theme, ThemeError> {
    let doc: ThemeDocument =
        serde_json::from_str(content).map_err(|e| ThemeError::Parse(e.to_string()))?;
    Theme::try_from(doc)
}

/// Write a theme document, choosing JSON or YAML by extension.
pub fn save_theme_to_path(theme: &Theme, path: &Path) -> Result<(), ThemeError> {
    let doc = ThemeDocument::from(theme.clone());
    let content = if is_json(path) {
        serde_json::to_string_pretty(&doc).map_err(|e| ThemeError::Parse(e.to_string()))?
    } else {
        serde_yaml::to_string(&doc).map_err(|e| ThemeError::Parse(e.to_string()))?
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;

    info!("saved theme '{}' to {}", theme.name, path.display());
    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}
