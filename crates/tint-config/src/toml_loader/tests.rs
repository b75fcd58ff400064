//! Tests for TOML config loading, creation, and path resolution.

use super::template::default_config_toml;
use super::*;
use crate::schema::{LogLevel, TintConfig};
use std::path::Path;
use tint_common::{ConfigError, Mode};
use tint_targets::Target;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_tint_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[theme]
name = "midnight"

[export]
mode = "dark"
targets = ["kitty", "css"]
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.theme.name, "midnight");
    assert_eq!(config.export.mode, Mode::Dark);
    assert_eq!(config.export.targets, vec![Target::Kitty, Target::Css]);
    // Defaults preserved
    assert_eq!(config.storage.autosave_debounce_ms, 800);
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn unknown_target_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[export]\ntargets = [\"sublime\"]\n").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
    assert!(err.to_string().contains("sublime"));
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tint").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, TintConfig::default());
}

#[test]
fn default_config_toml_is_valid() {
    let config: TintConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.theme.name, "flexoki");
    assert_eq!(config.export.targets.len(), Target::ALL.len());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("tint"));
        assert!(path_str.ends_with("config.toml"));
    }
}
