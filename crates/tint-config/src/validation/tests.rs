//! Tests for the full validation pipeline.

use std::path::PathBuf;

use super::*;
use tint_targets::Target;

#[test]
fn default_config_validates() {
    assert!(validate(&TintConfig::default()).is_ok());
}

#[test]
fn catches_blank_theme_name() {
    let mut config = TintConfig::default();
    config.theme.name = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("theme.name is empty"));
}

#[test]
fn catches_empty_target_list() {
    let mut config = TintConfig::default();
    config.export.targets.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("export.targets is empty"));
}

#[test]
fn catches_duplicate_targets() {
    let mut config = TintConfig::default();
    config.export.targets = vec![Target::Kitty, Target::Css, Target::Kitty];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("'kitty' more than once"));
}

#[test]
fn catches_debounce_out_of_range() {
    let mut config = TintConfig::default();
    config.storage.autosave_debounce_ms = 5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("storage.autosave_debounce_ms = 5"));
}

#[test]
fn collects_every_error() {
    let mut config = TintConfig::default();
    config.theme.name.clear();
    config.export.out_dir = PathBuf::new();
    config.storage.autosave_debounce_ms = 120_000;

    let err = validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
    let msg = err.to_string();
    assert!(msg.contains("theme.name"));
    assert!(msg.contains("export.out_dir"));
    assert!(msg.contains("storage.autosave_debounce_ms"));
    assert_eq!(msg.matches("; ").count(), 2);
}
