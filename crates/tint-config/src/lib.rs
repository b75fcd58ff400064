//! tint configuration.
//!
//! A TOML file selects the theme, the export targets and where saved themes
//! live. All sections use defaults so partial configs work out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    ExportConfig, LogLevel, LoggingConfig, StorageConfig, ThemeConfig, TintConfig,
    CONFIG_SCHEMA_VERSION,
};

use std::path::Path;

use tint_common::ConfigError;

/// Load and validate the config at `path`, or at the platform default
/// location when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<TintConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TintConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
