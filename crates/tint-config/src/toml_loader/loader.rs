//! Core TOML config loading: read from path or platform default.

use std::path::Path;

use tint_common::ConfigError;
use tracing::info;

use super::paths::{create_default_config, default_config_path};
use crate::schema::TintConfig;

/// Load config from a specific TOML file path.
///
/// Missing fields take their defaults. Validation is left to the caller.
pub fn load_from_path(path: &Path) -> Result<TintConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config: TintConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/tint/config.toml`
/// On Linux: `~/.config/tint/config.toml`
///
/// If the file does not exist, writes the commented default and returns
/// defaults.
pub fn load_default() -> Result<TintConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(TintConfig::default())
        }
        Err(e) => Err(e),
    }
}
