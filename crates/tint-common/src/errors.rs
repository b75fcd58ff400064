use std::path::PathBuf;

/// A key that is not part of one of the closed enumerations.
///
/// These indicate a mapping-table or caller defect, never bad user input,
/// so they are always surfaced instead of being silently corrected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("unknown palette slot: {0}")]
    UnknownSlot(String),

    #[error("unknown token key: {0}")]
    UnknownToken(String),

    #[error("unknown syntax role: {0}")]
    UnknownRole(String),

    #[error("unknown color mode: {0}")]
    UnknownMode(String),

    #[error("unknown target: {0}")]
    UnknownTarget(String),

    #[error("unknown token map: {0}")]
    UnknownTokenMap(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("theme file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("theme parse error: {0}")]
    Parse(String),

    #[error("invalid theme: {0}")]
    Invalid(String),

    #[error("theme io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Key(#[from] KeyError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("theme not found: {0}")]
    NotFound(String),

    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization error: {0}")]
    Serialize(String),

    #[error("store backend error: {0}")]
    Backend(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to serialize {target} artifact: {message}")]
    Serialize { target: String, message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum TintError {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_error_display() {
        let err = KeyError::UnknownSlot("tx-9".into());
        assert_eq!(err.to_string(), "unknown palette slot: tx-9");

        let err = KeyError::UnknownToken("font-weight".into());
        assert_eq!(err.to_string(), "unknown token key: font-weight");

        let err = KeyError::UnknownTarget("sublime".into());
        assert_eq!(err.to_string(), "unknown target: sublime");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ValidationError("export.targets is empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: export.targets is empty"
        );
    }

    #[test]
    fn render_error_display() {
        let err = RenderError::Serialize {
            target: "alacritty-toml".into(),
            message: "unsupported value".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to serialize alacritty-toml artifact: unsupported value"
        );
    }

    #[test]
    fn tint_error_from_key() {
        let err: TintError = KeyError::UnknownRole("sparkle".into()).into();
        assert!(matches!(err, TintError::Key(_)));
        assert!(err.to_string().contains("sparkle"));
    }

    #[test]
    fn theme_error_from_key() {
        let err: ThemeError = KeyError::UnknownSlot("bg-9".into()).into();
        assert!(matches!(err, ThemeError::Key(_)));
        assert_eq!(err.to_string(), "unknown palette slot: bg-9");
    }

    #[test]
    fn tint_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TintError = io_err.into();
        assert!(matches!(err, TintError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn store_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: StoreError = io_err.into();
        assert!(matches!(err, StoreError::Io(_)));
        assert_eq!(err.to_string(), "store io error: read-only");
    }
}
