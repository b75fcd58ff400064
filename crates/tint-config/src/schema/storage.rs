//! Where saved themes and the session snapshot live.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Root directory. Defaults to `<data_dir>/tint`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    /// Quiet period before an autosave, in milliseconds.
    pub autosave_debounce_ms: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            autosave_debounce_ms: 800,
        }
    }
}

impl StorageConfig {
    /// The storage root, or `None` when no data directory is known.
    pub fn root(&self) -> Option<PathBuf> {
        self.dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("tint")))
    }

    /// Directory holding one JSON file per saved theme.
    pub fn themes_dir(&self) -> Option<PathBuf> {
        self.root().map(|root| root.join("themes"))
    }

    /// The local session snapshot file.
    pub fn snapshot_path(&self) -> Option<PathBuf> {
        self.root().map(|root| root.join("snapshot.json"))
    }
}
