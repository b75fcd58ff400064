use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tint_common::{Mode, ProviderId, StoreError};
use tint_palette::Theme;
use tracing::{debug, info};

use super::file::write_atomic;
use crate::overrides::{AdHocEdits, OverrideRecord};

/// Everything needed to restore a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub theme: Theme,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderId>,
    #[serde(default)]
    pub overrides: OverrideRecord,
    #[serde(default)]
    pub edits: AdHocEdits,
    pub saved_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(
        theme: Theme,
        mode: Mode,
        provider: Option<ProviderId>,
        overrides: OverrideRecord,
        edits: AdHocEdits,
    ) -> Self {
        Self {
            theme,
            mode,
            provider,
            overrides,
            edits,
            saved_at: Utc::now(),
        }
    }
}

/// The local snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot, or `None` when there is none yet. Override and
    /// edit layers are sanitized while parsing.
    pub async fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let snapshot: Snapshot = serde_json::from_str(&text)
            .map_err(|e| StoreError::Serialize(format!("{}: {e}", self.path.display())))?;
        info!(
            "loaded snapshot of '{}' from {}",
            snapshot.theme.name,
            self.path.display()
        );
        Ok(Some(snapshot))
    }

    pub async fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        write_atomic(&self.path, &json).await?;
        debug!("wrote snapshot to {}", self.path.display());
        Ok(())
    }
}

/// Pick the snapshot to start from.
///
/// The local snapshot wins whenever it exists and names the same theme as
/// the remote one, regardless of timestamps. A local snapshot of another
/// theme loses to the remote one.
pub fn choose_startup_snapshot(
    remote: Option<Snapshot>,
    local: Option<Snapshot>,
) -> Option<Snapshot> {
    match (remote, local) {
        (Some(remote), Some(local)) if remote.theme.id == local.theme.id => {
            debug!("startup: local snapshot of {}", local.theme.id);
            Some(local)
        }
        (Some(remote), Some(local)) => {
            debug!(
                "startup: remote snapshot of {} (local names {})",
                remote.theme.id, local.theme.id
            );
            Some(remote)
        }
        (Some(remote), None) => Some(remote),
        (None, local) => local,
    }
}
