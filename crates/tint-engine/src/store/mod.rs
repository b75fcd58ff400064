//! Persistence contract for saved themes and the local session snapshot.

mod file;
mod memory;
mod snapshot;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tint_common::{StoreError, ThemeId, UserId};
use tint_palette::Theme;

use crate::overrides::OverrideRecord;

pub use file::FileThemeStore;
pub use memory::MemoryThemeStore;
pub use snapshot::{choose_startup_snapshot, Snapshot, SnapshotFile};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

/// A theme as the store holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTheme {
    pub theme: Theme,
    #[serde(default)]
    pub overrides: OverrideRecord,
    #[serde(default)]
    pub visibility: Visibility,
    pub saved_at: DateTime<Utc>,
    /// Content digest of theme, overrides and visibility.
    pub digest: String,
}

/// Which saved themes `list` returns. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub owner: Option<UserId>,
    pub visibility: Option<Visibility>,
    /// Case-insensitive substring of the theme name.
    pub name_contains: Option<String>,
}

impl ListFilter {
    pub fn matches(&self, saved: &SavedTheme) -> bool {
        if let Some(owner) = &self.owner {
            if saved.theme.owner.as_ref() != Some(owner) {
                return false;
            }
        }
        if let Some(visibility) = self.visibility {
            if saved.visibility != visibility {
                return false;
            }
        }
        if let Some(needle) = &self.name_contains {
            let needle = needle.to_lowercase();
            if !saved.theme.name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }
}

/// Storage backend for saved themes.
///
/// `save` is idempotent: saving identical content again returns the stored
/// record unchanged. Different content for the same id replaces it (last
/// writer wins).
#[async_trait]
pub trait ThemeStore: Send + Sync {
    async fn save(
        &self,
        theme: &Theme,
        overrides: &OverrideRecord,
        visibility: Visibility,
    ) -> Result<SavedTheme, StoreError>;

    async fn delete(&self, id: &ThemeId) -> Result<(), StoreError>;

    /// Matching themes, sorted by id.
    async fn list(&self, filter: &ListFilter) -> Result<Vec<SavedTheme>, StoreError>;
}

#[derive(Serialize)]
struct DigestInput<'a> {
    theme: &'a Theme,
    overrides: &'a OverrideRecord,
    visibility: Visibility,
}

/// Hex SHA-256 over the canonical JSON form of the saved content.
pub fn content_digest(
    theme: &Theme,
    overrides: &OverrideRecord,
    visibility: Visibility,
) -> Result<String, StoreError> {
    let input = DigestInput {
        theme,
        overrides,
        visibility,
    };
    let bytes = serde_json::to_vec(&input).map_err(|e| StoreError::Serialize(e.to_string()))?;
    let hash = Sha256::digest(&bytes);
    Ok(hash.iter().map(|b| format!("{b:02x}")).collect())
}

/// Build the record a store writes, reusing `existing` when the content is
/// unchanged.
pub(crate) fn prepare_save(
    existing: Option<&SavedTheme>,
    theme: &Theme,
    overrides: &OverrideRecord,
    visibility: Visibility,
) -> Result<(SavedTheme, bool), StoreError> {
    let digest = content_digest(theme, overrides, visibility)?;
    if let Some(existing) = existing {
        if existing.digest == digest {
            return Ok((existing.clone(), false));
        }
    }
    let saved = SavedTheme {
        theme: theme.clone(),
        overrides: overrides.clone(),
        visibility,
        saved_at: Utc::now(),
        digest,
    };
    Ok((saved, true))
}
