use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tint_common::{StoreError, ThemeId};
use tint_palette::Theme;
use tracing::{debug, info, warn};

use super::{prepare_save, ListFilter, SavedTheme, ThemeStore, Visibility};
use crate::overrides::OverrideRecord;

/// One JSON file per theme under a directory.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    dir: PathBuf,
}

impl FileThemeStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &ThemeId) -> Result<PathBuf, StoreError> {
        let id = id.as_str();
        let safe = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !safe {
            return Err(StoreError::Backend(format!("unsafe theme id '{id}'")));
        }
        Ok(self.dir.join(format!("{id}.json")))
    }

    async fn read(path: &Path) -> Result<Option<SavedTheme>, StoreError> {
        match tokio::fs::read_to_string(path).await {
            Ok(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|e| StoreError::Serialize(format!("{}: {e}", path.display()))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Write through a sibling temp file and rename over the target.
pub(crate) async fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, contents).await?;
    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    Ok(())
}

#[async_trait]
impl ThemeStore for FileThemeStore {
    async fn save(
        &self,
        theme: &Theme,
        overrides: &OverrideRecord,
        visibility: Visibility,
    ) -> Result<SavedTheme, StoreError> {
        let path = self.path_for(&theme.id)?;
        // an unreadable record is overwritten
        let existing = match Self::read(&path).await {
            Ok(existing) => existing,
            Err(e) => {
                warn!("replacing unreadable record: {e}");
                None
            }
        };

        let (saved, changed) = prepare_save(existing.as_ref(), theme, overrides, visibility)?;
        if !changed {
            debug!("{} unchanged, skipping write", path.display());
            return Ok(saved);
        }

        let json =
            serde_json::to_vec_pretty(&saved).map_err(|e| StoreError::Serialize(e.to_string()))?;
        write_atomic(&path, &json).await?;
        info!("saved theme '{}' to {}", theme.name, path.display());
        Ok(saved)
    }

    async fn delete(&self, id: &ThemeId) -> Result<(), StoreError> {
        let path = self.path_for(id)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                info!("deleted {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self, filter: &ListFilter) -> Result<Vec<SavedTheme>, StoreError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut themes = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match Self::read(&path).await {
                Ok(Some(saved)) if filter.matches(&saved) => themes.push(saved),
                Ok(_) => {}
                Err(e) => warn!("skipping {}: {e}", path.display()),
            }
        }
        themes.sort_by(|a, b| a.theme.id.cmp(&b.theme.id));
        Ok(themes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_common::{Mode, ProviderId};
    use tint_palette::theme::presets;
    use tint_palette::{PaletteSlot, TokenKey};

    fn store() -> (FileThemeStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        (FileThemeStore::new(dir.path().join("themes")), dir)
    }

    #[tokio::test]
    async fn save_writes_one_file_per_theme() {
        let (store, _dir) = store();
        let theme = presets::flexoki();
        store
            .save(&theme, &OverrideRecord::new(), Visibility::Private)
            .await
            .unwrap();

        let path = store.dir().join("preset-flexoki.json");
        assert!(path.exists());
        assert!(!store.dir().join("preset-flexoki.json.tmp").exists());
    }

    #[tokio::test]
    async fn identical_save_does_not_rewrite() {
        let (store, _dir) = store();
        let theme = presets::flexoki();
        let first = store
            .save(&theme, &OverrideRecord::new(), Visibility::Private)
            .await
            .unwrap();
        let second = store
            .save(&theme, &OverrideRecord::new(), Visibility::Private)
            .await
            .unwrap();
        assert_eq!(first.saved_at, second.saved_at);
        assert_eq!(first.digest, second.digest);
    }

    #[tokio::test]
    async fn overrides_round_trip_through_disk() {
        let (store, _dir) = store();
        let theme = presets::midnight();
        let mut overrides = OverrideRecord::new();
        overrides.merge(
            &ProviderId::new("vscode"),
            Mode::Dark,
            [(TokenKey::Slot(PaletteSlot::Background), "#000000".to_string())],
        );
        store
            .save(&theme, &overrides, Visibility::Public)
            .await
            .unwrap();

        let listed = store.list(&ListFilter::default()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].overrides, overrides);
        assert_eq!(listed[0].theme, theme);
        assert_eq!(listed[0].visibility, Visibility::Public);
    }

    #[tokio::test]
    async fn stored_overrides_are_sanitized_on_load() {
        let (store, _dir) = store();
        let theme = presets::paper();
        store
            .save(&theme, &OverrideRecord::new(), Visibility::Private)
            .await
            .unwrap();

        let path = store.dir().join("preset-paper.json");
        let mut json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        json["overrides"] = serde_json::json!({
            "p": { "light": { "background": "#fff", "nonsense": "#000" }, "sepia": {} }
        });
        std::fs::write(&path, serde_json::to_string(&json).unwrap()).unwrap();

        let listed = store.list(&ListFilter::default()).await.unwrap();
        let layer = listed[0]
            .overrides
            .layer(&ProviderId::new("p"), Mode::Light)
            .unwrap();
        assert_eq!(layer.len(), 1);
    }

    #[tokio::test]
    async fn list_skips_unreadable_files() {
        let (store, _dir) = store();
        store
            .save(&presets::flexoki(), &OverrideRecord::new(), Visibility::Private)
            .await
            .unwrap();
        std::fs::write(store.dir().join("broken.json"), "{ not json").unwrap();
        std::fs::write(store.dir().join("notes.txt"), "ignored").unwrap();

        let listed = store.list(&ListFilter::default()).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn list_of_missing_dir_is_empty() {
        let (store, _dir) = store();
        assert!(store.list(&ListFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let (store, _dir) = store();
        let err = store
            .delete(&ThemeId::from_string("nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn saves_themes_loaded_from_documents_with_spaced_names() {
        let (store, _dir) = store();
        let theme = tint_palette::theme::theme_from_yaml("name: Solarized Dark\n").unwrap();
        store
            .save(&theme, &OverrideRecord::new(), Visibility::Private)
            .await
            .unwrap();

        assert!(store.dir().join("theme-solarized-dark.json").exists());
        let listed = store.list(&ListFilter::default()).await.unwrap();
        assert_eq!(listed[0].theme.name, "Solarized Dark");
    }

    #[tokio::test]
    async fn unsafe_ids_are_rejected() {
        let (store, _dir) = store();
        let mut theme = presets::flexoki();
        theme.id = ThemeId::from_string("../escape");
        let err = store
            .save(&theme, &OverrideRecord::new(), Visibility::Private)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Backend(_)));
    }
}
