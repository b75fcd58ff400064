use std::collections::BTreeMap;

use async_trait::async_trait;
use tint_common::{StoreError, ThemeId};
use tint_palette::Theme;
use tokio::sync::RwLock;
use tracing::debug;

use super::{prepare_save, ListFilter, SavedTheme, ThemeStore, Visibility};
use crate::overrides::OverrideRecord;

/// In-process store, for tests and hosts without storage.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    themes: RwLock<BTreeMap<ThemeId, SavedTheme>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: &ThemeId) -> Option<SavedTheme> {
        self.themes.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.themes.read().await.len()
    }
}

#[async_trait]
impl ThemeStore for MemoryThemeStore {
    async fn save(
        &self,
        theme: &Theme,
        overrides: &OverrideRecord,
        visibility: Visibility,
    ) -> Result<SavedTheme, StoreError> {
        let mut themes = self.themes.write().await;
        let (saved, changed) = prepare_save(themes.get(&theme.id), theme, overrides, visibility)?;
        if changed {
            debug!("memory store: saved {}", theme.id);
            themes.insert(theme.id.clone(), saved.clone());
        }
        Ok(saved)
    }

    async fn delete(&self, id: &ThemeId) -> Result<(), StoreError> {
        match self.themes.write().await.remove(id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    async fn list(&self, filter: &ListFilter) -> Result<Vec<SavedTheme>, StoreError> {
        Ok(self
            .themes
            .read()
            .await
            .values()
            .filter(|saved| filter.matches(saved))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_palette::theme::presets;

    #[tokio::test]
    async fn identical_saves_are_idempotent() {
        let store = MemoryThemeStore::new();
        let theme = presets::flexoki();
        let first = store
            .save(&theme, &OverrideRecord::new(), Visibility::Private)
            .await
            .unwrap();
        let second = store
            .save(&theme, &OverrideRecord::new(), Visibility::Private)
            .await
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn last_writer_wins() {
        let store = MemoryThemeStore::new();
        let mut theme = presets::flexoki();
        store
            .save(&theme, &OverrideRecord::new(), Visibility::Private)
            .await
            .unwrap();
        theme.display_name = "Renamed".into();
        store
            .save(&theme, &OverrideRecord::new(), Visibility::Private)
            .await
            .unwrap();

        let stored = store.get(&theme.id).await.unwrap();
        assert_eq!(stored.theme.display_name, "Renamed");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn delete_and_list() {
        let store = MemoryThemeStore::new();
        for theme in [presets::flexoki(), presets::paper(), presets::midnight()] {
            store
                .save(&theme, &OverrideRecord::new(), Visibility::Public)
                .await
                .unwrap();
        }
        let all = store.list(&ListFilter::default()).await.unwrap();
        let ids: Vec<_> = all.iter().map(|s| s.theme.id.as_str()).collect();
        assert_eq!(ids, ["preset-flexoki", "preset-midnight", "preset-paper"]);

        store.delete(&ThemeId::from_string("preset-paper")).await.unwrap();
        assert_eq!(store.len().await, 2);
        assert!(matches!(
            store.delete(&ThemeId::from_string("preset-paper")).await,
            Err(StoreError::NotFound(_))
        ));
    }
}
