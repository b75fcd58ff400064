//! Debounced background saving.
//!
//! The host pushes the latest snapshot after every mutation. A background
//! task waits until no request has arrived for a full debounce window, then
//! writes the local snapshot file and saves to the store. Saves for one
//! theme never overlap, and every outcome is published as a [`SaveReport`].
//! Failures are reported and otherwise leave the session alone.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tint_common::{StoreError, ThemeId};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::store::{SavedTheme, Snapshot, SnapshotFile, ThemeStore, Visibility};

/// One pending save.
#[derive(Debug, Clone)]
pub struct SaveRequest {
    /// Session revision the snapshot was taken at.
    pub revision: u64,
    pub snapshot: Snapshot,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { digest: String },
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub theme_id: ThemeId,
    pub revision: u64,
    pub outcome: SaveOutcome,
}

impl SaveReport {
    pub fn is_saved(&self) -> bool {
        matches!(self.outcome, SaveOutcome::Saved { .. })
    }
}

/// Theme ids with a save in flight.
#[derive(Debug, Default)]
struct InFlight {
    ids: Mutex<HashSet<ThemeId>>,
    saving: Arc<AtomicBool>,
}

/// Releases a theme id on drop, so cancelled saves do not leak the slot.
struct FlightGuard<'a> {
    in_flight: &'a InFlight,
    id: ThemeId,
}

impl InFlight {
    fn acquire(&self, id: &ThemeId) -> Option<FlightGuard<'_>> {
        let mut ids = self.ids.lock().unwrap_or_else(|e| e.into_inner());
        if !ids.insert(id.clone()) {
            return None;
        }
        self.saving.store(true, Ordering::Release);
        Some(FlightGuard {
            in_flight: self,
            id: id.clone(),
        })
    }

    fn is_busy(&self, id: &ThemeId) -> bool {
        self.ids
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(id)
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        let mut ids = self.in_flight.ids.lock().unwrap_or_else(|e| e.into_inner());
        ids.remove(&self.id);
        self.in_flight.saving.store(!ids.is_empty(), Ordering::Release);
    }
}

struct Worker {
    store: Arc<dyn ThemeStore>,
    snapshot_file: Option<SnapshotFile>,
    in_flight: InFlight,
    reports: broadcast::Sender<SaveReport>,
}

impl Worker {
    async fn save(&self, request: &SaveRequest) -> Result<SavedTheme, StoreError> {
        let id = &request.snapshot.theme.id;
        let _guard = self
            .in_flight
            .acquire(id)
            .ok_or_else(|| StoreError::Backend(format!("save already in flight for {id}")))?;

        if let Some(file) = &self.snapshot_file {
            file.save(&request.snapshot).await?;
        }
        self.store
            .save(
                &request.snapshot.theme,
                &request.snapshot.overrides,
                request.visibility,
            )
            .await
    }

    async fn save_and_report(&self, request: &SaveRequest) -> SaveReport {
        let outcome = match self.save(request).await {
            Ok(saved) => {
                debug!(
                    "saved revision {} of {}",
                    request.revision, request.snapshot.theme.id
                );
                SaveOutcome::Saved {
                    digest: saved.digest,
                }
            }
            Err(e) => {
                warn!(
                    "save of {} (revision {}) failed: {e}",
                    request.snapshot.theme.id, request.revision
                );
                SaveOutcome::Failed(e.to_string())
            }
        };
        let report = SaveReport {
            theme_id: request.snapshot.theme.id.clone(),
            revision: request.revision,
            outcome,
        };
        let _ = self.reports.send(report.clone());
        report
    }

    async fn run(self: Arc<Self>, mut rx: watch::Receiver<Option<SaveRequest>>, debounce: Duration) {
        let mut closed = false;
        while !closed {
            if rx.changed().await.is_err() {
                break;
            }
            // every new request restarts the quiet period
            loop {
                match tokio::time::timeout(debounce, rx.changed()).await {
                    Ok(Ok(())) => continue,
                    Ok(Err(_)) => {
                        closed = true;
                        break;
                    }
                    Err(_) => break,
                }
            }
            let request = rx.borrow_and_update().clone();
            let Some(request) = request else {
                continue;
            };

            // wait out an explicit save of the same theme
            while self.in_flight.is_busy(&request.snapshot.theme.id) {
                tokio::time::sleep(debounce.max(Duration::from_millis(10))).await;
            }
            self.save_and_report(&request).await;
        }
        debug!("autosave worker stopped");
    }
}

/// Handle to the background save task.
pub struct Autosaver {
    tx: watch::Sender<Option<SaveRequest>>,
    worker: Arc<Worker>,
    task: JoinHandle<()>,
}

impl Autosaver {
    /// Start the save task. `saving` is raised while any save runs; pass
    /// the session's [`saving_flag`](crate::ThemeSession::saving_flag) so
    /// the session reports it.
    pub fn spawn(
        store: Arc<dyn ThemeStore>,
        snapshot_file: Option<SnapshotFile>,
        debounce: Duration,
        saving: Arc<AtomicBool>,
    ) -> Self {
        let (tx, rx) = watch::channel(None);
        let (reports, _) = broadcast::channel(16);
        let worker = Arc::new(Worker {
            store,
            snapshot_file,
            in_flight: InFlight {
                ids: Mutex::new(HashSet::new()),
                saving,
            },
            reports,
        });
        let task = tokio::spawn(Arc::clone(&worker).run(rx, debounce));
        info!("autosave started (debounce {}ms)", debounce.as_millis());
        Self { tx, worker, task }
    }

    /// Queue a save. Replaces any request still waiting out the debounce.
    pub fn request(&self, request: SaveRequest) {
        self.tx.send_replace(Some(request));
    }

    /// Save immediately, bypassing the debounce. Fails if a save for the
    /// same theme is already running.
    pub async fn save_now(&self, request: SaveRequest) -> SaveReport {
        self.worker.save_and_report(&request).await
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SaveReport> {
        self.worker.reports.subscribe()
    }

    pub fn is_saving(&self) -> bool {
        self.worker.in_flight.saving.load(Ordering::Acquire)
    }

    /// Stop the background task. Requests still waiting are dropped.
    pub fn shutdown(self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryThemeStore;
    use crate::{OverrideRecord, ThemeSession};
    use async_trait::async_trait;
    use tint_common::Mode;
    use tint_palette::theme::presets;
    use tint_palette::{PaletteSlot, Theme, TokenKey};

    fn request(session: &ThemeSession) -> SaveRequest {
        SaveRequest {
            revision: session.revision(),
            snapshot: session.snapshot(),
            visibility: Visibility::Private,
        }
    }

    #[tokio::test]
    async fn rapid_requests_coalesce_into_one_save() {
        let store = Arc::new(MemoryThemeStore::new());
        let mut session = ThemeSession::new(presets::flexoki(), Mode::Light);
        let saver = Autosaver::spawn(
            store.clone(),
            None,
            Duration::from_millis(50),
            session.saving_flag(),
        );
        let mut reports = saver.subscribe();

        for hex in ["#111111", "#222222", "#333333"] {
            session.edit_token(TokenKey::Slot(PaletteSlot::Text), hex);
            saver.request(request(&session));
        }

        let report = reports.recv().await.unwrap();
        assert!(report.is_saved());
        assert_eq!(report.revision, 3);
        session.mark_persisted(report.revision);
        assert!(!session.is_dirty());

        // nothing else was queued
        let next = tokio::time::timeout(Duration::from_millis(150), reports.recv()).await;
        assert!(next.is_err());
        saver.shutdown();
    }

    #[tokio::test]
    async fn steady_requests_keep_postponing_the_save() {
        let store = Arc::new(MemoryThemeStore::new());
        let mut session = ThemeSession::new(presets::flexoki(), Mode::Light);
        let saver = Autosaver::spawn(
            store.clone(),
            None,
            Duration::from_millis(100),
            session.saving_flag(),
        );
        let mut reports = saver.subscribe();

        // spaced closer than the window, but spanning longer than it
        for hex in ["#111111", "#222222", "#333333", "#444444"] {
            session.edit_token(TokenKey::Slot(PaletteSlot::Text), hex);
            saver.request(request(&session));
            tokio::time::sleep(Duration::from_millis(40)).await;
        }

        let report = reports.recv().await.unwrap();
        assert_eq!(report.revision, 4);
        let next = tokio::time::timeout(Duration::from_millis(250), reports.recv()).await;
        assert!(next.is_err());
        saver.shutdown();
    }

    #[tokio::test]
    async fn snapshot_file_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let file = SnapshotFile::new(dir.path().join("snapshot.json"));
        let session = ThemeSession::new(presets::paper(), Mode::Dark);
        let saver = Autosaver::spawn(
            Arc::new(MemoryThemeStore::new()),
            Some(file.clone()),
            Duration::from_millis(1),
            session.saving_flag(),
        );

        let report = saver.save_now(request(&session)).await;
        assert!(report.is_saved());
        let loaded = file.load().await.unwrap().unwrap();
        assert_eq!(loaded.theme.id, session.theme().id);
        assert_eq!(loaded.mode, Mode::Dark);
    }

    struct FailingStore;

    #[async_trait]
    impl ThemeStore for FailingStore {
        async fn save(
            &self,
            _theme: &Theme,
            _overrides: &OverrideRecord,
            _visibility: Visibility,
        ) -> Result<SavedTheme, StoreError> {
            Err(StoreError::Backend("offline".into()))
        }

        async fn delete(&self, _id: &ThemeId) -> Result<(), StoreError> {
            Err(StoreError::Backend("offline".into()))
        }

        async fn list(
            &self,
            _filter: &crate::store::ListFilter,
        ) -> Result<Vec<SavedTheme>, StoreError> {
            Err(StoreError::Backend("offline".into()))
        }
    }

    #[tokio::test]
    async fn failures_are_reported_and_leave_the_session_alone() {
        let mut session = ThemeSession::new(presets::flexoki(), Mode::Light);
        let saver = Autosaver::spawn(
            Arc::new(FailingStore),
            None,
            Duration::from_millis(1),
            session.saving_flag(),
        );

        session.edit_token(TokenKey::Slot(PaletteSlot::Accent), "#abcdef");
        let before = session.resolved().clone();
        let report = saver.save_now(request(&session)).await;

        assert_eq!(
            report.outcome,
            SaveOutcome::Failed("store backend error: offline".into())
        );
        assert!(session.is_dirty());
        assert_eq!(session.resolved(), &before);
        assert!(!session.is_saving());
    }

    #[test]
    fn flight_guard_is_single_per_theme() {
        let in_flight = InFlight::default();
        let a = ThemeId::from_string("a");
        let guard = in_flight.acquire(&a).unwrap();
        assert!(in_flight.saving.load(Ordering::Acquire));
        assert!(in_flight.acquire(&a).is_none());
        assert!(in_flight.acquire(&ThemeId::from_string("b")).is_some());
        drop(guard);
        assert!(in_flight.acquire(&a).is_some());
        assert!(!in_flight.saving.load(Ordering::Acquire));
    }
}
