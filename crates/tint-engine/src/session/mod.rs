//! The editing session: one theme, its override layers and the current
//! resolved token map.
//!
//! Every mutation ends in [`ThemeSession::recompute`], the only place a new
//! resolved map is produced. The map is replaced whole, never patched.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tint_common::{Mode, ProviderId, RenderError, UserId};
use tint_palette::{Ownership, SemanticPalette, Theme, TokenKey};
use tint_targets::{GeneratorInput, Target};
use tracing::{debug, info, warn};

use crate::overrides::{normalize_value, AdHocEdits, OverrideRecord};
use crate::resolve::{resolve, ResolvedTokenMap};
use crate::store::Snapshot;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The resolved map reflects base plus overrides and everything is
    /// persisted.
    Idle,
    /// A change has been applied in memory but not yet persisted.
    Editing,
    /// Recomputing for a new mode.
    ModeSwitching,
    /// Dropping override layers.
    Resetting,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::Idle => "idle",
            SessionState::Editing => "editing",
            SessionState::ModeSwitching => "mode-switching",
            SessionState::Resetting => "resetting",
        };
        f.write_str(s)
    }
}

#[derive(Debug)]
pub struct ThemeSession {
    theme: Theme,
    mode: Mode,
    provider: Option<ProviderId>,
    overrides: OverrideRecord,
    edits: AdHocEdits,
    resolved: ResolvedTokenMap,
    state: SessionState,
    revision: u64,
    persisted_revision: u64,
    saving: Arc<AtomicBool>,
}

impl ThemeSession {
    pub fn new(theme: Theme, mode: Mode) -> Self {
        let overrides = OverrideRecord::new();
        let edits = AdHocEdits::default();
        let resolved = resolve(&theme, mode, None, &overrides, &edits);
        Self {
            theme,
            mode,
            provider: None,
            overrides,
            edits,
            resolved,
            state: SessionState::Idle,
            revision: 0,
            persisted_revision: 0,
            saving: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Restore a session from a stored snapshot. The restored state counts
    /// as persisted.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut session = ThemeSession::new(snapshot.theme, snapshot.mode);
        session.provider = snapshot.provider;
        session.overrides = snapshot.overrides;
        session.edits = snapshot.edits;
        session.recompute();
        info!(
            "restored session for theme '{}' ({})",
            session.theme.name, session.mode
        );
        session
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn provider(&self) -> Option<&ProviderId> {
        self.provider.as_ref()
    }

    pub fn overrides(&self) -> &OverrideRecord {
        &self.overrides
    }

    pub fn edits(&self) -> &AdHocEdits {
        &self.edits
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The resolved token map for the active mode.
    pub fn resolved(&self) -> &ResolvedTokenMap {
        &self.resolved
    }

    /// Increases with every change that should reach storage.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_dirty(&self) -> bool {
        self.revision != self.persisted_revision
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Switch the active mode. Provider overrides and color edits of the
    /// new mode apply; those of the old mode stay recorded but inactive.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        self.transition(SessionState::ModeSwitching);
        self.mode = mode;
        self.bump();
        self.recompute();
        self.settle();
    }

    /// Record a session edit for the active mode.
    ///
    /// Values are normalized first; one that does not normalize for `key`
    /// leaves the session unchanged. Returns whether an edit was recorded.
    pub fn edit_token(&mut self, key: TokenKey, value: &str) -> bool {
        let Some(value) = normalize_value(key, value) else {
            warn!("ignoring invalid value for {key}: '{value}'");
            return false;
        };
        self.transition(SessionState::Editing);
        self.edits.insert(self.mode, key, value);
        self.bump();
        self.recompute();
        true
    }

    /// Shallow-merge `entries` into `provider`'s bucket for the active mode.
    /// Invalid values are dropped. Returns how many entries were merged.
    pub fn set_provider_override(
        &mut self,
        provider: &ProviderId,
        entries: impl IntoIterator<Item = (TokenKey, String)>,
    ) -> usize {
        let accepted: Vec<(TokenKey, String)> = entries
            .into_iter()
            .filter_map(|(key, value)| match normalize_value(key, &value) {
                Some(normalized) => Some((key, normalized)),
                None => {
                    warn!("dropping override {provider}.{}.{key}: '{value}'", self.mode);
                    None
                }
            })
            .collect();
        if accepted.is_empty() {
            return 0;
        }

        let count = accepted.len();
        self.transition(SessionState::Editing);
        self.overrides.merge(provider, self.mode, accepted);
        self.bump();
        self.recompute();
        count
    }

    /// Choose whose overrides apply, or none.
    pub fn select_provider(&mut self, provider: Option<ProviderId>) {
        if provider == self.provider {
            return;
        }
        debug!(
            "provider: {} -> {}",
            display_provider(self.provider.as_ref()),
            display_provider(provider.as_ref())
        );
        self.provider = provider;
        self.bump();
        self.recompute();
        self.settle();
    }

    /// Drop one provider's overrides, or all of them. Session edits are
    /// kept.
    pub fn reset_overrides(&mut self, provider: Option<&ProviderId>) {
        self.transition(SessionState::Resetting);
        let changed = match provider {
            Some(p) => self.overrides.remove(p),
            None => self.overrides.clear(),
        };
        if changed {
            self.bump();
        }
        self.recompute();
        self.settle();
    }

    /// Drop every session edit. Provider overrides are kept.
    pub fn reset_tokens(&mut self) {
        self.transition(SessionState::Resetting);
        if self.edits.clear() {
            self.bump();
        }
        self.recompute();
        self.settle();
    }

    /// Replace the theme wholesale (preset pick, generated theme, load).
    ///
    /// Layers recorded against the previous theme are dropped with it.
    pub fn replace_theme(&mut self, theme: Theme) {
        info!("replacing theme '{}' with '{}'", self.theme.name, theme.name);
        self.transition(SessionState::Resetting);
        self.theme = theme;
        self.overrides.clear();
        self.edits.clear();
        self.bump();
        self.recompute();
        self.settle();
    }

    /// Whether committing edits on behalf of `user` must fork the theme.
    pub fn requires_fork(&self, user: &UserId) -> bool {
        self.theme.ownership(user).requires_fork()
    }

    /// Fold the session edits into the theme itself.
    ///
    /// A theme owned by `user` is updated in place; any other theme is
    /// copied to a new identity owned by `user` first. Provider overrides
    /// stay layered. Returns the ownership that decided the outcome.
    pub fn commit(&mut self, user: &UserId) -> Ownership {
        let ownership = self.theme.ownership(user);
        let mut theme = if ownership.requires_fork() {
            let forked = self.theme.fork_for(user);
            info!(
                "forking theme '{}' ({} -> {}) for {user}",
                self.theme.name, self.theme.id, forked.id
            );
            forked
        } else {
            self.theme.clone()
        };

        let base = OverrideRecord::new();
        for mode in Mode::ALL {
            resolve(&self.theme, mode, None, &base, &self.edits).apply_to(&mut theme);
        }

        self.theme = theme;
        self.edits.clear();
        self.bump();
        self.recompute();
        self.settle();
        ownership
    }

    // =========================================================================
    // Outputs
    // =========================================================================

    /// Resolved palette of any mode, including that mode's layers.
    pub fn palette_for(&self, mode: Mode) -> SemanticPalette {
        *self.resolved_theme_for(&[mode]).palette(mode)
    }

    /// Generator input built from both resolved modes.
    pub fn generator_input(&self) -> GeneratorInput {
        // active mode last so its style layers win
        let theme = self.resolved_theme_for(&[self.mode.other(), self.mode]);
        GeneratorInput::from_theme(&theme, self.mode)
    }

    pub fn render(&self, target: Target) -> Result<String, RenderError> {
        target.render(&self.generator_input())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.theme.clone(),
            self.mode,
            self.provider.clone(),
            self.overrides.clone(),
            self.edits.clone(),
        )
    }

    // =========================================================================
    // Persistence bookkeeping
    // =========================================================================

    /// Shared flag set while a save for this session is in flight.
    pub fn saving_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.saving)
    }

    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::Acquire)
    }

    /// Record that `revision` reached storage. Older acknowledgements are
    /// ignored, so a slow save cannot mark newer edits as persisted.
    pub fn mark_persisted(&mut self, revision: u64) {
        if revision > self.revision || revision <= self.persisted_revision {
            return;
        }
        self.persisted_revision = revision;
        debug!("persisted revision {revision} of {}", self.revision);
        self.settle();
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// The single path to a new resolved map.
    fn recompute(&mut self) {
        self.resolved = resolve(
            &self.theme,
            self.mode,
            self.provider.as_ref(),
            &self.overrides,
            &self.edits,
        );
    }

    /// A copy of the theme with the layers of each mode in `modes` applied,
    /// in order.
    fn resolved_theme_for(&self, modes: &[Mode]) -> Theme {
        let mut theme = self.theme.clone();
        for mode in modes {
            let resolved = if *mode == self.mode {
                self.resolved.clone()
            } else {
                resolve(
                    &self.theme,
                    *mode,
                    self.provider.as_ref(),
                    &self.overrides,
                    &self.edits,
                )
            };
            resolved.apply_to(&mut theme);
        }
        theme
    }

    fn bump(&mut self) {
        self.revision += 1;
    }

    fn transition(&mut self, next: SessionState) {
        if self.state != next {
            debug!("session: {} -> {}", self.state, next);
            self.state = next;
        }
    }

    /// Leave a transient state for `Editing` or `Idle`.
    fn settle(&mut self) {
        let next = if self.is_dirty() {
            SessionState::Editing
        } else {
            SessionState::Idle
        };
        self.transition(next);
    }
}

fn display_provider(provider: Option<&ProviderId>) -> &str {
    provider.map_or("none", ProviderId::as_str)
}
