//! Override resolution and persistence.
//!
//! A [`ThemeSession`] holds one theme plus two sparse layers on top of it:
//! provider-scoped overrides and ad hoc edits. [`resolve`] merges the three
//! into a [`ResolvedTokenMap`] for one mode; the session recomputes it after
//! every change. Everything here is synchronous except the storage boundary
//! in [`store`] and the debounced [`Autosaver`].

pub mod autosave;
pub mod overrides;
pub mod resolve;
pub mod session;
pub mod store;

pub use autosave::{Autosaver, SaveOutcome, SaveReport, SaveRequest};
pub use overrides::{AdHocEdits, ModeMap, OverrideRecord};
pub use resolve::{resolve, ResolvedTokenMap};
pub use session::{SessionState, ThemeSession};
pub use store::{
    choose_startup_snapshot, FileThemeStore, ListFilter, MemoryThemeStore, SavedTheme, Snapshot,
    SnapshotFile, ThemeStore, Visibility,
};
