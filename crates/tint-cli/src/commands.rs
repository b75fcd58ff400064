//! Subcommand implementations.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tint_common::{ProviderId, TintError, UserId};
use tint_config::TintConfig;
use tint_engine::{
    choose_startup_snapshot, AdHocEdits, Autosaver, FileThemeStore, ListFilter, SaveReport,
    SaveRequest, SavedTheme, Snapshot, SnapshotFile, ThemeSession, ThemeStore, Visibility,
};
use tint_palette::load_theme;
use tint_palette::theme::slugify;
use tint_targets::Target;
use tracing::{debug, info, warn};

use crate::cli::SessionArgs;

// =============================================================================
// Sessions
// =============================================================================

/// Build a session from the configured defaults and the command line.
pub fn open_session(config: &TintConfig, args: &SessionArgs) -> Result<ThemeSession, TintError> {
    let name = args.theme.as_deref().unwrap_or(&config.theme.name);
    let theme = load_theme(name)?;
    let mode = args.mode.unwrap_or(config.export.mode);
    let mut session = ThemeSession::new(theme, mode);

    let provider = args
        .provider
        .clone()
        .or_else(|| config.theme.provider.clone())
        .map(ProviderId::new);
    match &provider {
        Some(provider) if !args.overrides.is_empty() => {
            session.set_provider_override(provider, args.overrides.iter().cloned());
        }
        None if !args.overrides.is_empty() => {
            warn!("--override needs a provider; ignoring {} entries", args.overrides.len());
        }
        _ => {}
    }
    session.select_provider(provider);

    for (key, value) in &args.edits {
        session.edit_token(*key, value);
    }
    Ok(session)
}

// =============================================================================
// Artifacts
// =============================================================================

pub fn list_targets() -> String {
    Target::ALL
        .iter()
        .map(|t| format!("{:<18}{}\n", t.slug(), t.description()))
        .collect()
}

/// Write `content` to `out`, or to stdout when there is no path.
pub fn write_or_print(out: Option<&Path>, content: &str) -> Result<(), TintError> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, content)?;
            info!("wrote {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}

/// Render `targets` for both modes into `out_dir`. Targets covering both
/// modes are written once. Returns the written paths.
pub fn export(
    session: &mut ThemeSession,
    targets: &[Target],
    out_dir: &Path,
) -> Result<Vec<PathBuf>, TintError> {
    std::fs::create_dir_all(out_dir)?;
    let name = slugify(&session.theme().name);
    let start = session.mode();

    let mut written = Vec::new();
    for mode in [start, start.other()] {
        session.set_mode(mode);
        for target in targets {
            if target.covers_both_modes() && mode != start {
                continue;
            }
            let path = out_dir.join(target.file_name(&name, mode));
            std::fs::write(&path, session.render(*target)?)?;
            debug!("wrote {}", path.display());
            written.push(path);
        }
    }
    session.set_mode(start);

    info!("exported {} files to {}", written.len(), out_dir.display());
    Ok(written)
}

pub fn resolve_json(session: &ThemeSession) -> Result<String, TintError> {
    serde_json::to_string_pretty(session.resolved())
        .map(|json| json + "\n")
        .map_err(|e| TintError::Other(format!("failed to serialize token map: {e}")))
}

pub fn random(seed: Option<u64>, out: Option<&Path>) -> Result<(), TintError> {
    let theme = tint_palette::random_theme(seed);
    match out {
        Some(path) => tint_palette::theme::save_theme_to_path(&theme, path)?,
        None => {
            let yaml = serde_yaml::to_string(&theme)
                .map_err(|e| TintError::Other(format!("failed to serialize theme: {e}")))?;
            print!("{yaml}");
        }
    }
    Ok(())
}

// =============================================================================
// Storage
// =============================================================================

fn storage(config: &TintConfig) -> Result<(FileThemeStore, SnapshotFile), TintError> {
    let missing = || TintError::Other("could not determine a data directory".into());
    let themes = config.storage.themes_dir().ok_or_else(missing)?;
    let snapshot = config.storage.snapshot_path().ok_or_else(missing)?;
    Ok((FileThemeStore::new(themes), SnapshotFile::new(snapshot)))
}

/// Save the session through the autosave worker, bypassing its debounce.
pub async fn save(
    config: &TintConfig,
    mut session: ThemeSession,
    user: Option<UserId>,
    visibility: Visibility,
) -> Result<SaveReport, TintError> {
    if let Some(user) = &user {
        session.commit(user);
    }

    let (store, snapshot_file) = storage(config)?;
    let saver = Autosaver::spawn(
        Arc::new(store),
        Some(snapshot_file),
        Duration::from_millis(config.storage.autosave_debounce_ms),
        session.saving_flag(),
    );
    let report = saver
        .save_now(SaveRequest {
            revision: session.revision(),
            snapshot: session.snapshot(),
            visibility,
        })
        .await;
    saver.shutdown();

    if report.is_saved() {
        session.mark_persisted(report.revision);
    }
    Ok(report)
}

pub async fn list(config: &TintConfig, filter: &ListFilter) -> Result<Vec<SavedTheme>, TintError> {
    let (store, _) = storage(config)?;
    Ok(store.list(filter).await?)
}

/// The snapshot a host would start from: the local snapshot when it names
/// the stored theme, otherwise the most recent stored save of the
/// configured theme.
pub async fn startup_snapshot(config: &TintConfig) -> Result<Option<Snapshot>, TintError> {
    let (store, snapshot_file) = storage(config)?;

    let local = match snapshot_file.load().await {
        Ok(local) => local,
        Err(e) => {
            warn!("ignoring unreadable snapshot: {e}");
            None
        }
    };

    let filter = ListFilter {
        name_contains: Some(config.theme.name.clone()),
        ..Default::default()
    };
    let remote = store
        .list(&filter)
        .await?
        .into_iter()
        .filter(|saved| saved.theme.name == config.theme.name)
        .max_by_key(|saved| saved.saved_at)
        .map(|saved| {
            Snapshot::new(
                saved.theme,
                config.export.mode,
                config.theme.provider.clone().map(ProviderId::new),
                saved.overrides,
                AdHocEdits::default(),
            )
        });

    Ok(choose_startup_snapshot(remote, local))
}

pub fn describe_saved(saved: &SavedTheme) -> String {
    let visibility = match saved.visibility {
        Visibility::Private => "private",
        Visibility::Public => "public",
    };
    format!(
        "{:<40}{:<24}{:<9}{}",
        saved.theme.id.as_str(),
        saved.theme.name,
        visibility,
        saved.saved_at.format("%Y-%m-%d %H:%M:%S")
    )
}

pub fn describe_session(session: &ThemeSession) -> String {
    let providers: Vec<&str> = session
        .overrides()
        .providers()
        .map(ProviderId::as_str)
        .collect();
    format!(
        "theme:     {} ({})\nmode:      {}\nprovider:  {}\noverrides: {}\nedits:     {}\n",
        session.theme().name,
        session.theme().id,
        session.mode(),
        session.provider().map_or("none", ProviderId::as_str),
        if providers.is_empty() {
            "none".to_string()
        } else {
            providers.join(", ")
        },
        if session.edits().is_empty() {
            "none"
        } else {
            "pending"
        },
    )
}
