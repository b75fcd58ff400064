use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use tint_common::Mode;
use tint_palette::TokenKey;
use tint_targets::Target;

/// tint: compile one theme into editor, terminal and CSS artifacts.
#[derive(Parser, Debug)]
#[command(name = "tint", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `tint=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every output target.
    Targets,

    /// Render one target to stdout or a file.
    Render {
        #[command(flatten)]
        session: SessionArgs,

        #[arg(short, long)]
        target: Target,

        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Write every configured target for both modes.
    Export {
        #[command(flatten)]
        session: SessionArgs,

        /// Defaults to `export.out_dir`.
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Print the resolved token map as JSON.
    Resolve {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Generate a random theme as YAML.
    Random {
        #[arg(long)]
        seed: Option<u64>,

        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Save the theme with its overrides and write the local snapshot.
    Save {
        #[command(flatten)]
        session: SessionArgs,

        /// Fold edits into the theme on behalf of this user, forking it
        /// when the user does not own it.
        #[arg(long)]
        user: Option<String>,

        #[arg(long)]
        public: bool,
    },

    /// List saved themes.
    List {
        #[arg(long)]
        public: bool,

        /// Only themes whose name contains this text.
        #[arg(long)]
        name: Option<String>,
    },

    /// Show the session a host would restore on startup.
    Status,
}

/// Options that build an editing session.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Theme name or path. Defaults to `theme.name`.
    #[arg(long)]
    pub theme: Option<String>,

    /// Defaults to `export.mode`.
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Provider whose overrides apply. Defaults to `theme.provider`.
    #[arg(long)]
    pub provider: Option<String>,

    /// Session edit for the active mode, `key=value`. Repeatable.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub edits: Vec<(TokenKey, String)>,

    /// Provider override for the active mode, `key=value`. Repeatable.
    #[arg(long = "override", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub overrides: Vec<(TokenKey, String)>,
}

/// Parse `key=value` with a known token key.
pub fn parse_assignment(s: &str) -> Result<(TokenKey, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{s}'"))?;
    let key = key.trim().parse::<TokenKey>().map_err(|e| e.to_string())?;
    Ok((key, value.trim().to_string()))
}

pub fn parse() -> Args {
    Args::parse()
}
