//! Static mapping tables consulted by the generators.

pub mod ansi;
pub mod labels;
pub mod neovim;
pub mod vscode;

pub use ansi::{ansi_colors, ansi_slots, TerminalChrome, ANSI_NAMES};
pub use labels::label;
