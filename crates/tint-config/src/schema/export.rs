//! Artifact export settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tint_common::Mode;
use tint_targets::Target;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Mode used when a command does not name one.
    pub mode: Mode,
    /// Targets written by `tint export`, in order.
    pub targets: Vec<Target>,
    pub out_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Light,
            targets: Target::ALL.to_vec(),
            out_dir: PathBuf::from("tint-out"),
        }
    }
}
