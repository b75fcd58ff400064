//! Configuration schema types for tint.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults below.

mod export;
mod logging;
mod storage;
mod theme;

pub use export::*;
pub use logging::*;
pub use storage::*;
pub use theme::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the `tint` binary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TintConfig {
    pub theme: ThemeConfig,
    pub export: ExportConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}
