//! Theme selection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Built-in theme name, user theme name or path to a theme file.
    pub name: String,
    /// Provider whose stored overrides apply, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "flexoki".into(),
            provider: None,
        }
    }
}
