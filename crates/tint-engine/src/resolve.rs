//! The three-layer merge that produces resolved token maps.

use std::collections::BTreeMap;

use serde::Serialize;
use tint_common::{Mode, ProviderId};
use tint_palette::{Theme, TokenKey};

use crate::overrides::{AdHocEdits, OverrideRecord};

/// Every token of one mode with its final value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTokenMap {
    pub mode: Mode,
    pub tokens: BTreeMap<TokenKey, String>,
}

impl ResolvedTokenMap {
    pub fn get(&self, key: TokenKey) -> Option<&str> {
        self.tokens.get(&key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenKey, &str)> {
        self.tokens.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Plain `key -> value` strings, for hosts applying style properties.
    pub fn to_key_map(&self) -> BTreeMap<String, String> {
        self.tokens
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    /// Write the resolved values into `theme` for this map's mode.
    ///
    /// Values are already normalized, so a rejected write means the theme
    /// and the map disagree on a key's format; it is logged and skipped.
    pub fn apply_to(&self, theme: &mut Theme) {
        for (key, value) in &self.tokens {
            if !theme.apply_token(self.mode, *key, value) {
                tracing::warn!("resolved value for {key} was rejected: '{value}'");
            }
        }
    }
}

/// Merge the base tokens of `theme` for `mode`, then the selected
/// provider's overrides for `mode`, then the session edits that apply in
/// `mode`. Later layers win key by key.
pub fn resolve(
    theme: &Theme,
    mode: Mode,
    provider: Option<&ProviderId>,
    overrides: &OverrideRecord,
    edits: &AdHocEdits,
) -> ResolvedTokenMap {
    let mut tokens = theme.base_tokens(mode);

    if let Some(layer) = provider.and_then(|p| overrides.layer(p, mode)) {
        for (key, value) in layer {
            tokens.insert(*key, value.clone());
        }
    }

    for (key, value) in edits.layer(mode) {
        tokens.insert(key, value.clone());
    }

    ResolvedTokenMap { mode, tokens }
}
