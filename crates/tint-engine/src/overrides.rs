//! Override layers: provider-scoped overrides and ad hoc session edits.
//!
//! Both are sparse and mode-scoped. Stored copies are untrusted; every
//! deserialization goes through a sanitizing pass that keeps what is well
//! formed and drops the rest with a warning.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tint_common::{Mode, ProviderId};
use tint_palette::theme::normalize_style;
use tint_palette::{normalize_color, parse_color, StyleKey, TokenKey};
use tint_targets::sanitize::CssValueKind;
use tracing::warn;

/// Sparse token values for each mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModeMap {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub light: BTreeMap<TokenKey, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub dark: BTreeMap<TokenKey, String>,
}

impl ModeMap {
    pub fn get(&self, mode: Mode) -> &BTreeMap<TokenKey, String> {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    pub fn get_mut(&mut self, mode: Mode) -> &mut BTreeMap<TokenKey, String> {
        match mode {
            Mode::Light => &mut self.light,
            Mode::Dark => &mut self.dark,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }

    /// Rebuild from untrusted JSON. `context` names the owner in warnings.
    pub fn sanitize(raw: &Value, context: &str) -> Self {
        let mut map = ModeMap::default();
        let Some(modes) = raw.as_object() else {
            warn!("dropping {context}: expected an object of modes");
            return map;
        };

        for (mode_name, entries) in modes {
            let mode: Mode = match mode_name.parse() {
                Ok(mode) => mode,
                Err(e) => {
                    warn!("dropping {context}.{mode_name}: {e}");
                    continue;
                }
            };
            let Some(entries) = entries.as_object() else {
                warn!("dropping {context}.{mode}: expected an object of tokens");
                continue;
            };
            for (key, value) in entries {
                let path = format!("{context}.{mode}.{key}");
                if let Some((key, value)) = sanitize_entry(key, value, &path) {
                    map.get_mut(mode).insert(key, value);
                }
            }
        }
        map
    }
}

impl<'de> Deserialize<'de> for ModeMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(ModeMap::sanitize(&raw, "mode map"))
    }
}

/// Check one stored token against its key. Color values are canonicalized;
/// anything that does not parse is dropped.
fn sanitize_entry(key: &str, value: &Value, path: &str) -> Option<(TokenKey, String)> {
    let key: TokenKey = match key.parse() {
        Ok(key) => key,
        Err(e) => {
            warn!("dropping {path}: {e}");
            return None;
        }
    };
    let Some(text) = value.as_str() else {
        warn!("dropping {path}: value is not a string");
        return None;
    };
    match normalize_value(key, text) {
        Some(value) => Some((key, value)),
        None => {
            warn!("dropping {path}: invalid value '{text}'");
            None
        }
    }
}

/// Canonical text for a token value, or `None` when it cannot be used.
///
/// Colors become lowercase hex and lengths become rem. A style value is
/// only accepted when the stylesheet sanitizer would emit it unchanged, so
/// the resolved map and every artifact carry the same text.
pub fn normalize_value(key: TokenKey, value: &str) -> Option<String> {
    match key {
        TokenKey::Style(style) => {
            let value = normalize_style(style, value)?;
            CssValueKind::for_style(style).validate(&value).ok()?;
            Some(value)
        }
        _ => parse_color(value).map(|_| normalize_color(value, None).value),
    }
}

/// Provider-scoped overrides: `provider -> mode -> key -> value`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OverrideRecord(BTreeMap<ProviderId, ModeMap>);

impl OverrideRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from untrusted JSON, dropping unknown modes, unknown keys
    /// and invalid values.
    pub fn sanitize(raw: &Value) -> Self {
        let mut record = OverrideRecord::new();
        let Some(providers) = raw.as_object() else {
            if !raw.is_null() {
                warn!("dropping overrides: expected an object of providers");
            }
            return record;
        };

        for (provider, modes) in providers {
            let map = ModeMap::sanitize(modes, &format!("overrides.{provider}"));
            if !map.is_empty() {
                record.0.insert(ProviderId::new(provider.as_str()), map);
            }
        }
        record
    }

    /// One provider's bucket for one mode.
    pub fn layer(&self, provider: &ProviderId, mode: Mode) -> Option<&BTreeMap<TokenKey, String>> {
        self.0.get(provider).map(|modes| modes.get(mode))
    }

    /// Shallow-merge `entries` into the provider's bucket for `mode`. Other
    /// modes and other providers are untouched.
    pub fn merge(
        &mut self,
        provider: &ProviderId,
        mode: Mode,
        entries: impl IntoIterator<Item = (TokenKey, String)>,
    ) {
        let bucket = self.0.entry(provider.clone()).or_default().get_mut(mode);
        bucket.extend(entries);
        if self.0.get(provider).is_some_and(ModeMap::is_empty) {
            self.0.remove(provider);
        }
    }

    /// Drop one provider's record. Returns whether anything was removed.
    pub fn remove(&mut self, provider: &ProviderId) -> bool {
        self.0.remove(provider).is_some()
    }

    /// Drop every provider's record. Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.0.is_empty();
        self.0.clear();
        had_any
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn providers(&self) -> impl Iterator<Item = &ProviderId> {
        self.0.keys()
    }
}

impl<'de> Deserialize<'de> for OverrideRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(OverrideRecord::sanitize(&raw))
    }
}

/// Edits made directly in the session, on top of provider overrides.
///
/// Color edits are mode-scoped. Style edits (fonts, radius, spacing, shadow,
/// icon set) apply to every mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdHocEdits {
    #[serde(skip_serializing_if = "ModeMap::is_empty")]
    pub colors: ModeMap,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<StyleKey, String>,
}

impl AdHocEdits {
    /// Record an already-normalized value.
    pub fn insert(&mut self, mode: Mode, key: TokenKey, value: String) {
        match key {
            TokenKey::Style(style) => {
                self.style.insert(style, value);
            }
            color => {
                self.colors.get_mut(mode).insert(color, value);
            }
        }
    }

    /// Every edit that applies in `mode`.
    pub fn layer(&self, mode: Mode) -> impl Iterator<Item = (TokenKey, &String)> {
        self.colors
            .get(mode)
            .iter()
            .map(|(k, v)| (*k, v))
            .chain(self.style.iter().map(|(k, v)| (TokenKey::Style(*k), v)))
    }

    /// Drop every edit. Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.is_empty();
        *self = AdHocEdits::default();
        had_any
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.style.is_empty()
    }

    pub fn sanitize(raw: &Value) -> Self {
        let mut edits = AdHocEdits::default();
        let Some(obj) = raw.as_object() else {
            if !raw.is_null() {
                warn!("dropping edits: expected an object");
            }
            return edits;
        };

        if let Some(colors) = obj.get("colors") {
            let sanitized = ModeMap::sanitize(colors, "edits.colors");
            for mode in Mode::ALL {
                for (key, value) in sanitized.get(mode) {
                    if key.is_color() {
                        edits.colors.get_mut(mode).insert(*key, value.clone());
                    } else {
                        warn!("dropping edits.colors.{mode}.{key}: not a color token");
                    }
                }
            }
        }

        if let Some(style) = obj.get("style").and_then(Value::as_object) {
            for (key, value) in style {
                let path = format!("edits.style.{key}");
                match sanitize_entry(key, value, &path) {
                    Some((TokenKey::Style(style), value)) => {
                        edits.style.insert(style, value);
                    }
                    Some(_) => warn!("dropping {path}: not a style token"),
                    None => {}
                }
            }
        }
        edits
    }
}

impl<'de> Deserialize<'de> for AdHocEdits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(AdHocEdits::sanitize(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tint_palette::PaletteSlot;

    fn slot(s: PaletteSlot) -> TokenKey {
        TokenKey::Slot(s)
    }

    #[test]
    fn sanitize_keeps_valid_entries() {
        let raw = json!({
            "vscode": {
                "light": { "background": "#F0F0F0", "radius": " 0.75rem " },
                "dark": { "tx": "rgb(255, 0, 0)" }
            }
        });
        let record = OverrideRecord::sanitize(&raw);
        let vscode = ProviderId::new("vscode");

        let light = record.layer(&vscode, Mode::Light).unwrap();
        assert_eq!(light[&slot(PaletteSlot::Background)], "#f0f0f0");
        assert_eq!(light[&TokenKey::Style(StyleKey::Radius)], "0.75rem");

        let dark = record.layer(&vscode, Mode::Dark).unwrap();
        assert_eq!(dark[&slot(PaletteSlot::Text)], "#ff0000");
    }

    #[test]
    fn sanitize_drops_malformed_entries() {
        let raw = json!({
            "vscode": {
                "sepia": { "background": "#ffffff" },
                "light": {
                    "background": "not-a-color",
                    "sparkle": "#ffffff",
                    "text": 42,
                    "accent": "#00ff00"
                },
                "dark": "oops"
            },
            "empty": { "light": { "nope": "#fff" } }
        });
        let record = OverrideRecord::sanitize(&raw);
        let providers: Vec<_> = record.providers().collect();
        assert_eq!(providers, vec![&ProviderId::new("vscode")]);

        let light = record.layer(&ProviderId::new("vscode"), Mode::Light).unwrap();
        assert_eq!(light.len(), 1);
        assert_eq!(light[&slot(PaletteSlot::Accent)], "#00ff00");
        assert!(record
            .layer(&ProviderId::new("vscode"), Mode::Dark)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn sanitize_rejects_non_objects() {
        assert!(OverrideRecord::sanitize(&json!([1, 2])).is_empty());
        assert!(OverrideRecord::sanitize(&Value::Null).is_empty());
    }

    #[test]
    fn deserialize_goes_through_sanitize() {
        let record: OverrideRecord =
            serde_json::from_str(r##"{"p":{"light":{"background":"#abc","bogus":"x"}}}"##)
                .unwrap();
        let light = record.layer(&ProviderId::new("p"), Mode::Light).unwrap();
        assert_eq!(light.len(), 1);
        assert_eq!(light[&slot(PaletteSlot::Background)], "#aabbcc");
    }

    #[test]
    fn json_round_trip() {
        let mut record = OverrideRecord::new();
        record.merge(
            &ProviderId::new("shadcn"),
            Mode::Dark,
            [(slot(PaletteSlot::Primary), "#123456".to_string())],
        );
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r##"{"shadcn":{"dark":{"primary":"#123456"}}}"##);
        let back: OverrideRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn merge_is_shallow_and_mode_scoped() {
        let p = ProviderId::new("p");
        let mut record = OverrideRecord::new();
        record.merge(&p, Mode::Light, [(slot(PaletteSlot::Text), "#111111".into())]);
        record.merge(&p, Mode::Light, [(slot(PaletteSlot::Background), "#eeeeee".into())]);
        record.merge(&p, Mode::Dark, [(slot(PaletteSlot::Text), "#dddddd".into())]);

        assert_eq!(record.layer(&p, Mode::Light).unwrap().len(), 2);
        assert_eq!(record.layer(&p, Mode::Dark).unwrap().len(), 1);
    }

    #[test]
    fn merging_nothing_leaves_no_empty_bucket() {
        let mut record = OverrideRecord::new();
        record.merge(&ProviderId::new("p"), Mode::Light, Vec::new());
        assert!(record.is_empty());
    }

    #[test]
    fn edits_split_colors_and_style() {
        let mut edits = AdHocEdits::default();
        edits.insert(Mode::Light, slot(PaletteSlot::Text), "#222222".into());
        edits.insert(Mode::Light, TokenKey::Style(StyleKey::Radius), "1rem".into());

        assert_eq!(edits.layer(Mode::Light).count(), 2);
        let dark: Vec<_> = edits.layer(Mode::Dark).collect();
        assert_eq!(dark, vec![(TokenKey::Style(StyleKey::Radius), &"1rem".to_string())]);
    }

    #[test]
    fn edits_sanitize_rejects_misplaced_keys() {
        let raw = json!({
            "colors": { "light": { "text": "#222", "radius": "1rem" } },
            "style": { "font-body": "Inter", "background": "#000" }
        });
        let edits = AdHocEdits::sanitize(&raw);
        assert_eq!(edits.colors.light.len(), 1);
        assert_eq!(edits.colors.light[&slot(PaletteSlot::Text)], "#222222");
        assert_eq!(edits.style.len(), 1);
        assert_eq!(edits.style[&StyleKey::FontBody], "Inter");
    }

    #[test]
    fn normalize_value_by_key_kind() {
        assert_eq!(
            normalize_value(slot(PaletteSlot::Red), "#FFF").as_deref(),
            Some("#ffffff")
        );
        assert_eq!(normalize_value(slot(PaletteSlot::Red), "blue"), None);
        assert_eq!(
            normalize_value(TokenKey::Style(StyleKey::Shadow), " none ").as_deref(),
            Some("none")
        );
        assert_eq!(normalize_value(TokenKey::Style(StyleKey::Shadow), "  "), None);
    }

    #[test]
    fn normalize_value_canonicalizes_style_tokens() {
        let radius = TokenKey::Style(StyleKey::Radius);
        assert_eq!(normalize_value(radius, "12").as_deref(), Some("12rem"));
        assert_eq!(normalize_value(radius, "4px").as_deref(), Some("0.25rem"));
        assert_eq!(normalize_value(radius, "abc"), None);
        assert_eq!(normalize_value(TokenKey::Style(StyleKey::Spacing), "wide"), None);
        assert_eq!(normalize_value(TokenKey::Style(StyleKey::Shadow), "url(x)"), None);
        assert_eq!(normalize_value(TokenKey::Style(StyleKey::IconSet), "Lucide Icons"), None);
        assert_eq!(
            normalize_value(TokenKey::Style(StyleKey::FontBody), "Inter; } body {"),
            None
        );
        assert_eq!(
            normalize_value(TokenKey::Style(StyleKey::IconSet), "phosphor").as_deref(),
            Some("phosphor")
        );
    }

    #[test]
    fn sanitize_drops_unusable_style_values() {
        let edits = AdHocEdits::sanitize(&json!({
            "style": { "radius": "huge", "spacing": "8px" }
        }));
        assert_eq!(edits.style.len(), 1);
        assert_eq!(edits.style[&StyleKey::Spacing], "0.5rem");
    }
}
