//! Wire form of a theme, as written in YAML/JSON files and stored snapshots.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tint_common::{Mode, ThemeError, ThemeId, UserId};

use super::defaults::{self, DEFAULT_THEME};
use super::presets;
use super::types::{slugify, Theme, Typography};
use crate::slots::ChartPalette;
use crate::syntax::TokenMapId;

/// Loosely-typed theme input.
///
/// Every field is optional so partial files work. Missing values come from
/// the `base` preset (`flexoki` when unset).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    pub light: BTreeMap<String, String>,
    pub dark: BTreeMap<String, String>,
    pub charts: ChartsDocument,
    pub typography: TypographyDocument,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_map: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsDocument {
    pub light: BTreeMap<String, String>,
    pub dark: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl TryFrom<ThemeDocument> for Theme {
    type Error = ThemeError;

    fn try_from(doc: ThemeDocument) -> Result<Self, Self::Error> {
        let name = doc.name.trim().to_string();
        if name.is_empty() {
            return Err(ThemeError::Invalid("theme name must not be empty".into()));
        }
        check_label("name", &name)?;
        if let Some(display_name) = &doc.display_name {
            check_label("display_name", display_name)?;
        }

        let base_name = doc.base.as_deref().unwrap_or(DEFAULT_THEME);
        let base = presets::preset(base_name)
            .ok_or_else(|| ThemeError::Invalid(format!("unknown base theme '{base_name}'")))?;

        let light = defaults::complete_palette(&base.light, &doc.light, Mode::Light)?;
        let dark = defaults::complete_palette(&base.dark, &doc.dark, Mode::Dark)?;
        let light_charts = defaults::complete_charts(
            &ChartPalette::from_palette(&light),
            &doc.charts.light,
            Mode::Light,
        )?;
        let dark_charts = defaults::complete_charts(
            &ChartPalette::from_palette(&dark),
            &doc.charts.dark,
            Mode::Dark,
        )?;

        let token_map = match doc.token_map.as_deref() {
            Some(id) => id.parse::<TokenMapId>()?,
            None => base.token_map,
        };

        let id = match doc.id.filter(|id| !id.trim().is_empty()) {
            Some(id) => ThemeId::from_string(id),
            // Files without an id keep a stable identity across loads
            None => ThemeId::from_string(format!("theme-{}", slugify(&name))),
        };

        Ok(Theme {
            id,
            display_name: defaults::text_or(doc.display_name, &name),
            owner: doc.owner.filter(|o| !o.trim().is_empty()).map(UserId::new),
            light,
            dark,
            light_charts,
            dark_charts,
            typography: Typography {
                heading: defaults::text_or(doc.typography.heading, &base.typography.heading),
                body: defaults::text_or(doc.typography.body, &base.typography.body),
            },
            radius: defaults::length_or("radius", doc.radius, base.radius),
            spacing: defaults::length_or("spacing", doc.spacing, base.spacing),
            shadow: defaults::text_or(doc.shadow, &base.shadow),
            icon_set: defaults::text_or(doc.icon_set, &base.icon_set),
            token_map,
            name,
        })
    }
}

/// Names end up in artifact headers and comments; a line break there
/// would add lines to the generated config.
fn check_label(field: &str, value: &str) -> Result<(), ThemeError> {
    if value.chars().any(char::is_control) {
        return Err(ThemeError::Invalid(format!(
            "{field} must not contain control characters"
        )));
    }
    Ok(())
}

impl From<Theme> for ThemeDocument {
    fn from(theme: Theme) -> Self {
        ThemeDocument {
            id: Some(theme.id.as_str().to_string()),
            display_name: Some(theme.display_name),
            owner: theme.owner.map(|o| o.as_str().to_string()),
            base: None,
            light: theme.light.to_key_map(),
            dark: theme.dark.to_key_map(),
            charts: ChartsDocument {
                light: theme.light_charts.to_key_map(),
                dark: theme.dark_charts.to_key_map(),
            },
            typography: TypographyDocument {
                heading: Some(theme.typography.heading),
                body: Some(theme.typography.body),
            },
            radius: Some(theme.radius),
            spacing: Some(theme.spacing),
            shadow: Some(theme.shadow),
            icon_set: Some(theme.icon_set),
            token_map: Some(theme.token_map.as_str().to_string()),
            name: theme.name,
        }
    }
}
