use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::UITheme;

/// Mutable theme value derived from a preset.
///
/// Every field is an owned string so callers can override colors one by one
/// after construction. Serialization is stable JSON; deserialization
/// tolerates partial payloads (missing keys fall back to the dark preset's
/// values) and reports malformed input as `None`, never as a panic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeTheme {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_up_body")]
    pub candle_up_body: String,
    #[serde(default = "default_up_wick")]
    pub candle_up_wick: String,
    #[serde(default = "default_down_body")]
    pub candle_down_body: String,
    #[serde(default = "default_down_wick")]
    pub candle_down_wick: String,
    #[serde(default = "default_accent")]
    pub accent: String,
    #[serde(default = "default_grid")]
    pub grid: String,
    #[serde(default = "default_text")]
    pub text: String,
}

fn default_name() -> String {
    UITheme::dark().name.to_owned()
}
fn default_background() -> String {
    UITheme::dark().background.to_owned()
}
fn default_up_body() -> String {
    UITheme::dark().candle_up_body.to_owned()
}
fn default_up_wick() -> String {
    UITheme::dark().candle_up_wick.to_owned()
}
fn default_down_body() -> String {
    UITheme::dark().candle_down_body.to_owned()
}
fn default_down_wick() -> String {
    UITheme::dark().candle_down_wick.to_owned()
}
fn default_accent() -> String {
    UITheme::dark().accent.to_owned()
}
fn default_grid() -> String {
    UITheme::dark().grid.to_owned()
}
fn default_text() -> String {
    UITheme::dark().text.to_owned()
}

impl RuntimeTheme {
    /// Catalog names accepted by [`RuntimeTheme::from_preset`], in a fixed order.
    pub const PRESETS: &'static [&'static str] = &["dark", "light", "high_contrast", "cyberpunk"];

    /// Builds a runtime theme from a preset name.
    ///
    /// Unknown names are a configuration error; the engine never substitutes
    /// a default silently.
    pub fn from_preset(name: &str) -> ChartResult<Self> {
        UITheme::by_name(name)
            .map(Self::from)
            .ok_or_else(|| ChartError::UnknownPreset(name.to_owned()))
    }

    #[must_use]
    pub fn presets() -> &'static [&'static str] {
        Self::PRESETS
    }

    /// Serializes the theme to JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Deserializes a theme from JSON; malformed payloads yield `None`.
    #[must_use]
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }
}

impl Default for RuntimeTheme {
    fn default() -> Self {
        Self::from(UITheme::dark())
    }
}

impl From<UITheme> for RuntimeTheme {
    fn from(preset: UITheme) -> Self {
        Self {
            name: preset.name.to_owned(),
            background: preset.background.to_owned(),
            candle_up_body: preset.candle_up_body.to_owned(),
            candle_up_wick: preset.candle_up_wick.to_owned(),
            candle_down_body: preset.candle_down_body.to_owned(),
            candle_down_wick: preset.candle_down_wick.to_owned(),
            accent: preset.accent.to_owned(),
            grid: preset.grid.to_owned(),
            text: preset.text.to_owned(),
        }
    }
}
