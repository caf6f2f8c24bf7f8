//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::border::BorderStyle;
use crate::style::Color;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub spinner: SpinnerConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
}

/// Theme selection and overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Preset name: standard, classic or ocean
    #[serde(default = "default_preset")]
    pub preset: String,
    /// Replaces the preset's border style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_style: Option<BorderStyle>,
    /// Replaces the preset's border colour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
}

pub fn default_preset() -> String {
    "standard".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            border_style: None,
            border_color: None,
        }
    }
}

/// Spinner defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinnerConfig {
    /// Frame set name
    #[serde(default = "default_spinner_kind")]
    pub kind: String,
    /// Frame colour; the theme accent when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

pub fn default_spinner_kind() -> String {
    "dots".to_string()
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            kind: default_spinner_kind(),
            color: None,
        }
    }
}

/// Progress bar defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Cells between the brackets
    #[serde(default = "default_progress_width")]
    pub width: usize,
    #[serde(default = "default_complete_char")]
    pub complete_char: String,
    #[serde(default = "default_incomplete_char")]
    pub incomplete_char: String,
    /// Filled colour; the theme's success colour when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complete_color: Option<Color>,
    /// Empty colour; the theme's muted colour when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incomplete_color: Option<Color>,
    #[serde(default = "default_show_percentage")]
    pub show_percentage: bool,
    #[serde(default)]
    pub show_value: bool,
}

pub fn default_progress_width() -> usize {
    40
}

pub fn default_complete_char() -> String {
    "█".to_string()
}

pub fn default_incomplete_char() -> String {
    "░".to_string()
}

pub fn default_show_percentage() -> bool {
    true
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            width: default_progress_width(),
            complete_char: default_complete_char(),
            incomplete_char: default_incomplete_char(),
            complete_color: None,
            incomplete_color: None,
            show_percentage: default_show_percentage(),
            show_value: false,
        }
    }
}
