//! Colour themes.
//!
//! A theme bundles the colours the components reach for by role (accent,
//! muted text, status symbols) plus a default border. Components take a
//! theme through their `theme()` builder; nothing reads a global.

use tracing::debug;

use crate::border::BorderStyle;
use crate::style::Color;

/// Theme configuration for boxes, tables, spinners and prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Highlights: table headers, spinner frames, prompt text, selections
    pub accent: Color,
    /// Secondary text: placeholders, empty progress, disabled choices
    pub muted: Color,
    /// Success symbol and completed progress
    pub success: Color,
    /// Failure symbol and validation errors
    pub error: Color,
    /// Warning symbol and confirm prompts
    pub warning: Color,
    /// Border glyph set for boxes and tables
    pub border_style: BorderStyle,
    /// Border colour (None leaves borders unstyled)
    pub border_color: Option<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// Cyan accents, single borders.
    pub fn standard() -> Self {
        Self {
            accent: Color::from("cyan"),
            muted: Color::from("gray"),
            success: Color::from("green"),
            error: Color::from("red"),
            warning: Color::from("yellow"),
            border_style: BorderStyle::Single,
            border_color: None,
        }
    }

    /// Plain ASCII borders with yellow accents.
    pub fn classic() -> Self {
        Self {
            accent: Color::from("yellow"),
            border_style: BorderStyle::Classic,
            ..Self::standard()
        }
    }

    /// Rounded cyan borders.
    pub fn ocean() -> Self {
        Self {
            accent: Color::from("brightCyan"),
            muted: Color::from("blue"),
            border_style: BorderStyle::Round,
            border_color: Some(Color::from("cyan")),
            ..Self::standard()
        }
    }

    /// Look up a preset by name, falling back to `standard`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "standard" | "default" => Self::standard(),
            "classic" => Self::classic(),
            "ocean" => Self::ocean(),
            other => {
                debug!(theme = other, "Unknown theme preset, using standard");
                Self::standard()
            }
        }
    }
}
