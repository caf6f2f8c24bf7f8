//! Border glyph sets shared by boxes and tables.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Named border style. Unknown names parse as [`BorderStyle::Single`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BorderStyle {
    #[default]
    Single,
    Double,
    Round,
    Bold,
    Classic,
}

/// Corner, edge and junction glyphs for one border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
    pub top_join: &'static str,
    pub bottom_join: &'static str,
    pub left_join: &'static str,
    pub right_join: &'static str,
    pub cross: &'static str,
}

pub const SINGLE: BorderChars = BorderChars {
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
    horizontal: "─",
    vertical: "│",
    top_join: "┬",
    bottom_join: "┴",
    left_join: "├",
    right_join: "┤",
    cross: "┼",
};

pub const DOUBLE: BorderChars = BorderChars {
    top_left: "╔",
    top_right: "╗",
    bottom_left: "╚",
    bottom_right: "╝",
    horizontal: "═",
    vertical: "║",
    top_join: "╦",
    bottom_join: "╩",
    left_join: "╠",
    right_join: "╣",
    cross: "╬",
};

pub const ROUND: BorderChars = BorderChars {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    ..SINGLE
};

pub const BOLD: BorderChars = BorderChars {
    top_left: "┏",
    top_right: "┓",
    bottom_left: "┗",
    bottom_right: "┛",
    horizontal: "━",
    vertical: "┃",
    top_join: "┳",
    bottom_join: "┻",
    left_join: "┣",
    right_join: "┫",
    cross: "╋",
};

pub const CLASSIC: BorderChars = BorderChars {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    horizontal: "-",
    vertical: "|",
    top_join: "+",
    bottom_join: "+",
    left_join: "+",
    right_join: "+",
    cross: "+",
};

impl BorderStyle {
    /// Parse a style name, falling back to `Single` for anything unknown.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "single" => BorderStyle::Single,
            "double" => BorderStyle::Double,
            "round" => BorderStyle::Round,
            "bold" => BorderStyle::Bold,
            "classic" => BorderStyle::Classic,
            other => {
                debug!(style = other, "Unknown border style, using single");
                BorderStyle::Single
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BorderStyle::Single => "single",
            BorderStyle::Double => "double",
            BorderStyle::Round => "round",
            BorderStyle::Bold => "bold",
            BorderStyle::Classic => "classic",
        }
    }

    pub fn chars(self) -> &'static BorderChars {
        match self {
            BorderStyle::Single => &SINGLE,
            BorderStyle::Double => &DOUBLE,
            BorderStyle::Round => &ROUND,
            BorderStyle::Bold => &BOLD,
            BorderStyle::Classic => &CLASSIC,
        }
    }
}

impl From<String> for BorderStyle {
    fn from(name: String) -> Self {
        BorderStyle::from_name(&name)
    }
}

impl From<&str> for BorderStyle {
    fn from(name: &str) -> Self {
        BorderStyle::from_name(name)
    }
}

impl From<BorderStyle> for String {
    fn from(style: BorderStyle) -> Self {
        style.name().to_string()
    }
}
