//! Text layout primitives.
//!
//! Padding, alignment, wrapping, truncation and margins. All width
//! arithmetic is done in visible columns via [`crate::ansi::visible_width`],
//! so styled input lines up the same way plain input does.

mod truncate;
mod wrap;

pub use truncate::{truncate, truncate_with, DEFAULT_ELLIPSIS};
pub use wrap::wrap;

use serde::{Deserialize, Serialize};

use crate::ansi::visible_width;

/// Horizontal alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical alignment inside a fixed-height container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Per-side spacing used for margins and padding.
///
/// Deserializes from either a single integer (all four sides) or a table
/// with any of `top`, `right`, `bottom`, `left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "SpacingRepr")]
pub struct Spacing {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Spacing {
    /// The same amount on every side.
    pub const fn uniform(n: usize) -> Self {
        Self {
            top: n,
            right: n,
            bottom: n,
            left: n,
        }
    }

    /// Left/right only, no blank lines above or below.
    pub const fn horizontal(n: usize) -> Self {
        Self {
            top: 0,
            right: n,
            bottom: 0,
            left: n,
        }
    }

    /// Total columns added by the left and right sides.
    pub fn width(&self) -> usize {
        self.left + self.right
    }
}

impl From<usize> for Spacing {
    fn from(n: usize) -> Self {
        Self::uniform(n)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SpacingRepr {
    Uniform(usize),
    Sides {
        #[serde(default)]
        top: usize,
        #[serde(default)]
        right: usize,
        #[serde(default)]
        bottom: usize,
        #[serde(default)]
        left: usize,
    },
}

impl From<SpacingRepr> for Spacing {
    fn from(repr: SpacingRepr) -> Self {
        match repr {
            SpacingRepr::Uniform(n) => Spacing::uniform(n),
            SpacingRepr::Sides {
                top,
                right,
                bottom,
                left,
            } => Spacing {
                top,
                right,
                bottom,
                left,
            },
        }
    }
}

/// Pad `s` with spaces to `width` visible columns.
pub fn pad(s: &str, width: usize, align: Align) -> String {
    pad_with(s, width, align, ' ')
}

/// Pad `s` with `fill` to `width` visible columns.
///
/// Input that is already `width` columns or wider is returned unchanged,
/// never truncated. Centering puts the smaller half on the left.
pub fn pad_with(s: &str, width: usize, align: Align, fill: char) -> String {
    let padding = width.saturating_sub(visible_width(s));
    if padding == 0 {
        return s.to_string();
    }

    let (left, right) = match align {
        Align::Left => (0, padding),
        Align::Right => (padding, 0),
        Align::Center => {
            let left = padding / 2;
            (left, padding - left)
        }
    };

    let mut out = String::with_capacity(s.len() + padding * fill.len_utf8());
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(s);
    out.extend(std::iter::repeat(fill).take(right));
    out
}

/// Center `text` within `width` columns, or the terminal width when `None`.
pub fn center(text: &str, width: Option<usize>) -> String {
    let width = width.unwrap_or_else(|| crate::terminal::size().width);
    pad(text, width, Align::Center)
}

/// Surround every line with spaces and add blank lines above and below.
pub fn add_margin(text: &str, margin: impl Into<Spacing>) -> String {
    let margin = margin.into();
    let left = " ".repeat(margin.left);
    let right = " ".repeat(margin.right);

    let mut lines: Vec<String> = Vec::new();
    lines.extend(std::iter::repeat(String::new()).take(margin.top));
    lines.extend(text.split('\n').map(|line| format!("{left}{line}{right}")));
    lines.extend(std::iter::repeat(String::new()).take(margin.bottom));
    lines.join("\n")
}

/// Same as [`add_margin`]; named for use inside containers.
pub fn add_padding(text: &str, padding: impl Into<Spacing>) -> String {
    add_margin(text, padding)
}

/// Widest visible line in a multi-line string.
pub fn max_line_width(text: &str) -> usize {
    text.split('\n').map(visible_width).max().unwrap_or(0)
}
