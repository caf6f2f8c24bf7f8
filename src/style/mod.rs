//! Styled spans.
//!
//! A [`StyleSpec`] describes attributes and colours; [`compose`] turns text
//! plus a spec into a [`StyledSpan`]: the open codes (attributes, then
//! foreground, then background), the text, then a single reset. Every span
//! resets itself, so spans can be concatenated freely.

pub mod palette;
mod text;

pub use palette::RESET;
pub use text::Text;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A colour as written by the caller.
///
/// Resolution to escape codes happens in [`compose`]; a name that is not in
/// the palette or a malformed hex string produces no code at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ColorRepr", into = "ColorRepr")]
pub enum Color {
    /// Palette name such as `cyan` or `brightRed`.
    Named(String),
    /// Six hex digits, with or without a leading `#`.
    Hex(String),
    /// 24-bit colour.
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Classify a colour string.
    ///
    /// A leading `#` or exactly six hex digits is a hex colour; anything else
    /// is treated as a palette name.
    pub fn parse(s: &str) -> Self {
        let looks_hex = s.starts_with('#')
            || (s.len() == 6 && s.chars().all(|c| c.is_ascii_hexdigit()));
        if looks_hex {
            Color::Hex(s.to_string())
        } else {
            Color::Named(s.to_string())
        }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Foreground escape code, if this colour resolves.
    pub fn fg_code(&self) -> Option<String> {
        let code = match self {
            Color::Named(name) => palette::foreground(name).map(str::to_string),
            Color::Hex(h) => hex(h),
            Color::Rgb { r, g, b } => Some(rgb(*r, *g, *b)),
        };
        if code.is_none() {
            debug!(color = ?self, "Unresolved foreground colour, emitting no code");
        }
        code
    }

    /// Background escape code, if this colour resolves.
    pub fn bg_code(&self) -> Option<String> {
        let code = match self {
            Color::Named(name) => palette::background(name).map(str::to_string),
            Color::Hex(h) => bg_hex(h),
            Color::Rgb { r, g, b } => Some(bg_rgb(*r, *g, *b)),
        };
        if code.is_none() {
            debug!(color = ?self, "Unresolved background colour, emitting no code");
        }
        code
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::parse(s)
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::parse(&s)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb { r, g, b }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Rgb { r: u8, g: u8, b: u8 },
    Text(String),
}

impl From<ColorRepr> for Color {
    fn from(repr: ColorRepr) -> Self {
        match repr {
            ColorRepr::Rgb { r, g, b } => Color::Rgb { r, g, b },
            ColorRepr::Text(s) => Color::parse(&s),
        }
    }
}

impl From<Color> for ColorRepr {
    fn from(color: Color) -> Self {
        match color {
            Color::Rgb { r, g, b } => ColorRepr::Rgb { r, g, b },
            Color::Named(s) | Color::Hex(s) => ColorRepr::Text(s),
        }
    }
}

/// 24-bit foreground code.
pub fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{r};{g};{b}m")
}

/// 24-bit background code.
pub fn bg_rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[48;2;{r};{g};{b}m")
}

/// Foreground code for a hex colour (`#RRGGBB` or `RRGGBB`).
pub fn hex(hex: &str) -> Option<String> {
    parse_hex(hex).map(|(r, g, b)| rgb(r, g, b))
}

/// Background code for a hex colour (`#RRGGBB` or `RRGGBB`).
pub fn bg_hex(hex: &str) -> Option<String> {
    parse_hex(hex).map(|(r, g, b)| bg_rgb(r, g, b))
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let clean = hex.strip_prefix('#').unwrap_or(hex);
    if clean.len() != 6 || !clean.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&clean[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Text attributes and colours for a span.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSpec {
    pub color: Option<Color>,
    pub bg_color: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub inverse: bool,
    pub blink: bool,
}

impl StyleSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Foreground only.
    pub fn fg(color: impl Into<Color>) -> Self {
        Self::new().color(color)
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn bg_color(mut self, color: impl Into<Color>) -> Self {
        self.bg_color = Some(color.into());
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    pub fn inverse(mut self) -> Self {
        self.inverse = true;
        self
    }

    pub fn blink(mut self) -> Self {
        self.blink = true;
        self
    }

    /// True when no attribute and no colour is set.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// Open codes for a spec: attributes in fixed order, then fg, then bg.
pub fn style_open(spec: &StyleSpec) -> String {
    let attrs = [
        (spec.bold, palette::attr::BOLD),
        (spec.dim, palette::attr::DIM),
        (spec.italic, palette::attr::ITALIC),
        (spec.underline, palette::attr::UNDERLINE),
        (spec.strikethrough, palette::attr::STRIKETHROUGH),
        (spec.inverse, palette::attr::INVERSE),
        (spec.blink, palette::attr::BLINK),
    ];

    let mut open = String::new();
    for (set, code) in attrs {
        if set {
            open.push_str(code);
        }
    }
    if let Some(code) = spec.color.as_ref().and_then(Color::fg_code) {
        open.push_str(&code);
    }
    if let Some(code) = spec.bg_color.as_ref().and_then(Color::bg_code) {
        open.push_str(&code);
    }
    open
}

/// A self-resetting styled string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyledSpan(String);

impl StyledSpan {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for StyledSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StyledSpan {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<StyledSpan> for String {
    fn from(span: StyledSpan) -> Self {
        span.0
    }
}

/// Wrap `text` in the open codes for `spec` followed by a reset.
///
/// The reset is always emitted, even for a plain spec.
pub fn compose(text: &str, spec: &StyleSpec) -> StyledSpan {
    let mut out = style_open(spec);
    out.push_str(text);
    out.push_str(RESET);
    StyledSpan(out)
}

/// Shorthand for a foreground-only span.
pub fn paint(text: &str, color: impl Into<Color>) -> StyledSpan {
    compose(text, &StyleSpec::fg(color))
}
