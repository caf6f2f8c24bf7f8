//! Block-letter text and simple ASCII shapes.

use serde::{Deserialize, Serialize};

use crate::ansi::visible_width;
use crate::components::progress::filled_cells;
use crate::error::Result;
use crate::layout::{pad, Align};
use crate::style::{paint, Color};
use crate::terminal::{StdoutTerminal, Terminal};

type Glyph = &'static [&'static str];

static STANDARD: &[(char, Glyph)] = &[
    ('A', &["  ▄▀▀▄  ", " ▄▀▀▀▀▄ ", "█▀▀▀▀▀█", "█     █"]),
    ('B', &["█▀▀▀▀▄ ", "█▄▄▄▄▀ ", "█    ▀▄", "█▄▄▄▄▀ "]),
    ('C', &[" ▄▀▀▀▀▄", "█      ", "█      ", " ▀▄▄▄▄▀"]),
    ('D', &["█▀▀▀▀▄ ", "█    ▀▄", "█     █", "█▄▄▄▄▀ "]),
    ('E', &["█▀▀▀▀▀", "█▀▀▀▀ ", "█     ", "█▄▄▄▄▄"]),
    ('F', &["█▀▀▀▀▀", "█▀▀▀▀ ", "█     ", "█     "]),
    ('G', &[" ▄▀▀▀▀▄", "█      ", "█   ▄▄█", " ▀▄▄▄▀ "]),
    ('H', &["█     █", "█▀▀▀▀▀█", "█     █", "█     █"]),
    ('I', &["█▀▀▀▀█", "  ██  ", "  ██  ", "█▄▄▄▄█"]),
    ('J', &["   ▄▄█", "     █", "█    █", " ▀▄▄▀ "]),
    ('K', &["█   ▄▀", "█▀▀▀  ", "█   ▀▄", "█    ▀▄"]),
    ('L', &["█     ", "█     ", "█     ", "█▄▄▄▄▄"]),
    ('M', &["█▀█▀█ ", "█ ▀ █ ", "█   █ ", "█   █ "]),
    ('N', &["█▄   █", "█ ▀▄ █", "█   ▀█", "█    █"]),
    ('O', &[" ▄▀▀▀▄ ", "█     █", "█     █", " ▀▄▄▄▀ "]),
    ('P', &["█▀▀▀▀▄", "█▄▄▄▄▀", "█     ", "█     "]),
    ('Q', &[" ▄▀▀▀▄ ", "█     █", "█   ▄ █", " ▀▄▄ ▀▄"]),
    ('R', &["█▀▀▀▀▄", "█▄▄▄▄▀", "█   ▀▄", "█    ▀▄"]),
    ('S', &[" ▄▀▀▀▀▄", "▀▄▄    ", "    ▄▄▀", "▀▄▄▄▄▀ "]),
    ('T', &["▀▀█▀▀▀▀", "  █    ", "  █    ", "  █    "]),
    ('U', &["█     █", "█     █", "█     █", " ▀▄▄▄▀ "]),
    ('V', &["█     █", "█     █", " █   █ ", "  ▀▄▀  "]),
    ('W', &["█     █", "█  █  █", "█ █ █ █", " █   █ "]),
    ('X', &["█    █", " █  █ ", "  ██  ", " █  █ "]),
    ('Y', &["█    █", " █  █ ", "  ██  ", "  ██  "]),
    ('Z', &["█▀▀▀▀█", "   ▄▀ ", " ▄▀   ", "█▄▄▄▄█"]),
    (' ', &["       ", "       ", "       ", "       "]),
];

static SMALL: &[(char, Glyph)] = &[
    ('A', &["▄▀█", "█▀█"]),
    ('B', &["█▀▄", "█▄▀"]),
    ('C', &["█▀▀", "▀▀▀"]),
    ('D', &["█▀▄", "█▄▀"]),
    ('E', &["█▀▀", "██▄"]),
    ('F', &["█▀▀", "█▀ "]),
    ('G', &["█▀▀", "█▄█"]),
    ('H', &["█ █", "█▀█"]),
    ('I', &["█", "█"]),
    ('J', &["  █", "█▄█"]),
    ('K', &["█▄▀", "█ █"]),
    ('L', &["█  ", "█▄▄"]),
    ('M', &["█▄█", "█ █"]),
    ('N', &["█▄█", "█ █"]),
    ('O', &["█▀█", "█▄█"]),
    ('P', &["█▀█", "█▀ "]),
    ('Q', &["▄▀█", "█ ▄"]),
    ('R', &["█▀█", "█▀▄"]),
    ('S', &["█▀▀", "▄██"]),
    ('T', &["▀█▀", " █ "]),
    ('U', &["█ █", "█▄█"]),
    ('V', &["█ █", " ▀ "]),
    ('W', &["█ █", "▀▄▀"]),
    ('X', &["▀▄▀", "█ █"]),
    ('Y', &["█ █", " █ "]),
    ('Z', &["▀█▀", "█▄▄"]),
    (' ', &["   ", "   "]),
];

/// Block-letter font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    /// Four rows per letter.
    #[default]
    Standard,
    /// Two rows per letter.
    Small,
}

impl Font {
    fn table(self) -> &'static [(char, Glyph)] {
        match self {
            Self::Standard => STANDARD,
            Self::Small => SMALL,
        }
    }

    pub fn height(self) -> usize {
        match self {
            Self::Standard => 4,
            Self::Small => 2,
        }
    }

    /// Rows for `c`; characters outside the font use the space glyph.
    pub fn glyph(self, c: char) -> Glyph {
        let table = self.table();
        table
            .iter()
            .find(|(key, _)| *key == c)
            .or_else(|| table.iter().find(|(key, _)| *key == ' '))
            .map(|(_, rows)| *rows)
            .unwrap_or_default()
    }
}

/// Text drawn in a block-letter font.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ascii {
    pub text: String,
    pub font: Font,
    pub color: Option<Color>,
}

impl Ascii {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Large letters.
    pub fn big(text: impl Into<String>) -> Self {
        Self::new(text).font(Font::Standard)
    }

    pub fn small(text: impl Into<String>) -> Self {
        Self::new(text).font(Font::Small)
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Glyph rows joined per line. Every glyph row is padded to the glyph's
    /// widest row so letters stay in their columns.
    pub fn render(&self) -> String {
        if self.text.is_empty() {
            return String::new();
        }

        let glyphs: Vec<Glyph> = self
            .text
            .to_uppercase()
            .chars()
            .map(|c| self.font.glyph(c))
            .collect();

        let lines: Vec<String> = (0..self.font.height())
            .map(|row| {
                glyphs
                    .iter()
                    .map(|glyph| {
                        let width = glyph.iter().map(|r| visible_width(r)).max().unwrap_or(0);
                        pad(glyph.get(row).copied().unwrap_or(""), width, Align::Left)
                    })
                    .collect()
            })
            .collect();

        colorize(lines.join("\n"), self.color.as_ref())
    }

    pub fn print(&self) -> Result<()> {
        self.print_to(&mut StdoutTerminal::new())
    }

    pub fn print_to(&self, term: &mut impl Terminal) -> Result<()> {
        term.write_line(&self.render())?;
        Ok(())
    }
}

fn colorize(text: String, color: Option<&Color>) -> String {
    match color {
        Some(color) => paint(&text, color.clone()).into_string(),
        None => text,
    }
}

/// A rule, the text centred between spaces, and another rule.
///
/// Empty text leaves out the middle line.
pub fn banner(text: &str, fill: char, width: usize, color: Option<&Color>) -> String {
    let rule = fill.to_string().repeat(width);
    let mut lines = vec![rule.clone()];
    if !text.is_empty() {
        lines.push(pad(&format!(" {text} "), width, Align::Center));
    }
    lines.push(rule);
    colorize(lines.join("\n"), color)
}

/// A horizontal rule of `width` copies of `fill`.
pub fn line(width: usize, fill: char, color: Option<&Color>) -> String {
    colorize(fill.to_string().repeat(width), color)
}

/// An unbracketed `█`/`░` bar for `percent` of `width`.
pub fn loading_bar(percent: f64, width: usize, color: Option<&Color>) -> String {
    let filled = filled_cells(width, percent);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
    colorize(bar, color)
}
