//! Bordered box around multi-line content.

use serde::{Deserialize, Serialize};

use crate::ansi::visible_width;
use crate::border::{BorderChars, BorderStyle};
use crate::error::Result;
use crate::layout::{self, max_line_width, truncate, truncate_with, wrap, Align, Spacing, VAlign};
use crate::style::{compose, Color, StyleSpec};
use crate::terminal::{StdoutTerminal, Terminal};
use crate::theme::Theme;

/// A bordered container.
///
/// Rendering always yields a rectangle: every line is `inner_width + 2`
/// visible columns, where the inner width is either the explicit `width` or
/// the content (plus side padding) or title, whichever is wider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxSpec {
    pub content: String,
    pub title: Option<String>,
    pub title_align: Align,
    /// Inner width between the vertical borders.
    pub width: Option<usize>,
    /// Total height including the top and bottom borders.
    pub height: Option<usize>,
    pub padding: Spacing,
    pub border_style: BorderStyle,
    pub border_color: Option<Color>,
    pub align: Align,
    pub valign: VAlign,
}

impl Default for BoxSpec {
    fn default() -> Self {
        Self {
            content: String::new(),
            title: None,
            title_align: Align::Left,
            width: None,
            height: None,
            padding: Spacing::uniform(1),
            border_style: BorderStyle::Single,
            border_color: None,
            align: Align::Left,
            valign: VAlign::Top,
        }
    }
}

impl BoxSpec {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn single(content: impl Into<String>) -> Self {
        Self::new(content).border_style(BorderStyle::Single)
    }

    pub fn double(content: impl Into<String>) -> Self {
        Self::new(content).border_style(BorderStyle::Double)
    }

    pub fn round(content: impl Into<String>) -> Self {
        Self::new(content).border_style(BorderStyle::Round)
    }

    pub fn bold(content: impl Into<String>) -> Self {
        Self::new(content).border_style(BorderStyle::Bold)
    }

    pub fn classic(content: impl Into<String>) -> Self {
        Self::new(content).border_style(BorderStyle::Classic)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title_align(mut self, align: Align) -> Self {
        self.title_align = align;
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    pub fn padding(mut self, padding: impl Into<Spacing>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn border_style(mut self, style: impl Into<BorderStyle>) -> Self {
        self.border_style = style.into();
        self
    }

    pub fn border_color(mut self, color: impl Into<Color>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn valign(mut self, valign: VAlign) -> Self {
        self.valign = valign;
        self
    }

    /// Take border style and colour from a theme.
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.border_style = theme.border_style;
        self.border_color = theme.border_color.clone();
        self
    }

    /// Width between the vertical borders.
    pub fn inner_width(&self) -> usize {
        self.width.unwrap_or_else(|| {
            let content = max_line_width(&self.content) + self.padding.width();
            let title = self.shown_title().map_or(0, |t| visible_width(t) + 2);
            content.max(title)
        })
    }

    pub fn render(&self) -> String {
        let border = self.border_style.chars();
        let inner_width = self.inner_width();
        let pad = self.padding;
        let text_width = inner_width.saturating_sub(pad.width());
        let left = " ".repeat(pad.left);
        let right = " ".repeat(pad.right);

        let mut lines: Vec<String> = Vec::new();
        lines.extend(std::iter::repeat(String::new()).take(pad.top));
        for line in self.content_lines(text_width) {
            let aligned = layout::pad(&line, text_width, self.align);
            lines.push(format!("{left}{aligned}{right}"));
        }
        lines.extend(std::iter::repeat(String::new()).take(pad.bottom));

        if let Some(height) = self.height {
            lines = fit_to_height(lines, height.saturating_sub(2), self.valign);
        }

        let vertical = self.paint(border.vertical);
        let mut out = Vec::with_capacity(lines.len() + 2);
        out.push(self.top_border(border, inner_width));
        for line in &lines {
            out.push(format!(
                "{vertical}{}{vertical}",
                fit_row(line, inner_width)
            ));
        }
        out.push(self.paint(&format!(
            "{}{}{}",
            border.bottom_left,
            border.horizontal.repeat(inner_width),
            border.bottom_right
        )));
        out.join("\n")
    }

    pub fn print(&self) -> Result<()> {
        self.print_to(&mut StdoutTerminal::new())
    }

    pub fn print_to(&self, term: &mut impl Terminal) -> Result<()> {
        term.write_line(&self.render())?;
        Ok(())
    }

    fn shown_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Content split into lines; wrapped and clipped when the width is fixed.
    fn content_lines(&self, text_width: usize) -> Vec<String> {
        if self.width.is_none() {
            return self.content.split('\n').map(str::to_string).collect();
        }
        wrap(&self.content, text_width, true)
            .into_iter()
            .map(|line| {
                if visible_width(&line) > text_width {
                    truncate(&line, text_width)
                } else {
                    line
                }
            })
            .collect()
    }

    fn top_border(&self, border: &BorderChars, inner_width: usize) -> String {
        let h = border.horizontal;
        let max_title = inner_width.saturating_sub(2);

        let title = match self.shown_title() {
            Some(title) if max_title > 0 => title,
            _ => {
                return self.paint(&format!(
                    "{}{}{}",
                    border.top_left,
                    h.repeat(inner_width),
                    border.top_right
                ))
            }
        };

        let title = if visible_width(title) > max_title {
            truncate(title, max_title)
        } else {
            title.to_string()
        };
        let label = format!(" {title} ");
        let remaining = inner_width.saturating_sub(visible_width(&label));

        match self.title_align {
            Align::Left => format!(
                "{}{label}{}",
                self.paint(border.top_left),
                self.paint(&format!("{}{}", h.repeat(remaining), border.top_right))
            ),
            Align::Center => {
                let before = remaining / 2;
                format!(
                    "{}{label}{}",
                    self.paint(&format!("{}{}", border.top_left, h.repeat(before))),
                    self.paint(&format!(
                        "{}{}",
                        h.repeat(remaining - before),
                        border.top_right
                    ))
                )
            }
            Align::Right => format!(
                "{}{label}{}",
                self.paint(&format!("{}{}", border.top_left, h.repeat(remaining))),
                self.paint(border.top_right)
            ),
        }
    }

    /// Colour one run of border glyphs.
    fn paint(&self, run: &str) -> String {
        match &self.border_color {
            Some(color) => compose(run, &StyleSpec::fg(color.clone())).into_string(),
            None => run.to_string(),
        }
    }
}

/// Pad or cut a row to exactly `width` columns.
fn fit_row(line: &str, width: usize) -> String {
    if visible_width(line) > width {
        truncate_with(line, width, "")
    } else {
        layout::pad(line, width, Align::Left)
    }
}

/// Grow or shrink `lines` to `target` rows.
fn fit_to_height(mut lines: Vec<String>, target: usize, valign: VAlign) -> Vec<String> {
    if lines.len() >= target {
        lines.truncate(target);
        return lines;
    }

    let missing = target - lines.len();
    let (above, below) = match valign {
        VAlign::Top => (0, missing),
        VAlign::Center => (missing / 2, missing - missing / 2),
        VAlign::Bottom => (missing, 0),
    };

    let mut out = Vec::with_capacity(target);
    out.extend(std::iter::repeat(String::new()).take(above));
    out.extend(lines);
    out.extend(std::iter::repeat(String::new()).take(below));
    out
}
