//! Bordered tables.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ansi::visible_width;
use crate::border::{BorderChars, BorderStyle};
use crate::error::Result;
use crate::layout::{pad, truncate, Align};
use crate::style::{compose, Color, StyleSpec};
use crate::terminal::{StdoutTerminal, Terminal};
use crate::theme::Theme;

/// Alignment for every column, or one entry per column.
///
/// Columns past the end of a per-column list are left-aligned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnAlign {
    All(Align),
    PerColumn(Vec<Align>),
}

impl Default for ColumnAlign {
    fn default() -> Self {
        Self::All(Align::Left)
    }
}

impl ColumnAlign {
    pub fn for_column(&self, index: usize) -> Align {
        match self {
            Self::All(align) => *align,
            Self::PerColumn(aligns) => aligns.get(index).copied().unwrap_or_default(),
        }
    }
}

impl From<Align> for ColumnAlign {
    fn from(align: Align) -> Self {
        Self::All(align)
    }
}

impl From<Vec<Align>> for ColumnAlign {
    fn from(aligns: Vec<Align>) -> Self {
        Self::PerColumn(aligns)
    }
}

/// A table of string cells.
///
/// Rows may be ragged; missing cells render empty. Every rendered line has
/// the same visible width: the sum of the column widths plus padding plus
/// one border glyph per column and one more on the right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSpec {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Fixed widths; columns without an entry keep their computed width.
    pub column_widths: Option<Vec<usize>>,
    /// Spaces on each side of every cell.
    pub padding: usize,
    pub border_style: BorderStyle,
    /// Bold + colour applied to header cells. None leaves headers plain.
    pub header_color: Option<Color>,
    pub border_color: Option<Color>,
    pub align: ColumnAlign,
    pub show_headers: bool,
}

impl Default for TableSpec {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            column_widths: None,
            padding: 1,
            border_style: BorderStyle::Single,
            header_color: None,
            border_color: None,
            align: ColumnAlign::default(),
            show_headers: true,
        }
    }
}

impl TableSpec {
    pub fn new<H, R>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: ToString,
        R: IntoIterator,
        R::Item: IntoIterator,
        <R::Item as IntoIterator>::Item: ToString,
    {
        Self {
            headers: headers.into_iter().map(|h| h.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|c| c.to_string()).collect())
                .collect(),
            ..Self::default()
        }
    }

    /// A table from JSON objects.
    ///
    /// Headers are the first record's keys in document order; each row takes
    /// those keys from its record, leaving absent keys empty.
    pub fn from_records(records: &[Map<String, Value>]) -> Self {
        let headers: Vec<String> = records
            .first()
            .map(|first| first.keys().cloned().collect())
            .unwrap_or_default();

        let rows = records
            .iter()
            .map(|record| {
                headers
                    .iter()
                    .map(|key| record.get(key).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();

        Self {
            headers,
            rows,
            ..Self::default()
        }
    }

    /// Append one row.
    pub fn row<I>(mut self, cells: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.rows
            .push(cells.into_iter().map(|c| c.to_string()).collect());
        self
    }

    pub fn column_widths(mut self, widths: Vec<usize>) -> Self {
        self.column_widths = Some(widths);
        self
    }

    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn border_style(mut self, style: impl Into<BorderStyle>) -> Self {
        self.border_style = style.into();
        self
    }

    pub fn header_color(mut self, color: impl Into<Color>) -> Self {
        self.header_color = Some(color.into());
        self
    }

    pub fn border_color(mut self, color: impl Into<Color>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    pub fn align(mut self, align: impl Into<ColumnAlign>) -> Self {
        self.align = align.into();
        self
    }

    pub fn show_headers(mut self, show: bool) -> Self {
        self.show_headers = show;
        self
    }

    /// Take borders from the theme and colour headers with its accent.
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.border_style = theme.border_style;
        self.border_color = theme.border_color.clone();
        self.header_color = Some(theme.accent.clone());
        self
    }

    fn headers_visible(&self) -> bool {
        self.show_headers && !self.headers.is_empty()
    }

    /// Number of columns: the widest of the header row, any data row, or
    /// the fixed width list.
    pub fn column_count(&self) -> usize {
        let headers = if self.show_headers {
            self.headers.len()
        } else {
            0
        };
        let rows = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let fixed = self.column_widths.as_ref().map_or(0, Vec::len);
        headers.max(rows).max(fixed)
    }

    /// Content width of every column, excluding padding.
    pub fn resolved_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.column_count()];

        if self.show_headers {
            for (i, header) in self.headers.iter().enumerate() {
                widths[i] = widths[i].max(visible_width(header));
            }
        }
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(visible_width(cell));
            }
        }
        if let Some(fixed) = &self.column_widths {
            for (i, width) in fixed.iter().enumerate() {
                widths[i] = *width;
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.resolved_widths();
        let b = self.border_style.chars();

        let mut out = vec![self.rule(&widths, b, b.top_left, b.top_join, b.top_right)];
        if self.headers_visible() {
            out.push(self.cells_row(&self.headers, &widths, true));
            out.push(self.rule(&widths, b, b.left_join, b.cross, b.right_join));
        }
        for (i, row) in self.rows.iter().enumerate() {
            out.push(self.cells_row(row, &widths, false));
            if i + 1 < self.rows.len() {
                out.push(self.rule(&widths, b, b.left_join, b.cross, b.right_join));
            }
        }
        out.push(self.rule(&widths, b, b.bottom_left, b.bottom_join, b.bottom_right));
        out.join("\n")
    }

    pub fn print(&self) -> Result<()> {
        self.print_to(&mut StdoutTerminal::new())
    }

    pub fn print_to(&self, term: &mut impl Terminal) -> Result<()> {
        term.write_line(&self.render())?;
        Ok(())
    }

    fn rule(&self, widths: &[usize], b: &BorderChars, left: &str, join: &str, right: &str) -> String {
        let segments: Vec<String> = widths
            .iter()
            .map(|w| self.paint(&b.horizontal.repeat(w + self.padding * 2)))
            .collect();
        format!(
            "{}{}{}",
            self.paint(left),
            segments.join(&self.paint(join)),
            self.paint(right)
        )
    }

    fn cells_row(&self, cells: &[String], widths: &[usize], header: bool) -> String {
        let gap = " ".repeat(self.padding);
        let vertical = self.paint(self.border_style.chars().vertical);

        let rendered: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let text = cells.get(i).map(String::as_str).unwrap_or("");
                let text = if visible_width(text) > *width {
                    truncate(text, *width)
                } else {
                    text.to_string()
                };
                let cell = format!("{gap}{}{gap}", pad(&text, *width, self.align.for_column(i)));
                match (&self.header_color, header) {
                    (Some(color), true) => {
                        compose(&cell, &StyleSpec::fg(color.clone()).bold()).into_string()
                    }
                    _ => cell,
                }
            })
            .collect();

        format!("{vertical}{}{vertical}", rendered.join(&vertical))
    }

    fn paint(&self, run: &str) -> String {
        match &self.border_color {
            Some(color) => compose(run, &StyleSpec::fg(color.clone())).into_string(),
            None => run.to_string(),
        }
    }
}

/// Display text for a JSON value; strings are unquoted.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
