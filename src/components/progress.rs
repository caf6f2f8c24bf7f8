//! Single-line progress bar.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::Config;
use crate::error::Result;
use crate::style::{paint, Color};
use crate::terminal::{StdoutTerminal, Terminal};
use crate::theme::Theme;

/// Appearance and scale of a [`ProgressBar`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressOptions {
    pub total: u64,
    /// Cells between the brackets.
    pub width: usize,
    pub complete_char: String,
    pub incomplete_char: String,
    pub show_percentage: bool,
    pub show_value: bool,
    pub complete_color: Color,
    pub incomplete_color: Color,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            total: 100,
            width: 40,
            complete_char: "█".to_string(),
            incomplete_char: "░".to_string(),
            show_percentage: true,
            show_value: false,
            complete_color: Color::from("green"),
            incomplete_color: Color::from("gray"),
        }
    }
}

impl ProgressOptions {
    pub fn total(mut self, total: u64) -> Self {
        self.total = total;
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn chars(mut self, complete: impl Into<String>, incomplete: impl Into<String>) -> Self {
        self.complete_char = complete.into();
        self.incomplete_char = incomplete.into();
        self
    }

    pub fn show_percentage(mut self, show: bool) -> Self {
        self.show_percentage = show;
        self
    }

    pub fn show_value(mut self, show: bool) -> Self {
        self.show_value = show;
        self
    }

    pub fn complete_color(mut self, color: impl Into<Color>) -> Self {
        self.complete_color = color.into();
        self
    }

    pub fn incomplete_color(mut self, color: impl Into<Color>) -> Self {
        self.incomplete_color = color.into();
        self
    }

    /// Fill with the theme's success colour, leave the rest muted.
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.complete_color = theme.success.clone();
        self.incomplete_color = theme.muted.clone();
        self
    }

    /// Options from the `[progress]` table, coloured by the configured theme.
    pub fn from_config(config: &Config) -> Self {
        let theme = config.theme();
        let progress = &config.progress;
        Self {
            width: progress.width,
            complete_char: progress.complete_char.clone(),
            incomplete_char: progress.incomplete_char.clone(),
            show_percentage: progress.show_percentage,
            show_value: progress.show_value,
            complete_color: progress
                .complete_color
                .clone()
                .unwrap_or_else(|| theme.success.clone()),
            incomplete_color: progress
                .incomplete_color
                .clone()
                .unwrap_or_else(|| theme.muted.clone()),
            ..Self::default()
        }
    }
}

/// Percentage complete, 0 to 100. An empty total counts as done.
pub fn percentage(current: u64, total: u64) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (current.min(total) as f64 / total as f64) * 100.0
}

/// Number of filled cells for `percent` of `width`.
pub fn filled_cells(width: usize, percent: f64) -> usize {
    let percent = percent.clamp(0.0, 100.0);
    ((width as f64 * percent / 100.0).round() as usize).min(width)
}

/// A progress bar redrawn in place on one terminal line.
///
/// Once `complete()` or `stop()` has run, further updates are ignored.
pub struct ProgressBar<T: Terminal = StdoutTerminal> {
    options: ProgressOptions,
    current: u64,
    finished: bool,
    cursor_hidden: bool,
    term: T,
}

impl ProgressBar<StdoutTerminal> {
    pub fn new(options: ProgressOptions) -> Self {
        Self::with_terminal(options, StdoutTerminal::new())
    }

    /// Default appearance, counting to `total`.
    pub fn simple(total: u64) -> Self {
        Self::new(ProgressOptions::default().total(total))
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(ProgressOptions::from_config(config))
    }
}

impl<T: Terminal> ProgressBar<T> {
    pub fn with_terminal(options: ProgressOptions, term: T) -> Self {
        Self {
            options,
            current: 0,
            finished: false,
            cursor_hidden: false,
            term,
        }
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn total(&self) -> u64 {
        self.options.total
    }

    pub fn percentage(&self) -> f64 {
        percentage(self.current, self.options.total)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn options(&self) -> &ProgressOptions {
        &self.options
    }

    pub fn terminal(&self) -> &T {
        &self.term
    }

    /// The bar as it would be drawn now, without touching the terminal.
    pub fn render(&self) -> String {
        let opts = &self.options;
        let percent = self.percentage();
        let filled = filled_cells(opts.width, percent);
        let empty = opts.width - filled;

        let mut out = format!(
            "[{}{}]",
            paint(
                &opts.complete_char.repeat(filled),
                opts.complete_color.clone()
            ),
            paint(
                &opts.incomplete_char.repeat(empty),
                opts.incomplete_color.clone()
            )
        );
        if opts.show_percentage {
            out.push_str(&format!(" {}%", percent.round() as u64));
        }
        if opts.show_value {
            out.push_str(&format!(" ({}/{})", self.current, opts.total));
        }
        out
    }

    pub fn start(&mut self) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.term.hide_cursor()?;
        self.cursor_hidden = true;
        self.draw()
    }

    /// Move to `value`, clamped to the total.
    pub fn update(&mut self, value: u64) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.current = value.min(self.options.total);
        trace!(current = self.current, total = self.options.total, "Progress update");
        self.draw()
    }

    pub fn increment(&mut self, amount: u64) -> Result<()> {
        self.update(self.current.saturating_add(amount))
    }

    pub fn complete(&mut self) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.current = self.options.total;
        self.draw()?;
        self.finish()
    }

    /// Leave the bar where it is and release the line.
    pub fn stop(&mut self) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.finish()
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        self.term.write("\n")?;
        self.term.show_cursor()?;
        self.cursor_hidden = false;
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let line = self.render();
        self.term.clear_line()?;
        self.term.write(&line)?;
        Ok(())
    }
}

impl<T: Terminal> Drop for ProgressBar<T> {
    fn drop(&mut self) {
        if self.finished || !self.cursor_hidden {
            return;
        }
        if let Err(e) = self.stop() {
            debug!(error = %e, "Failed to stop progress bar on drop");
        }
    }
}
