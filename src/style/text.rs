//! Styled text component.

use crate::error::Result;
use crate::terminal::{StdoutTerminal, Terminal};

use super::{compose, Color, StyleSpec};

/// A piece of text with a style, rendered as one [`super::StyledSpan`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    text: String,
    style: StyleSpec,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: StyleSpec::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: StyleSpec) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn colored(text: impl Into<String>, color: impl Into<Color>) -> Self {
        Self::styled(text, StyleSpec::fg(color))
    }

    pub fn red(text: impl Into<String>) -> Self {
        Self::colored(text, "red")
    }

    pub fn green(text: impl Into<String>) -> Self {
        Self::colored(text, "green")
    }

    pub fn yellow(text: impl Into<String>) -> Self {
        Self::colored(text, "yellow")
    }

    pub fn blue(text: impl Into<String>) -> Self {
        Self::colored(text, "blue")
    }

    pub fn magenta(text: impl Into<String>) -> Self {
        Self::colored(text, "magenta")
    }

    pub fn cyan(text: impl Into<String>) -> Self {
        Self::colored(text, "cyan")
    }

    pub fn white(text: impl Into<String>) -> Self {
        Self::colored(text, "white")
    }

    pub fn gray(text: impl Into<String>) -> Self {
        Self::colored(text, "gray")
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::styled(text, StyleSpec::new().bold())
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::styled(text, StyleSpec::new().dim())
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::styled(text, StyleSpec::new().italic())
    }

    pub fn underline(text: impl Into<String>) -> Self {
        Self::styled(text, StyleSpec::new().underline())
    }

    pub fn strikethrough(text: impl Into<String>) -> Self {
        Self::styled(text, StyleSpec::new().strikethrough())
    }

    pub fn inverse(text: impl Into<String>) -> Self {
        Self::styled(text, StyleSpec::new().inverse())
    }

    /// Replace the style wholesale.
    pub fn with_style(mut self, style: StyleSpec) -> Self {
        self.style = style;
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.style.color = Some(color.into());
        self
    }

    pub fn bg_color(mut self, color: impl Into<Color>) -> Self {
        self.style.bg_color = Some(color.into());
        self
    }

    // Chainable attributes; the bare names are the constructors above.

    pub fn with_bold(mut self) -> Self {
        self.style = self.style.bold();
        self
    }

    pub fn with_dim(mut self) -> Self {
        self.style = self.style.dim();
        self
    }

    pub fn with_italic(mut self) -> Self {
        self.style = self.style.italic();
        self
    }

    pub fn with_underline(mut self) -> Self {
        self.style = self.style.underline();
        self
    }

    pub fn with_strikethrough(mut self) -> Self {
        self.style = self.style.strikethrough();
        self
    }

    pub fn with_inverse(mut self) -> Self {
        self.style = self.style.inverse();
        self
    }

    pub fn with_blink(mut self) -> Self {
        self.style = self.style.blink();
        self
    }

    pub fn style(&self) -> &StyleSpec {
        &self.style
    }

    /// The unstyled text.
    pub fn plain(&self) -> &str {
        &self.text
    }

    pub fn render(&self) -> String {
        compose(&self.text, &self.style).into_string()
    }

    /// Write to stdout followed by a newline.
    pub fn print(&self) -> Result<()> {
        self.print_to(&mut StdoutTerminal::new())
    }

    /// Write to stdout without a trailing newline.
    pub fn print_inline(&self) -> Result<()> {
        StdoutTerminal::new().write(&self.render())?;
        Ok(())
    }

    pub fn print_to(&self, term: &mut impl Terminal) -> Result<()> {
        term.write_line(&self.render())?;
        Ok(())
    }
}

impl std::fmt::Display for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
