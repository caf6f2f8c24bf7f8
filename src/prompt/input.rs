//! Single-line text input and yes/no confirmation.

use tracing::debug;

use super::key::{Key, KeyKind};
use super::source::{CrosstermKeys, KeySource};
use crate::error::{ConsoleError, Result};
use crate::style::{compose, paint, Color, StyleSpec};
use crate::terminal::{StdoutTerminal, Terminal};
use crate::theme::Theme;

/// Returns an error message when the value is rejected.
pub type Validator = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// What a keystroke did to the line being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Edited,
    Ignored,
    Submit,
    Cancel,
}

/// The value being typed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LineEditor {
    value: String,
}

impl LineEditor {
    fn new(initial: &str) -> Self {
        Self {
            value: initial.to_string(),
        }
    }

    fn apply(&mut self, key: &Key, max_length: Option<usize>) -> Step {
        match key.kind {
            KeyKind::Enter => Step::Submit,
            KeyKind::CtrlC => Step::Cancel,
            KeyKind::Backspace => match self.value.pop() {
                Some(_) => Step::Edited,
                None => Step::Ignored,
            },
            KeyKind::Char(c) => {
                if max_length.is_some_and(|max| self.value.chars().count() >= max) {
                    return Step::Ignored;
                }
                self.value.push(c);
                Step::Edited
            }
            KeyKind::ArrowUp | KeyKind::ArrowDown | KeyKind::Other => Step::Ignored,
        }
    }
}

/// A line-editing prompt.
///
/// Validation failures print the error and start over from the default
/// value; the prompt only returns once a value passes or the user cancels.
pub struct Input {
    pub prompt: String,
    pub default_value: String,
    pub placeholder: String,
    pub mask: bool,
    pub max_length: Option<usize>,
    pub prompt_color: Color,
    pub placeholder_color: Color,
    pub error_color: Color,
    validate: Option<Validator>,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            default_value: String::new(),
            placeholder: String::new(),
            mask: false,
            max_length: None,
            prompt_color: Color::from("cyan"),
            placeholder_color: Color::from("gray"),
            error_color: Color::from("red"),
            validate: None,
        }
    }
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Input")
            .field("prompt", &self.prompt)
            .field("default_value", &self.default_value)
            .field("placeholder", &self.placeholder)
            .field("mask", &self.mask)
            .field("max_length", &self.max_length)
            .field("validate", &self.validate.is_some())
            .finish()
    }
}

impl Input {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    pub fn text(prompt: impl Into<String>) -> Self {
        Self::new(prompt)
    }

    /// Input echoed as `•`.
    pub fn password(prompt: impl Into<String>) -> Self {
        Self::new(prompt).mask(true)
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn validate<F>(mut self, validate: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.validate = Some(Box::new(validate));
        self
    }

    pub fn mask(mut self, mask: bool) -> Self {
        self.mask = mask;
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn prompt_color(mut self, color: impl Into<Color>) -> Self {
        self.prompt_color = color.into();
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.prompt_color = theme.accent.clone();
        self.placeholder_color = theme.muted.clone();
        self.error_color = theme.error.clone();
        self
    }

    /// Prompt on the process terminal.
    pub fn ask(&self) -> Result<String> {
        self.run(&mut StdoutTerminal::new(), &mut CrosstermKeys::new())
    }

    pub fn run(&self, term: &mut impl Terminal, keys: &mut impl KeySource) -> Result<String> {
        let guard = term.enter_raw_mode()?;

        loop {
            let mut editor = LineEditor::new(&self.default_value);
            self.redraw(term, &editor.value)?;

            let submitted = loop {
                let key = keys.next_key()?;
                match editor.apply(&key, self.max_length) {
                    Step::Edited => self.redraw(term, &editor.value)?,
                    Step::Ignored => {}
                    Step::Submit => break editor.value,
                    Step::Cancel => {
                        drop(guard);
                        term.show_cursor()?;
                        term.write_line("")?;
                        return Err(ConsoleError::Cancelled);
                    }
                }
            };
            term.write_line("")?;

            let rejection = self.validate.as_ref().and_then(|check| check(&submitted));
            match rejection {
                Some(error) => {
                    debug!(error = %error, "Input rejected by validator");
                    let line = paint(&format!("✗ {error}"), self.error_color.clone());
                    term.write_line(line.as_str())?;
                }
                None => return Ok(submitted),
            }
        }
    }

    /// Prompt plus the current value (or the placeholder while empty).
    pub fn render_line(&self, value: &str) -> String {
        let mut line = String::new();
        if !self.prompt.is_empty() {
            line.push_str(
                paint(&format!("{} ", self.prompt), self.prompt_color.clone()).as_str(),
            );
        }
        if value.is_empty() && !self.placeholder.is_empty() {
            let spec = StyleSpec::fg(self.placeholder_color.clone()).dim();
            line.push_str(compose(&self.placeholder, &spec).as_str());
        } else if self.mask {
            line.push_str(&"•".repeat(value.chars().count()));
        } else {
            line.push_str(value);
        }
        line
    }

    fn redraw(&self, term: &mut impl Terminal, value: &str) -> Result<()> {
        term.clear_line()?;
        term.write(&self.render_line(value))?;
        Ok(())
    }
}

/// A yes/no question answered with a line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirm {
    pub prompt: String,
    pub default: bool,
    pub prompt_color: Color,
}

impl Confirm {
    pub fn new(prompt: impl Into<String>, default: bool) -> Self {
        Self {
            prompt: prompt.into(),
            default,
            prompt_color: Color::from("yellow"),
        }
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.prompt_color = theme.warning.clone();
        self
    }

    /// The prompt with its `(Y/n)` or `(y/N)` hint.
    pub fn full_prompt(&self) -> String {
        let hint = if self.default { "(Y/n)" } else { "(y/N)" };
        format!("{} {hint}", self.prompt)
    }

    pub fn ask(&self) -> Result<bool> {
        self.run(&mut StdoutTerminal::new(), &mut CrosstermKeys::new())
    }

    pub fn run(&self, term: &mut impl Terminal, keys: &mut impl KeySource) -> Result<bool> {
        let answer = Input::new(self.full_prompt())
            .prompt_color(self.prompt_color.clone())
            .run(term, keys)?;
        Ok(parse_answer(&answer, self.default))
    }
}

/// `y`/`yes` in any case is true, an empty answer is `default`, anything
/// else is false.
pub fn parse_answer(answer: &str, default: bool) -> bool {
    let answer = answer.trim().to_lowercase();
    if answer.is_empty() {
        return default;
    }
    answer == "y" || answer == "yes"
}

/// Ask a yes/no question on the process terminal.
pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    Confirm::new(prompt, default).ask()
}
