//! Arrow-key menu.

use super::key::{Key, KeyKind};
use super::source::{CrosstermKeys, KeySource};
use crate::error::{ConsoleError, Result};
use crate::style::{compose, paint, Color, StyleSpec};
use crate::terminal::{StdoutTerminal, Terminal};
use crate::theme::Theme;

/// One menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<V> {
    pub label: String,
    pub value: V,
    pub disabled: bool,
}

impl<V> Choice<V> {
    pub fn new(label: impl Into<String>, value: V) -> Self {
        Self {
            label: label.into(),
            value,
            disabled: false,
        }
    }

    /// Shown but not selectable.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

impl From<&str> for Choice<String> {
    fn from(label: &str) -> Self {
        Self::new(label, label.to_string())
    }
}

impl From<String> for Choice<String> {
    fn from(label: String) -> Self {
        Self::new(label.clone(), label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Moved,
    Ignored,
    Submit,
    Cancel,
}

/// A vertical menu navigated with the arrow keys (or `j`/`k`).
#[derive(Debug, Clone)]
pub struct Select<V> {
    pub message: String,
    pub pointer: String,
    /// Blank lines between the message and the menu (at most one is drawn).
    pub margin: usize,
    pub message_color: Color,
    pub selected_color: Color,
    pub unselected_color: Option<Color>,
    pub disabled_color: Color,
    choices: Vec<Choice<V>>,
    selected: usize,
}

impl<V: Clone + PartialEq> Select<V> {
    /// Fails with [`ConsoleError::NoChoices`] on an empty list.
    pub fn new(message: impl Into<String>, choices: Vec<Choice<V>>) -> Result<Self> {
        if choices.is_empty() {
            return Err(ConsoleError::NoChoices);
        }
        let mut select = Self {
            message: message.into(),
            pointer: "❯".to_string(),
            margin: 1,
            message_color: Color::from("cyan"),
            selected_color: Color::from("cyan"),
            unselected_color: None,
            disabled_color: Color::from("gray"),
            choices,
            selected: 0,
        };
        if select.choices[0].disabled {
            select.move_down();
        }
        Ok(select)
    }

    /// Start on the first choice whose value equals `value`.
    pub fn default_value(mut self, value: &V) -> Self {
        if let Some(index) = self.choices.iter().position(|c| &c.value == value) {
            self.selected = index;
        }
        self
    }

    pub fn pointer(mut self, pointer: impl Into<String>) -> Self {
        self.pointer = pointer.into();
        self
    }

    pub fn margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    pub fn message_color(mut self, color: impl Into<Color>) -> Self {
        self.message_color = color.into();
        self
    }

    pub fn selected_color(mut self, color: impl Into<Color>) -> Self {
        self.selected_color = color.into();
        self
    }

    pub fn unselected_color(mut self, color: impl Into<Color>) -> Self {
        self.unselected_color = Some(color.into());
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.message_color = theme.accent.clone();
        self.selected_color = theme.accent.clone();
        self.disabled_color = theme.muted.clone();
        self
    }

    pub fn choices(&self) -> &[Choice<V>] {
        &self.choices
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &Choice<V> {
        &self.choices[self.selected]
    }

    pub fn move_up(&mut self) {
        self.step(false);
    }

    pub fn move_down(&mut self) {
        self.step(true);
    }

    /// Move one enabled choice in either direction, wrapping. Stays put when
    /// no other choice is enabled.
    fn step(&mut self, forward: bool) {
        let len = self.choices.len();
        let mut next = self.selected;
        loop {
            next = if forward {
                (next + 1) % len
            } else {
                (next + len - 1) % len
            };
            if next == self.selected || !self.choices[next].disabled {
                break;
            }
        }
        self.selected = next;
    }

    fn handle(&mut self, key: &Key) -> Step {
        match key.kind {
            KeyKind::ArrowUp | KeyKind::Char('k') => {
                self.move_up();
                Step::Moved
            }
            KeyKind::ArrowDown | KeyKind::Char('j') => {
                self.move_down();
                Step::Moved
            }
            KeyKind::Enter if !self.selected().disabled => Step::Submit,
            KeyKind::CtrlC => Step::Cancel,
            _ => Step::Ignored,
        }
    }

    /// One line per choice, pointer on the selected one.
    pub fn render_menu(&self) -> Vec<String> {
        let disabled = StyleSpec::fg(self.disabled_color.clone()).dim();
        let highlight = StyleSpec::fg(self.selected_color.clone()).bold();

        self.choices
            .iter()
            .enumerate()
            .map(|(i, choice)| {
                let is_selected = i == self.selected;
                let mut line = if is_selected {
                    format!("{} ", compose(&self.pointer, &highlight))
                } else {
                    "  ".to_string()
                };

                if choice.disabled {
                    line.push_str(compose(&choice.label, &disabled).as_str());
                    line.push_str(compose(" (disabled)", &disabled.clone().italic()).as_str());
                } else if is_selected {
                    line.push_str(compose(&choice.label, &highlight).as_str());
                } else if let Some(color) = &self.unselected_color {
                    line.push_str(paint(&choice.label, color.clone()).as_str());
                } else {
                    line.push_str(&choice.label);
                }
                line
            })
            .collect()
    }

    /// Prompt on the process terminal.
    pub fn ask(&mut self) -> Result<V> {
        self.run(&mut StdoutTerminal::new(), &mut CrosstermKeys::new())
    }

    /// Draw the menu and loop on keys until a choice is made.
    ///
    /// Between keys the cursor rests on the selected row.
    pub fn run(&mut self, term: &mut impl Terminal, keys: &mut impl KeySource) -> Result<V> {
        let guard = term.enter_raw_mode()?;
        let outcome = self.interact(term, keys);

        // Input mode and cursor come back on every exit, errors included.
        drop(guard);
        term.show_cursor()?;
        if matches!(outcome, Err(ConsoleError::Cancelled)) {
            term.write_line("")?;
        }
        outcome
    }

    fn interact(&mut self, term: &mut impl Terminal, keys: &mut impl KeySource) -> Result<V> {
        if !self.message.is_empty() {
            term.write_line(paint(&self.message, self.message_color.clone()).as_str())?;
        }
        if self.margin > 0 {
            term.write_line("")?;
        }
        term.hide_cursor()?;
        self.draw_menu(term)?;

        loop {
            let previous = self.selected;
            let key = keys.next_key()?;
            match self.handle(&key) {
                Step::Moved => {
                    term.cursor_up(previous)?;
                    self.draw_menu(term)?;
                }
                Step::Ignored => {}
                Step::Submit => {
                    self.clear_menu(term)?;
                    let choice = self.selected();
                    let summary = format!("{} {}", self.pointer, choice.label);
                    let highlight = StyleSpec::fg(self.selected_color.clone()).bold();
                    term.write_line(compose(&summary, &highlight).as_str())?;
                    return Ok(choice.value.clone());
                }
                Step::Cancel => return Err(ConsoleError::Cancelled),
            }
        }
    }

    /// Draw every row from the top of the menu, then park on the selection.
    fn draw_menu(&self, term: &mut impl Terminal) -> Result<()> {
        let lines = self.render_menu();
        for line in &lines {
            term.clear_line()?;
            term.write_line(line)?;
        }
        term.cursor_up(lines.len() - self.selected)?;
        Ok(())
    }

    /// Blank every row and leave the cursor on the first one.
    fn clear_menu(&self, term: &mut impl Terminal) -> Result<()> {
        let len = self.choices.len();
        term.cursor_up(self.selected)?;
        for i in 0..len {
            term.clear_line()?;
            if i + 1 < len {
                term.write_line("")?;
            }
        }
        term.cursor_up(len - 1)?;
        Ok(())
    }
}

impl Select<String> {
    /// A menu whose values are its labels.
    pub fn menu<I>(message: impl Into<String>, labels: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Choice<String>>,
    {
        Self::new(message, labels.into_iter().map(Into::into).collect())
    }
}
