//! Animated spinner with a status outcome.
//!
//! [`Spinner`] is a plain state machine: `tick()` advances one frame and
//! redraws. Callers that want animation hand it to [`Spinner::spawn`], which
//! moves it behind a mutex and ticks it from a background thread at the
//! frame set's interval.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::Config;
use crate::error::Result;
use crate::style::{paint, Color};
use crate::terminal::{StdoutTerminal, Terminal};
use crate::theme::Theme;

/// A named animation.
#[derive(Debug, PartialEq, Eq)]
pub struct FrameSet {
    pub name: &'static str,
    pub frames: &'static [&'static str],
    pub interval: Duration,
}

const fn frames(
    name: &'static str,
    frames: &'static [&'static str],
    millis: u64,
) -> FrameSet {
    FrameSet {
        name,
        frames,
        interval: Duration::from_millis(millis),
    }
}

/// Every built-in animation. The first entry is the fallback.
pub static FRAME_SETS: &[FrameSet] = &[
    frames("dots", &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"], 80),
    frames("line", &["-", "\\", "|", "/"], 100),
    frames("circle", &["◐", "◓", "◑", "◒"], 120),
    frames("square", &["◰", "◳", "◲", "◱"], 120),
    frames("arrow", &["←", "↖", "↑", "↗", "→", "↘", "↓", "↙"], 100),
    frames("bounce", &["⠁", "⠂", "⠄", "⠂"], 120),
    frames("box", &["▖", "▘", "▝", "▗"], 100),
    frames("star", &["✶", "✸", "✹", "✺", "✹", "✷"], 100),
    frames("toggle", &["⊶", "⊷"], 250),
    frames(
        "grow",
        &["▁", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃"],
        100,
    ),
    frames("pulse", &["●", "◉", "◎", "◉"], 150),
    frames(
        "wave",
        &["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃", "▂"],
        80,
    ),
];

impl FrameSet {
    /// Look up a frame set by name, falling back to `dots`.
    pub fn named(name: &str) -> &'static FrameSet {
        match FRAME_SETS.iter().find(|set| set.name == name) {
            Some(set) => set,
            None => {
                debug!(kind = name, "Unknown spinner kind, using dots");
                &FRAME_SETS[0]
            }
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// How a spinner finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
    Warned,
    Stopped,
}

impl Outcome {
    /// Status glyph printed in place of the frame; `Stopped` prints none.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            Self::Succeeded => Some("✓"),
            Self::Failed => Some("✗"),
            Self::Warned => Some("⚠"),
            Self::Stopped => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Spinning,
    Finished(Outcome),
}

/// Spinner appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinnerOptions {
    /// Frame set name; see [`FRAME_SETS`].
    pub kind: String,
    pub text: String,
    pub color: Color,
    pub text_color: Option<Color>,
    pub success_color: Color,
    pub error_color: Color,
    pub warning_color: Color,
}

impl Default for SpinnerOptions {
    fn default() -> Self {
        Self {
            kind: "dots".to_string(),
            text: String::new(),
            color: Color::from("cyan"),
            text_color: None,
            success_color: Color::from("green"),
            error_color: Color::from("red"),
            warning_color: Color::from("yellow"),
        }
    }
}

impl SpinnerOptions {
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn text_color(mut self, color: impl Into<Color>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.color = theme.accent.clone();
        self.success_color = theme.success.clone();
        self.error_color = theme.error.clone();
        self.warning_color = theme.warning.clone();
        self
    }

    /// Options from the `[spinner]` table and the configured theme.
    pub fn from_config(config: &Config) -> Self {
        let mut options = Self::default().theme(&config.theme());
        options.kind = config.spinner.kind.clone();
        if let Some(color) = &config.spinner.color {
            options.color = color.clone();
        }
        options
    }
}

/// A spinner drawing to one terminal line.
pub struct Spinner<T: Terminal = StdoutTerminal> {
    frames: &'static FrameSet,
    frame_index: usize,
    options: SpinnerOptions,
    state: State,
    term: T,
}

impl Spinner<StdoutTerminal> {
    pub fn new(options: SpinnerOptions) -> Self {
        Self::with_terminal(options, StdoutTerminal::new())
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(SpinnerOptions::from_config(config))
    }

    pub fn dots(text: impl Into<String>) -> Self {
        Self::of_kind("dots", text)
    }

    pub fn line(text: impl Into<String>) -> Self {
        Self::of_kind("line", text)
    }

    pub fn circle(text: impl Into<String>) -> Self {
        Self::of_kind("circle", text)
    }

    pub fn arrow(text: impl Into<String>) -> Self {
        Self::of_kind("arrow", text)
    }

    fn of_kind(kind: &str, text: impl Into<String>) -> Self {
        Self::new(SpinnerOptions::default().kind(kind).text(text))
    }
}

impl<T: Terminal> Spinner<T> {
    pub fn with_terminal(options: SpinnerOptions, term: T) -> Self {
        Self {
            frames: FrameSet::named(&options.kind),
            frame_index: 0,
            options,
            state: State::Idle,
            term,
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.state == State::Spinning
    }

    /// How the spinner finished, if it has.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            State::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn frame_set(&self) -> &'static FrameSet {
        self.frames
    }

    pub fn text(&self) -> &str {
        &self.options.text
    }

    pub fn terminal(&self) -> &T {
        &self.term
    }

    /// Current frame and label, without touching the terminal.
    pub fn render_frame(&self) -> String {
        let frame = self.frames.frames.get(self.frame_index).copied().unwrap_or("");
        let mut out = paint(frame, self.options.color.clone()).into_string();
        if !self.options.text.is_empty() {
            let label = format!(" {}", self.options.text);
            match &self.options.text_color {
                Some(color) => out.push_str(paint(&label, color.clone()).as_str()),
                None => out.push_str(&label),
            }
        }
        out
    }

    pub fn start(&mut self) -> Result<()> {
        if self.state != State::Idle {
            return Ok(());
        }
        self.state = State::Spinning;
        self.term.hide_cursor()?;
        self.draw()
    }

    pub fn start_with(&mut self, text: impl Into<String>) -> Result<()> {
        if self.state == State::Idle {
            self.options.text = text.into();
        }
        self.start()
    }

    /// Advance one frame and redraw. Ignored unless spinning.
    pub fn tick(&mut self) -> Result<()> {
        if !self.is_spinning() || self.frames.is_empty() {
            return Ok(());
        }
        self.frame_index = (self.frame_index + 1) % self.frames.len();
        trace!(frame = self.frame_index, "Spinner tick");
        self.draw()
    }

    /// Replace the label; shown on the next frame.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.options.text = text.into();
    }

    pub fn succeed(&mut self, text: Option<&str>) -> Result<()> {
        self.finish(Outcome::Succeeded, text)
    }

    pub fn fail(&mut self, text: Option<&str>) -> Result<()> {
        self.finish(Outcome::Failed, text)
    }

    pub fn warn(&mut self, text: Option<&str>) -> Result<()> {
        self.finish(Outcome::Warned, text)
    }

    /// Clear the line and finish without a status line.
    pub fn stop(&mut self) -> Result<()> {
        self.finish(Outcome::Stopped, None)
    }

    fn finish(&mut self, outcome: Outcome, text: Option<&str>) -> Result<()> {
        if let State::Finished(_) = self.state {
            return Ok(());
        }
        self.state = State::Finished(outcome);
        self.term.clear_line()?;

        if let Some(symbol) = outcome.symbol() {
            let color = match outcome {
                Outcome::Failed => &self.options.error_color,
                Outcome::Warned => &self.options.warning_color,
                _ => &self.options.success_color,
            };
            let text = text.unwrap_or(&self.options.text);
            let line = format!("{} {text}\n", paint(symbol, color.clone()));
            self.term.write(&line)?;
        }

        self.term.show_cursor()?;
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let frame = self.render_frame();
        self.term.clear_line()?;
        self.term.write(&frame)?;
        Ok(())
    }
}

impl<T: Terminal> Drop for Spinner<T> {
    fn drop(&mut self) {
        if !self.is_spinning() {
            return;
        }
        if let Err(e) = self.stop() {
            debug!(error = %e, "Failed to stop spinner on drop");
        }
    }
}

impl<T: Terminal + Send + 'static> Spinner<T> {
    /// Start the spinner and animate it from a background thread.
    pub fn spawn(mut self) -> Result<SpinnerHandle<T>> {
        self.start()?;
        let interval = self.frames.interval;
        let spinner = Arc::new(Mutex::new(self));
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let ticker = Arc::clone(&spinner);
        let thread = thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {
                    let mut spinner = lock(&ticker);
                    if !spinner.is_spinning() {
                        break;
                    }
                    if let Err(e) = spinner.tick() {
                        warn!(error = %e, "Spinner redraw failed, stopping animation");
                        break;
                    }
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        Ok(SpinnerHandle {
            spinner,
            stop_tx: Some(stop_tx),
            thread: Some(thread),
        })
    }
}

fn lock<S>(mutex: &Mutex<S>) -> MutexGuard<'_, S> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A spinner animated by a background thread.
///
/// Finishing through the handle halts the thread before the final line is
/// drawn. Dropping an unfinished handle stops the spinner.
pub struct SpinnerHandle<T: Terminal + Send + 'static = StdoutTerminal> {
    spinner: Arc<Mutex<Spinner<T>>>,
    stop_tx: Option<mpsc::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl<T: Terminal + Send + 'static> SpinnerHandle<T> {
    pub fn set_text(&self, text: impl Into<String>) {
        lock(&self.spinner).set_text(text);
    }

    pub fn is_spinning(&self) -> bool {
        lock(&self.spinner).is_spinning()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        lock(&self.spinner).outcome()
    }

    pub fn frame_index(&self) -> usize {
        lock(&self.spinner).frame_index()
    }

    pub fn succeed(&mut self, text: Option<&str>) -> Result<()> {
        self.halt();
        lock(&self.spinner).succeed(text)
    }

    pub fn fail(&mut self, text: Option<&str>) -> Result<()> {
        self.halt();
        lock(&self.spinner).fail(text)
    }

    pub fn warn(&mut self, text: Option<&str>) -> Result<()> {
        self.halt();
        lock(&self.spinner).warn(text)
    }

    pub fn stop(&mut self) -> Result<()> {
        self.halt();
        lock(&self.spinner).stop()
    }

    /// Stop the ticker thread and wait for it.
    fn halt(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("Spinner thread panicked");
            }
        }
    }
}

impl<T: Terminal + Send + 'static> Drop for SpinnerHandle<T> {
    fn drop(&mut self) {
        self.halt();
        let mut spinner = lock(&self.spinner);
        if spinner.outcome().is_none() {
            if let Err(e) = spinner.stop() {
                debug!(error = %e, "Failed to stop spinner on drop");
            }
        }
    }
}
