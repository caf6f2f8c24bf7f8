//! Terminal output collaborator.
//!
//! Components never talk to stdout directly; they write through the
//! [`Terminal`] trait. [`StdoutTerminal`] is the real implementation,
//! backed by crossterm. [`MemoryTerminal`] captures output for tests and
//! for rendering into a buffer.
//!
//! Raw mode is handed out as a [`RawModeGuard`] that restores the previous
//! mode when dropped, so every exit path from a prompt (submit, cancel,
//! error) leaves the terminal as it found it.

mod memory;
mod stdout;

pub use memory::MemoryTerminal;
pub use stdout::StdoutTerminal;

use std::io;

use tracing::debug;

/// Raw escape sequences written by the default [`Terminal`] methods.
pub mod escape {
    pub const CLEAR_LINE: &str = "\x1b[2K\r";
    pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
    pub const HIDE_CURSOR: &str = "\x1b[?25l";
    pub const SHOW_CURSOR: &str = "\x1b[?25h";
    pub const SAVE_CURSOR: &str = "\x1b[s";
    pub const RESTORE_CURSOR: &str = "\x1b[u";
    pub const ENTER_ALTERNATE_SCREEN: &str = "\x1b[?1049h";
    pub const LEAVE_ALTERNATE_SCREEN: &str = "\x1b[?1049l";

    pub fn cursor_up(n: usize) -> String {
        format!("\x1b[{n}A")
    }

    pub fn cursor_down(n: usize) -> String {
        format!("\x1b[{n}B")
    }

    /// Move to a 0-based column/row.
    pub fn move_cursor(x: usize, y: usize) -> String {
        format!("\x1b[{};{}H", y + 1, x + 1)
    }
}

/// Width and height in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: usize,
    pub height: usize,
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

/// Everything the renderers and prompts need from a terminal.
pub trait Terminal {
    fn write(&mut self, text: &str) -> io::Result<()>;

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(&format!("{text}\n"))
    }

    fn clear_line(&mut self) -> io::Result<()> {
        self.write(escape::CLEAR_LINE)
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.write(escape::CLEAR_SCREEN)
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        self.write(escape::HIDE_CURSOR)
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        self.write(escape::SHOW_CURSOR)
    }

    /// Move the cursor up `n` rows. Zero is a no-op.
    fn cursor_up(&mut self, n: usize) -> io::Result<()> {
        if n == 0 {
            return Ok(());
        }
        self.write(&escape::cursor_up(n))
    }

    /// Move the cursor down `n` rows. Zero is a no-op.
    fn cursor_down(&mut self, n: usize) -> io::Result<()> {
        if n == 0 {
            return Ok(());
        }
        self.write(&escape::cursor_down(n))
    }

    fn move_cursor(&mut self, x: usize, y: usize) -> io::Result<()> {
        self.write(&escape::move_cursor(x, y))
    }

    fn save_cursor(&mut self) -> io::Result<()> {
        self.write(escape::SAVE_CURSOR)
    }

    fn restore_cursor(&mut self) -> io::Result<()> {
        self.write(escape::RESTORE_CURSOR)
    }

    fn enter_alternate_screen(&mut self) -> io::Result<()> {
        self.write(escape::ENTER_ALTERNATE_SCREEN)
    }

    fn leave_alternate_screen(&mut self) -> io::Result<()> {
        self.write(escape::LEAVE_ALTERNATE_SCREEN)
    }

    fn size(&self) -> TerminalSize;

    fn supports_color(&self) -> bool;

    /// Switch input to raw mode until the returned guard is dropped.
    fn enter_raw_mode(&mut self) -> io::Result<RawModeGuard>;
}

/// Restores the previous input mode when dropped.
#[must_use = "raw mode is restored as soon as the guard is dropped"]
pub struct RawModeGuard {
    restore: Option<Box<dyn FnOnce() + Send>>,
}

impl RawModeGuard {
    pub fn new(restore: impl FnOnce() + Send + 'static) -> Self {
        Self {
            restore: Some(Box::new(restore)),
        }
    }

    /// A guard that changes nothing (input is not a TTY, or was already raw).
    pub fn noop() -> Self {
        Self { restore: None }
    }

    /// Restore the previous mode now instead of at end of scope.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            debug!("Restoring terminal input mode");
            restore();
        }
    }
}

impl std::fmt::Debug for RawModeGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawModeGuard")
            .field("armed", &self.restore.is_some())
            .finish()
    }
}

/// Size of the process terminal, 80x24 when it cannot be determined.
pub fn size() -> TerminalSize {
    match terminal_size::terminal_size() {
        Some((terminal_size::Width(w), terminal_size::Height(h))) => TerminalSize {
            width: w as usize,
            height: h as usize,
        },
        None => TerminalSize::default(),
    }
}

/// Whether styled output should be emitted for the process terminal.
///
/// `NO_COLOR` wins over `FORCE_COLOR`; without either, colour follows
/// whether stdout is a TTY.
pub fn supports_color() -> bool {
    color_support(
        env_flag("NO_COLOR"),
        env_flag("FORCE_COLOR"),
        atty::is(atty::Stream::Stdout),
    )
}

/// Decision table behind [`supports_color`].
pub fn color_support(no_color: bool, force_color: bool, is_tty: bool) -> bool {
    if no_color {
        return false;
    }
    if force_color {
        return true;
    }
    is_tty
}

fn env_flag(name: &str) -> bool {
    std::env::var_os(name).is_some_and(|v| !v.is_empty())
}
