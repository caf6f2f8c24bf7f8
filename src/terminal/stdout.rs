//! The process terminal, driven through crossterm.

use std::io::{self, Stdout, Write};

use crossterm::{cursor, execute, terminal};
use tracing::debug;

use super::{RawModeGuard, Terminal, TerminalSize};

/// Writes to stdout, flushing after every call.
pub struct StdoutTerminal {
    out: Stdout,
}

impl Default for StdoutTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl StdoutTerminal {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

fn rows(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

impl Terminal for StdoutTerminal {
    fn write(&mut self, text: &str) -> io::Result<()> {
        // Raw mode turns off output post-processing, so a bare LF would not
        // return the carriage.
        if terminal::is_raw_mode_enabled().unwrap_or(false) {
            self.out.write_all(text.replace('\n', "\r\n").as_bytes())?;
        } else {
            self.out.write_all(text.as_bytes())?;
        }
        self.out.flush()
    }

    fn clear_line(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            terminal::Clear(terminal::ClearType::CurrentLine),
            cursor::MoveToColumn(0)
        )
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(self.out, cursor::Hide)
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        execute!(self.out, cursor::Show)
    }

    fn cursor_up(&mut self, n: usize) -> io::Result<()> {
        if n == 0 {
            return Ok(());
        }
        execute!(self.out, cursor::MoveUp(rows(n)))
    }

    fn cursor_down(&mut self, n: usize) -> io::Result<()> {
        if n == 0 {
            return Ok(());
        }
        execute!(self.out, cursor::MoveDown(rows(n)))
    }

    fn move_cursor(&mut self, x: usize, y: usize) -> io::Result<()> {
        execute!(self.out, cursor::MoveTo(rows(x), rows(y)))
    }

    fn save_cursor(&mut self) -> io::Result<()> {
        execute!(self.out, cursor::SavePosition)
    }

    fn restore_cursor(&mut self) -> io::Result<()> {
        execute!(self.out, cursor::RestorePosition)
    }

    fn enter_alternate_screen(&mut self) -> io::Result<()> {
        execute!(self.out, terminal::EnterAlternateScreen)
    }

    fn leave_alternate_screen(&mut self) -> io::Result<()> {
        execute!(self.out, terminal::LeaveAlternateScreen)
    }

    fn size(&self) -> TerminalSize {
        super::size()
    }

    fn supports_color(&self) -> bool {
        super::supports_color()
    }

    fn enter_raw_mode(&mut self) -> io::Result<RawModeGuard> {
        if !atty::is(atty::Stream::Stdin) {
            debug!("stdin is not a TTY, leaving input mode alone");
            return Ok(RawModeGuard::noop());
        }
        if terminal::is_raw_mode_enabled()? {
            return Ok(RawModeGuard::noop());
        }

        terminal::enable_raw_mode()?;
        debug!("Entered raw mode");
        Ok(RawModeGuard::new(|| {
            if let Err(e) = terminal::disable_raw_mode() {
                debug!(error = %e, "Failed to leave raw mode");
            }
        }))
    }
}
