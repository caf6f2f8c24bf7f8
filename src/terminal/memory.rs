//! In-memory terminal that records everything written to it.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::{RawModeGuard, Terminal, TerminalSize};

/// Captures output in a shared buffer.
///
/// Clones share the same buffer and raw-mode flag, so a test can hand one
/// clone to a widget (or a spinner thread) and inspect the other.
#[derive(Debug, Clone)]
pub struct MemoryTerminal {
    output: Arc<Mutex<String>>,
    raw: Arc<AtomicBool>,
    size: TerminalSize,
    color: bool,
}

impl Default for MemoryTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTerminal {
    /// 80x24, colour enabled.
    pub fn new() -> Self {
        Self {
            output: Arc::new(Mutex::new(String::new())),
            raw: Arc::new(AtomicBool::new(false)),
            size: TerminalSize::default(),
            color: true,
        }
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.size = TerminalSize { width, height };
        self
    }

    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buffer().clone()
    }

    /// Everything written so far, clearing the buffer.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.buffer())
    }

    /// Whether a raw-mode guard is currently held.
    pub fn is_raw(&self) -> bool {
        self.raw.load(Ordering::SeqCst)
    }

    fn buffer(&self) -> std::sync::MutexGuard<'_, String> {
        // A panic while holding the lock cannot leave a String half-written.
        self.output.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Terminal for MemoryTerminal {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.buffer().push_str(text);
        Ok(())
    }

    fn size(&self) -> TerminalSize {
        self.size
    }

    fn supports_color(&self) -> bool {
        self.color
    }

    fn enter_raw_mode(&mut self) -> io::Result<RawModeGuard> {
        if self.raw.swap(true, Ordering::SeqCst) {
            return Ok(RawModeGuard::noop());
        }
        let raw = Arc::clone(&self.raw);
        Ok(RawModeGuard::new(move || raw.store(false, Ordering::SeqCst)))
    }
}
