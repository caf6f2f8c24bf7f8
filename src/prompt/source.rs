//! Where prompts read keys from.

use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event, KeyEventKind};

use super::key::Key;

/// Yields one decoded key per call, blocking until it arrives.
pub trait KeySource {
    fn next_key(&mut self) -> io::Result<Key>;
}

/// Key presses from the process terminal.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl CrosstermKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        loop {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases as separate events.
                if key.kind != KeyEventKind::Release {
                    return Ok(Key::from(key));
                }
            }
        }
    }
}

/// A fixed sequence of keys, for tests and scripted input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Each character of `text` followed by Enter.
    pub fn line(text: &str) -> Self {
        let mut keys = Key::typed(text);
        keys.push(Key::enter());
        Self::new(keys)
    }

    pub fn push(&mut self, key: Key) {
        self.keys.push_back(key);
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        self.keys.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "scripted keys exhausted")
        })
    }
}
