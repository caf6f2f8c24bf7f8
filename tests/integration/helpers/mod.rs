//! Shared helpers for integration tests

#![allow(dead_code)]

use console_helper::prompt::{Key, ScriptedKeys};
use console_helper::MemoryTerminal;

/// Replace ESC with a visible marker so snapshots stay readable.
pub fn show_escapes(output: &str) -> String {
    output.replace('\x1b', "␛")
}

/// A fresh capture terminal and a key script.
pub fn session(keys: impl IntoIterator<Item = Key>) -> (MemoryTerminal, ScriptedKeys) {
    (MemoryTerminal::new(), ScriptedKeys::new(keys))
}

/// Keys for typing `text` and pressing Enter.
pub fn typed_line(text: &str) -> Vec<Key> {
    let mut keys = Key::typed(text);
    keys.push(Key::enter());
    keys
}

/// Insta filters that drop SGR and cursor escapes.
pub fn escape_filters() -> Vec<(&'static str, &'static str)> {
    vec![(r"\x1b\[[0-9;?]*[A-Za-z]", "")]
}
