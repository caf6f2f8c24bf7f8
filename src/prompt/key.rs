//! Decoded keystrokes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a keystroke means to the prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Char(char),
    Enter,
    Backspace,
    CtrlC,
    ArrowUp,
    ArrowDown,
    Other,
}

/// One keystroke: its meaning plus the raw text it arrived as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    pub kind: KeyKind,
    pub raw: String,
}

impl Key {
    pub fn new(kind: KeyKind, raw: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
        }
    }

    pub fn char(c: char) -> Self {
        Self::new(KeyKind::Char(c), c.to_string())
    }

    pub fn enter() -> Self {
        Self::new(KeyKind::Enter, "\r")
    }

    pub fn backspace() -> Self {
        Self::new(KeyKind::Backspace, "\x7f")
    }

    pub fn ctrl_c() -> Self {
        Self::new(KeyKind::CtrlC, "\x03")
    }

    pub fn up() -> Self {
        Self::new(KeyKind::ArrowUp, "\x1b[A")
    }

    pub fn down() -> Self {
        Self::new(KeyKind::ArrowDown, "\x1b[B")
    }

    /// One `Char` key per character of `text`.
    pub fn typed(text: &str) -> Vec<Key> {
        text.chars().map(Self::char).collect()
    }

    /// Decode one chunk of raw terminal input.
    ///
    /// A chunk holding several printable characters (a paste) is `Other`;
    /// prompts only insert single characters.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let raw = String::from_utf8_lossy(bytes).into_owned();
        let kind = match bytes {
            [13] => KeyKind::Enter,
            [3] => KeyKind::CtrlC,
            [127] | [8] => KeyKind::Backspace,
            b"\x1b[A" => KeyKind::ArrowUp,
            b"\x1b[B" => KeyKind::ArrowDown,
            [] => KeyKind::Other,
            [first, ..] if *first < 32 => KeyKind::Other,
            _ => {
                let mut chars = raw.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyKind::Char(c),
                    _ => KeyKind::Other,
                }
            }
        };
        Self { kind, raw }
    }

    pub fn is_char(&self, c: char) -> bool {
        self.kind == KeyKind::Char(c)
    }
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        match event.code {
            KeyCode::Char('c' | 'C') if ctrl => Self::ctrl_c(),
            KeyCode::Char(_) if ctrl || event.modifiers.contains(KeyModifiers::ALT) => {
                Self::new(KeyKind::Other, "")
            }
            KeyCode::Char(c) => Self::char(c),
            KeyCode::Enter => Self::enter(),
            KeyCode::Backspace => Self::backspace(),
            KeyCode::Up => Self::up(),
            KeyCode::Down => Self::down(),
            _ => Self::new(KeyKind::Other, ""),
        }
    }
}
