//! Visible-width measurement.
//!
//! Every layout decision in the crate goes through [`visible_width`], which
//! ignores SGR styling sequences (`ESC [ <digits and ;> m`). Nothing else in
//! the crate counts raw string length for alignment.
//!
//! Only well-formed SGR sequences are removed. A partial or malformed escape
//! (no terminating `m`, or a byte other than a digit or `;` in the parameter
//! run) is left in place and counted as visible text.

use std::borrow::Cow;

const ESC: u8 = 0x1B;

/// Strip SGR styling sequences from a string.
///
/// Returns `Cow::Borrowed` when the input contains no ESC byte.
pub fn strip_styling(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&ESC) {
        return Cow::Borrowed(s);
    }

    let bytes = s.as_bytes();
    let mut result = String::with_capacity(s.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == ESC {
            if let Some(end) = sgr_end(bytes, i) {
                i = end;
                continue;
            }
            // Not a well-formed SGR sequence: keep the ESC byte as text.
            result.push('\x1b');
            i += 1;
        } else {
            // ESC is ASCII, so slicing between ESC positions never splits a
            // UTF-8 sequence.
            let start = i;
            while i < bytes.len() && bytes[i] != ESC {
                i += 1;
            }
            result.push_str(&s[start..i]);
        }
    }

    Cow::Owned(result)
}

/// Number of visible columns in `s`: one per `char` outside SGR sequences.
pub fn visible_width(s: &str) -> usize {
    strip_styling(s).chars().count()
}

/// If an SGR sequence starts at `pos`, return the index just past its `m`.
fn sgr_end(bytes: &[u8], pos: usize) -> Option<usize> {
    if bytes.get(pos + 1) != Some(&b'[') {
        return None;
    }
    let mut i = pos + 2;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'0'..=b'9' | b';' => i += 1,
            b'm' => return Some(i + 1),
            _ => return None,
        }
    }
    None
}
