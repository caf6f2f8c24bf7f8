//! Greedy word wrapping.

use crate::ansi::visible_width;

/// Wrap `text` so each line is at most `width` visible columns.
///
/// Words are the pieces between single spaces and are joined back with a
/// single space. A word wider than `width` is not split; it lands on a line
/// of its own and overflows.
///
/// With `preserve_newlines`, every input line wraps independently and an
/// empty input line stays an empty output line. Otherwise newlines are
/// treated as spaces.
pub fn wrap(text: &str, width: usize, preserve_newlines: bool) -> Vec<String> {
    if !preserve_newlines {
        return wrap_line(&text.replace('\n', " "), width);
    }

    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let wrapped = wrap_line(raw, width);
        if wrapped.is_empty() {
            lines.push(String::new());
        } else {
            lines.extend(wrapped);
        }
    }
    lines
}

fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in line.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if visible_width(&candidate) <= width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
