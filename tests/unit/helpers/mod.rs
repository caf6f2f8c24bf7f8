//! Test helper utilities

#![allow(dead_code)]

use console_helper::{strip_styling, visible_width};

/// Visible width of every line in `rendered`.
pub fn line_widths(rendered: &str) -> Vec<usize> {
    rendered.split('\n').map(visible_width).collect()
}

/// Assert every line has the same visible width and return it.
pub fn assert_rectangular(rendered: &str) -> usize {
    let widths = line_widths(rendered);
    let first = widths[0];
    assert!(
        widths.iter().all(|w| *w == first),
        "lines differ in width {widths:?}:\n{rendered}"
    );
    first
}

/// Rendered text without styling.
pub fn plain(rendered: &str) -> String {
    strip_styling(rendered).into_owned()
}

/// A few strings with and without styling, for property-style loops.
pub fn sample_texts() -> Vec<String> {
    vec![
        String::new(),
        "a".to_string(),
        "hello world".to_string(),
        "\x1b[1m\x1b[31mbold red\x1b[0m".to_string(),
        "mixed \x1b[32mgreen\x1b[0m text".to_string(),
        "  padded  ".to_string(),
        "ünïcödé".to_string(),
    ]
}
