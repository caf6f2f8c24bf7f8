//! Truncation with an ellipsis suffix.

use crate::ansi::{strip_styling, visible_width};

/// Suffix appended by [`truncate`].
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Truncate `text` to `width` visible columns, appending `"..."`.
pub fn truncate(text: &str, width: usize) -> String {
    truncate_with(text, width, DEFAULT_ELLIPSIS)
}

/// Truncate `text` to `width` visible columns, appending `ellipsis`.
///
/// Text that already fits is returned unchanged, styling included.
/// Truncated output is cut from the stripped text, so any styling in the
/// source is lost. When `width` cannot hold more than the ellipsis, the
/// ellipsis itself is cut to `width`.
pub fn truncate_with(text: &str, width: usize, ellipsis: &str) -> String {
    if visible_width(text) <= width {
        return text.to_string();
    }

    let ellipsis_width = visible_width(ellipsis);
    if width <= ellipsis_width {
        return strip_styling(ellipsis).chars().take(width).collect();
    }

    let mut out: String = strip_styling(text)
        .chars()
        .take(width - ellipsis_width)
        .collect();
    out.push_str(ellipsis);
    out
}
