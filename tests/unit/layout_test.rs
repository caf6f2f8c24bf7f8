//! Layout primitive tests through the public API

use console_helper::layout::{add_margin, center, max_line_width, pad, truncate, wrap};
use console_helper::{strip_styling, visible_width, Align, Spacing};

use crate::helpers::sample_texts;

#[test]
fn pad_centers_with_smaller_half_left() {
    assert_eq!(pad("hi", 5, Align::Center), " hi  ");
    assert_eq!(pad("hi", 5, Align::Left), "hi   ");
    assert_eq!(pad("hi", 5, Align::Right), "   hi");
}

#[test]
fn pad_width_property() {
    for text in sample_texts() {
        for width in 0..16 {
            for align in [Align::Left, Align::Center, Align::Right] {
                let padded = pad(&text, width, align);
                assert_eq!(
                    visible_width(&padded),
                    width.max(visible_width(&text)),
                    "{text:?} {width} {align:?}"
                );
            }
        }
    }
}

#[test]
fn stripping_is_idempotent() {
    for text in sample_texts() {
        let once = strip_styling(&text);
        assert_eq!(strip_styling(&once), once);
        assert_eq!(visible_width(&once), visible_width(&text));
    }
}

#[test]
fn wrap_scenario() {
    assert_eq!(wrap("a bb ccc", 4, true), vec!["a bb", "ccc"]);
}

#[test]
fn wrap_lines_fit_unless_word_is_too_long() {
    let text = "the quick brown fox jumps over the extraordinarily lazy dog";
    for width in 3..30 {
        for line in wrap(text, width, true) {
            let fits = visible_width(&line) <= width;
            let single_word = !line.contains(' ');
            assert!(fits || single_word, "{line:?} at {width}");
        }
    }
}

#[test]
fn wrap_keeps_paragraph_breaks() {
    assert_eq!(
        wrap("one two\n\nthree", 3, true),
        vec!["one", "two", "", "three"]
    );
    assert_eq!(wrap("one\ntwo", 20, false), vec!["one two"]);
}

#[test]
fn truncate_respects_width() {
    for text in sample_texts() {
        for width in 0..12 {
            let out = truncate(&text, width);
            assert!(visible_width(&out) <= width, "{text:?} {width} -> {out:?}");
        }
    }
    assert_eq!(truncate("Hello world", 8), "Hello...");
    assert_eq!(truncate("short", 8), "short");
}

#[test]
fn center_with_explicit_width() {
    assert_eq!(center("abc", Some(7)), "  abc  ");
    assert_eq!(center("abc", Some(2)), "abc");
}

#[test]
fn margins_surround_every_line() {
    let out = add_margin("x\nyy", Spacing { top: 1, right: 0, bottom: 0, left: 2 });
    assert_eq!(out, "\n  x\n  yy");
    assert_eq!(max_line_width(&out), 4);
}
