//! Styled span tests

use console_helper::style::RESET;
use console_helper::{compose, paint, strip_styling, Color, StyleSpec, Text};

use crate::helpers::sample_texts;

fn all_specs() -> Vec<StyleSpec> {
    vec![
        StyleSpec::new(),
        StyleSpec::fg("red"),
        StyleSpec::new().bold().underline(),
        StyleSpec::fg("#ff8800").bg_color("blue").italic(),
        StyleSpec::fg(Color::rgb(1, 2, 3)).inverse().blink().dim().strikethrough(),
        StyleSpec::fg("no-such-colour"),
    ]
}

#[test]
fn compose_then_strip_returns_the_text() {
    for text in sample_texts() {
        let plain = strip_styling(&text).into_owned();
        for spec in all_specs() {
            let span = compose(&plain, &spec);
            assert_eq!(strip_styling(span.as_str()), plain, "{spec:?}");
        }
    }
}

#[test]
fn every_span_ends_with_one_reset() {
    for spec in all_specs() {
        let span = compose("x", &spec).into_string();
        assert!(span.ends_with(RESET));
        assert_eq!(span.matches(RESET).count(), 1);
    }
}

#[test]
fn plain_spec_still_resets() {
    assert_eq!(compose("x", &StyleSpec::new()).as_str(), "x\x1b[0m");
}

#[test]
fn named_and_hex_foregrounds() {
    assert_eq!(paint("ok", "green").as_str(), "\x1b[32mok\x1b[0m");
    assert_eq!(paint("ok", "brightRed").as_str(), "\x1b[91mok\x1b[0m");
    assert_eq!(paint("ok", "grey").as_str(), "\x1b[90mok\x1b[0m");
    assert_eq!(
        paint("ok", "#FF0080").as_str(),
        "\x1b[38;2;255;0;128mok\x1b[0m"
    );
}

#[test]
fn unresolved_colour_emits_no_code() {
    assert_eq!(paint("ok", "chartreuse").as_str(), "ok\x1b[0m");
    assert_eq!(paint("ok", "#12345").as_str(), "ok\x1b[0m");
}

#[test]
fn colour_strings_classify() {
    assert_eq!(Color::parse("#abc"), Color::Hex("#abc".to_string()));
    assert_eq!(Color::parse("a0b1c2"), Color::Hex("a0b1c2".to_string()));
    assert_eq!(Color::parse("cyan"), Color::Named("cyan".to_string()));
    assert_eq!(Color::from((9u8, 8u8, 7u8)), Color::rgb(9, 8, 7));
}

#[test]
fn text_shorthands_and_display() {
    let text = Text::red("fail");
    assert_eq!(text.to_string(), "\x1b[31mfail\x1b[0m");
    assert_eq!(text.plain(), "fail");

    let underlined = Text::underline("link").color("blue");
    assert_eq!(underlined.render(), "\x1b[4m\x1b[34mlink\x1b[0m");
}

#[test]
fn text_attributes_chain_onto_colours() {
    assert_eq!(Text::red("x").with_bold().render(), "\x1b[1m\x1b[31mx\x1b[0m");

    let text = Text::new("note").with_italic().with_underline().bg_color("white");
    assert!(text.style().italic && text.style().underline);
    assert!(!text.style().bold);
    assert_eq!(text.render(), "\x1b[3m\x1b[4m\x1b[47mnote\x1b[0m");

    let all = Text::bold("a")
        .with_dim()
        .with_strikethrough()
        .with_inverse()
        .with_blink();
    assert_eq!(all.style(), &StyleSpec::new().bold().dim().strikethrough().inverse().blink());
}
