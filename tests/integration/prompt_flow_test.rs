//! Prompt flows driven by scripted keys
//!
//! Each test runs a prompt against a MemoryTerminal and checks both the
//! returned value and what was left on screen.

use console_helper::prompt::{Choice, Confirm, Input, Key, ScriptedKeys, Select};
use console_helper::{strip_styling, ConsoleError, MemoryTerminal, Theme};

use crate::helpers::{session, typed_line};

// ============================================================================
// Input
// ============================================================================

#[test]
fn input_returns_typed_line() {
    let (mut term, mut keys) = session(typed_line("bob"));
    let name = Input::new("Name?").run(&mut term, &mut keys).unwrap();

    assert_eq!(name, "bob");
    assert!(!term.is_raw());
    assert!(strip_styling(&term.contents()).contains("Name? bob"));
}

#[test]
fn input_backspace_edits_value() {
    let mut keys = Key::typed("cat");
    keys.push(Key::backspace());
    keys.extend(typed_line("r"));
    let (mut term, mut keys) = session(keys);

    let value = Input::new("").run(&mut term, &mut keys).unwrap();
    assert_eq!(value, "car");
}

#[test]
fn input_empty_submit_keeps_default() {
    let (mut term, mut keys) = session([Key::enter()]);
    let value = Input::new("Port")
        .default_value("8080")
        .run(&mut term, &mut keys)
        .unwrap();
    assert_eq!(value, "8080");
}

#[test]
fn input_retries_until_validator_passes() {
    let mut keys = typed_line("x");
    keys.extend(typed_line("xyz"));
    let (mut term, mut keys) = session(keys);

    let value = Input::new("Code")
        .validate(|v| (v.chars().count() < 3).then(|| "too short".to_string()))
        .run(&mut term, &mut keys)
        .unwrap();

    assert_eq!(value, "xyz");
    let screen = strip_styling(&term.contents()).into_owned();
    assert_eq!(screen.matches("✗ too short").count(), 1);
    assert_eq!(keys.remaining(), 0);
}

#[test]
fn input_max_length_ignores_extra_keys() {
    let (mut term, mut keys) = session(typed_line("abcdef"));
    let value = Input::new("PIN")
        .max_length(4)
        .run(&mut term, &mut keys)
        .unwrap();
    assert_eq!(value, "abcd");
}

#[test]
fn password_input_echoes_mask() {
    let (mut term, mut keys) = session(typed_line("hunter2"));
    let secret = Input::password("Password")
        .run(&mut term, &mut keys)
        .unwrap();

    assert_eq!(secret, "hunter2");
    let screen = term.contents();
    assert!(!screen.contains("hunter2"));
    assert!(screen.contains("•••••••"));
}

#[test]
fn ctrl_c_cancels_and_restores_terminal() {
    let mut keys = Key::typed("ab");
    keys.push(Key::ctrl_c());
    let (mut term, mut keys) = session(keys);

    let err = Input::new("Name").run(&mut term, &mut keys).unwrap_err();
    assert!(err.is_cancelled());
    assert!(!term.is_raw());
    assert!(term.contents().ends_with("\x1b[?25h\n"));
}

#[test]
fn exhausted_keys_surface_as_io_error() {
    let (mut term, mut keys) = session(Key::typed("no enter"));
    let err = Input::new("").run(&mut term, &mut keys).unwrap_err();
    assert!(matches!(err, ConsoleError::Io(_)));
    assert!(!term.is_raw());
}

// ============================================================================
// Confirm
// ============================================================================

#[test]
fn confirm_answers() {
    let cases = [
        ("", true, true),
        ("", false, false),
        ("y", false, true),
        ("YES", false, true),
        ("nope", true, false),
    ];
    for (typed, default, expected) in cases {
        let mut term = MemoryTerminal::new();
        let mut keys = ScriptedKeys::line(typed);
        let answer = Confirm::new("Continue?", default)
            .run(&mut term, &mut keys)
            .unwrap();
        assert_eq!(answer, expected, "{typed:?} default {default}");
    }
}

#[test]
fn confirm_shows_default_hint() {
    let mut term = MemoryTerminal::new();
    let mut keys = ScriptedKeys::line("");
    Confirm::new("Delete?", false)
        .theme(&Theme::classic())
        .run(&mut term, &mut keys)
        .unwrap();
    assert!(strip_styling(&term.contents()).contains("Delete? (y/N)"));
}

// ============================================================================
// Select
// ============================================================================

#[test]
fn select_moves_and_submits() {
    let (mut term, mut keys) = session([Key::down(), Key::down(), Key::enter()]);
    let mut select = Select::menu("Pick", ["a", "b", "c"]).unwrap();
    assert_eq!(select.run(&mut term, &mut keys).unwrap(), "c");
    assert!(!term.is_raw());
    assert!(strip_styling(&term.contents()).ends_with("❯ c\n\x1b[?25h"));
}

#[test]
fn select_wraps_upwards() {
    let (mut term, mut keys) = session([Key::up(), Key::enter()]);
    let mut select = Select::menu("Pick", ["a", "b", "c"]).unwrap();
    assert_eq!(select.run(&mut term, &mut keys).unwrap(), "c");
}

#[test]
fn select_vim_keys() {
    let (mut term, mut keys) = session([Key::char('j'), Key::char('j'), Key::char('k'), Key::enter()]);
    let mut select = Select::menu("", ["a", "b", "c"]).unwrap();
    assert_eq!(select.run(&mut term, &mut keys).unwrap(), "b");
}

#[test]
fn select_skips_disabled_choices() {
    let choices = vec![
        Choice::new("Small", 1),
        Choice::new("Medium", 2).disabled(),
        Choice::new("Large", 3),
    ];
    let (mut term, mut keys) = session([Key::down(), Key::enter()]);
    let mut select = Select::new("Size", choices).unwrap();
    assert_eq!(select.run(&mut term, &mut keys).unwrap(), 3);
}

#[test]
fn select_default_value_starts_selection() {
    let (mut term, mut keys) = session([Key::enter()]);
    let mut select = Select::menu("Pick", ["a", "b", "c"])
        .unwrap()
        .default_value(&"b".to_string());
    assert_eq!(select.run(&mut term, &mut keys).unwrap(), "b");
}

#[test]
fn select_rejects_empty_choices() {
    let err = Select::<String>::new("Pick", Vec::new()).unwrap_err();
    assert!(matches!(err, ConsoleError::NoChoices));
    assert_eq!(err.to_string(), "Select requires at least one choice");
}

#[test]
fn select_cancel() {
    let (mut term, mut keys) = session([Key::down(), Key::ctrl_c()]);
    let mut select = Select::menu("Pick", ["a", "b"]).unwrap();
    let err = select.run(&mut term, &mut keys).unwrap_err();
    assert!(err.is_cancelled());
    assert!(!term.is_raw());
}
