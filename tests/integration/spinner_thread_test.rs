//! Background spinner animation tests

use std::thread;
use std::time::{Duration, Instant};

use console_helper::{strip_styling, MemoryTerminal, Outcome, Spinner, SpinnerOptions};

fn wait_for(mut done: impl FnMut() -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !done() {
        assert!(Instant::now() < deadline, "timed out waiting for spinner");
        thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn spawned_spinner_animates_then_succeeds() {
    let term = MemoryTerminal::new();
    let options = SpinnerOptions::default().kind("line").text("Working");
    let mut handle = Spinner::with_terminal(options, term.clone())
        .spawn()
        .unwrap();

    wait_for(|| handle.frame_index() >= 2);
    assert!(handle.is_spinning());

    handle.succeed(Some("Done")).unwrap();
    assert!(!handle.is_spinning());
    assert_eq!(handle.outcome(), Some(Outcome::Succeeded));

    let screen = strip_styling(&term.contents()).into_owned();
    assert!(screen.contains("- Working"));
    assert!(screen.contains("\\ Working"));
    assert!(screen.ends_with("✓ Done\n\x1b[?25h"), "{screen:?}");

    // the ticker has been joined, so nothing more is drawn
    let settled = term.contents();
    thread::sleep(Duration::from_millis(250));
    assert_eq!(term.contents(), settled);
}

#[test]
fn set_text_through_handle_shows_on_next_frame() {
    let term = MemoryTerminal::new();
    let options = SpinnerOptions::default().kind("toggle").text("one");
    let mut handle = Spinner::with_terminal(options, term.clone())
        .spawn()
        .unwrap();

    handle.set_text("two");
    wait_for(|| strip_styling(&term.contents()).contains(" two"));
    handle.fail(None).unwrap();

    assert_eq!(handle.outcome(), Some(Outcome::Failed));
    assert!(strip_styling(&term.contents()).contains("✗ two\n"));
}

#[test]
fn dropping_handle_stops_spinner() {
    let term = MemoryTerminal::new();
    let handle = Spinner::with_terminal(SpinnerOptions::default(), term.clone())
        .spawn()
        .unwrap();
    drop(handle);

    let screen = term.contents();
    assert!(screen.ends_with("\x1b[2K\r\x1b[?25h"), "{screen:?}");
}

#[test]
fn finishing_twice_keeps_first_outcome() {
    let term = MemoryTerminal::new();
    let mut handle = Spinner::with_terminal(SpinnerOptions::default(), term.clone())
        .spawn()
        .unwrap();
    handle.warn(Some("careful")).unwrap();
    handle.succeed(Some("ignored")).unwrap();

    assert_eq!(handle.outcome(), Some(Outcome::Warned));
    let screen = strip_styling(&term.contents()).into_owned();
    assert!(screen.contains("⚠ careful"));
    assert!(!screen.contains("ignored"));
}
