//! Configuration loading tests

use std::fs;

use console_helper::components::spinner::FrameSet;
use console_helper::{BorderStyle, Color, Config, ProgressOptions, SpinnerOptions};
use tempfile::TempDir;

const FULL_CONFIG: &str = r##"
[theme]
preset = "ocean"
border_style = "double"
border_color = "#336699"

[spinner]
kind = "line"
color = "magenta"

[progress]
width = 24
complete_char = "#"
incomplete_char = "-"
complete_color = "blue"
show_percentage = false
show_value = true
"##;

fn write_config(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn full_file_loads_every_section() {
    let (_dir, path) = write_config(FULL_CONFIG);
    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.theme.preset, "ocean");
    assert_eq!(config.theme.border_style, Some(BorderStyle::Double));
    assert_eq!(config.spinner.kind, "line");
    assert_eq!(config.progress.width, 24);
    assert!(config.progress.show_value);

    let theme = config.theme();
    assert_eq!(theme.border_style, BorderStyle::Double);
    assert_eq!(theme.border_color, Some(Color::from("#336699")));
}

#[test]
fn progress_options_follow_config_and_theme() {
    let (_dir, path) = write_config(FULL_CONFIG);
    let config = Config::load_from(&path).unwrap();
    let options = ProgressOptions::from_config(&config);

    assert_eq!(options.width, 24);
    assert_eq!(options.complete_char, "#");
    assert_eq!(options.incomplete_char, "-");
    assert_eq!(options.complete_color, Color::from("blue"));
    // unset, so the ocean theme's muted colour
    assert_eq!(options.incomplete_color, Color::from("blue"));
    assert!(!options.show_percentage);
    assert!(options.show_value);
    assert_eq!(options.total, 100);
}

#[test]
fn spinner_options_follow_config() {
    let (_dir, path) = write_config(FULL_CONFIG);
    let config = Config::load_from(&path).unwrap();
    let options = SpinnerOptions::from_config(&config);

    assert_eq!(options.kind, "line");
    assert_eq!(options.color, Color::from("magenta"));
    assert_eq!(FrameSet::named(&options.kind).frames, &["-", "\\", "|", "/"]);
}

#[test]
fn partial_file_keeps_defaults() {
    let (_dir, path) = write_config("[progress]\nwidth = 10\n");
    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.progress.width, 10);
    assert_eq!(config.progress.complete_char, "█");
    assert_eq!(config.theme.preset, "standard");
    assert_eq!(config.spinner.kind, "dots");
}

#[test]
fn missing_file_is_default() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn malformed_file_reports_path() {
    let (_dir, path) = write_config("[progress\nwidth = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("config.toml"), "{err:#}");
}

#[test]
fn save_then_load_preserves_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.theme.preset = "classic".to_string();
    config.spinner.color = Some(Color::rgb(10, 20, 30));
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}
