//! Box, table, progress and spinner rendering tests

use console_helper::components::progress::filled_cells;
use console_helper::components::FrameSet;
use console_helper::{
    Align, BorderStyle, BoxSpec, MemoryTerminal, ProgressBar, ProgressOptions, Spacing, Spinner,
    SpinnerOptions, TableSpec,
};

use crate::helpers::{assert_rectangular, plain, sample_texts};

#[test]
fn box_with_horizontal_padding() {
    let rendered = BoxSpec::new("Hi")
        .padding(Spacing::horizontal(1))
        .render();
    assert_eq!(rendered, "┌────┐\n│ Hi │\n└────┘");
}

#[test]
fn boxes_are_rectangular() {
    let styles = [
        BorderStyle::Single,
        BorderStyle::Double,
        BorderStyle::Round,
        BorderStyle::Bold,
        BorderStyle::Classic,
    ];
    for text in sample_texts() {
        for style in styles {
            for width in [None, Some(3), Some(12)] {
                let mut spec = BoxSpec::new(text.clone())
                    .border_style(style)
                    .title("Title")
                    .border_color("cyan");
                if let Some(width) = width {
                    spec = spec.width(width);
                }
                let rendered = spec.render();
                let outer = assert_rectangular(&rendered);
                assert_eq!(outer, spec.inner_width() + 2, "{rendered}");
            }
        }
    }
}

#[test]
fn box_height_pads_rows() {
    let rendered = BoxSpec::new("x").padding(Spacing::uniform(0)).height(5).render();
    assert_eq!(rendered.lines().count(), 5);
    assert_rectangular(&rendered);
}

#[test]
fn table_column_widths() {
    let table = TableSpec::new(["A", "BB"], [["1", "22"]]);
    assert_eq!(table.resolved_widths(), vec![1, 2]);
    assert_eq!(
        table.render(),
        "┌───┬────┐\n│ A │ BB │\n├───┼────┤\n│ 1 │ 22 │\n└───┴────┘"
    );
}

#[test]
fn tables_are_rectangular() {
    let rows = vec![
        vec!["short".to_string()],
        vec!["a".to_string(), "\x1b[31mred\x1b[0m".to_string(), "ünï".to_string()],
        vec![String::new(), "longer cell text".to_string()],
    ];
    for style in ["single", "double", "round", "bold", "classic"] {
        for show_headers in [true, false] {
            let table = TableSpec::new(["Name", "Value"], rows.clone())
                .border_style(style)
                .header_color("cyan")
                .align(vec![Align::Left, Align::Center, Align::Right])
                .show_headers(show_headers);
            assert_rectangular(&table.render());

            let fixed = table.clone().column_widths(vec![2, 4]);
            assert_rectangular(&fixed.render());
        }
    }
}

#[test]
fn table_truncates_cells_beyond_fixed_width() {
    let table = TableSpec::new(["Name"], [["Alexander"]]).column_widths(vec![6]);
    let rendered = table.render();
    assert!(rendered.contains("│ Ale... │"), "{rendered}");
    assert_rectangular(&rendered);
}

#[test]
fn progress_fill_is_monotonic_and_bounded() {
    for width in [0, 1, 7, 10, 40] {
        let mut last = 0;
        for step in 0..=100 {
            let filled = filled_cells(width, step as f64);
            assert!(filled <= width);
            assert!(filled >= last, "width {width} at {step}%");
            last = filled;
        }
        assert_eq!(filled_cells(width, 100.0), width);
        assert_eq!(filled_cells(width, 0.0), 0);
    }
}

#[test]
fn progress_render_has_constant_width() {
    let options = ProgressOptions::default()
        .total(7)
        .width(12)
        .show_percentage(false);
    let mut bar = ProgressBar::with_terminal(options, MemoryTerminal::new());
    for value in 0..=7 {
        bar.update(value).unwrap();
        assert_eq!(plain(&bar.render()).chars().count(), 14);
    }
}

#[test]
fn spinner_wraps_frame_index() {
    assert_eq!(FrameSet::named("toggle").len(), 2);
    let options = SpinnerOptions::default().kind("toggle");
    let mut spinner = Spinner::with_terminal(options, MemoryTerminal::new());
    spinner.start().unwrap();
    for _ in 0..3 {
        spinner.tick().unwrap();
    }
    assert_eq!(spinner.frame_index(), 1);
}
