//! Snapshot tests for rendered components
//!
//! Boxes, tables and banners are compared as plain text; coloured output
//! goes through either escape filters or visible ESC markers.

use console_helper::components::{banner, loading_bar};
use console_helper::{Align, BoxSpec, MemoryTerminal, ProgressBar, ProgressOptions, Spacing, TableSpec};
use serde_json::{json, Map, Value};

use crate::helpers::{escape_filters, show_escapes};

fn record(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

// ============================================================================
// Boxes
// ============================================================================

#[test]
fn snapshot_round_box_wraps_at_fixed_width() {
    let out = BoxSpec::round("The quick brown fox jumps over the lazy dog")
        .title("Note")
        .width(20)
        .padding(Spacing::horizontal(1))
        .render();
    insta::assert_snapshot!(out, @r"
    ╭ Note ──────────────╮
    │ The quick brown    │
    │ fox jumps over the │
    │ lazy dog           │
    ╰────────────────────╯
    ");
}

#[test]
fn snapshot_classic_box_right_aligned() {
    let out = BoxSpec::classic("one\nthree")
        .title("T")
        .title_align(Align::Right)
        .align(Align::Right)
        .padding(Spacing::horizontal(1))
        .render();
    insta::assert_snapshot!(out, @r"
    +---- T +
    |   one |
    | three |
    +-------+
    ");
}

#[test]
fn snapshot_coloured_border_runs() {
    let out = BoxSpec::new("ok")
        .padding(Spacing::horizontal(1))
        .border_color("red")
        .render();
    insta::assert_snapshot!(show_escapes(&out), @r"
    ␛[31m┌────┐␛[0m
    ␛[31m│␛[0m ok ␛[31m│␛[0m
    ␛[31m└────┘␛[0m
    ");
}

// ============================================================================
// Tables
// ============================================================================

#[test]
fn snapshot_classic_table_per_column_alignment() {
    let out = TableSpec::new(["Name", "Size"], [["alpha", "1"], ["beta", "200"]])
        .border_style("classic")
        .align(vec![Align::Left, Align::Right])
        .render();
    insta::assert_snapshot!(out, @r"
    +-------+------+
    | Name  | Size |
    +-------+------+
    | alpha |    1 |
    +-------+------+
    | beta  |  200 |
    +-------+------+
    ");
}

#[test]
fn snapshot_table_from_json_records() {
    let records = vec![
        record(json!({"id": 1, "name": "x", "ok": true})),
        record(json!({"id": 2, "ok": false})),
    ];
    let out = TableSpec::from_records(&records).render();
    insta::assert_snapshot!(out, @r"
    ┌────┬──────┬───────┐
    │ id │ name │ ok    │
    ├────┼──────┼───────┤
    │ 1  │ x    │ true  │
    ├────┼──────┼───────┤
    │ 2  │      │ false │
    └────┴──────┴───────┘
    ");
}

#[test]
fn snapshot_headerless_table() {
    let out = TableSpec::new(["ignored"], [["a", "b"]])
        .show_headers(false)
        .padding(0)
        .render();
    insta::assert_snapshot!(out, @r"
    ┌─┬─┐
    │a│b│
    └─┴─┘
    ");
}

// ============================================================================
// Progress and ASCII shapes
// ============================================================================

#[test]
fn snapshot_progress_bar_halfway() {
    let options = ProgressOptions::default().total(4).width(10).show_value(true);
    let mut bar = ProgressBar::with_terminal(options, MemoryTerminal::new());
    bar.update(2).unwrap();

    insta::with_settings!({
        filters => escape_filters()
    }, {
        insta::assert_snapshot!(bar.render(), @"[█████░░░░░] 50% (2/4)");
    });
    insta::assert_snapshot!(
        show_escapes(&bar.render()),
        @"[␛[32m█████␛[0m␛[90m░░░░░␛[0m] 50% (2/4)"
    );
}

#[test]
fn snapshot_banner_and_loading_bar() {
    let out = format!(
        "{}\n{}",
        banner("Release", '*', 15, None),
        loading_bar(40.0, 15, None)
    );
    let trimmed: Vec<&str> = out.lines().map(str::trim_end).collect();
    insta::assert_snapshot!(trimmed.join("\n"), @r"
    ***************
        Release
    ***************
    ██████░░░░░░░░░
    ");
}
