//! Console Helper
//!
//! A terminal rendering toolkit. Styled spans, boxes, tables, progress bars,
//! spinners, block-letter banners and interactive prompts, all laid out by
//! visible width so embedded ANSI styling never throws alignment off.
//!
//! Renderers are pure and return strings; anything that draws over time
//! goes through the [`terminal::Terminal`] trait.
//!
//! ```
//! use console_helper::{BoxSpec, Spacing, TableSpec};
//!
//! let boxed = BoxSpec::new("Hi").padding(Spacing::horizontal(1)).render();
//! assert_eq!(boxed, "┌────┐\n│ Hi │\n└────┘");
//!
//! let table = TableSpec::new(["A", "BB"], [["1", "22"]]).render();
//! assert!(table.contains("│ A │ BB │"));
//! ```

pub mod ansi;
pub mod border;
pub mod components;
pub mod config;
pub mod error;
pub mod layout;
pub mod prompt;
pub mod style;
pub mod terminal;
pub mod theme;

pub use ansi::{strip_styling, visible_width};
pub use border::{BorderChars, BorderStyle};
pub use components::{
    Ascii, BoxSpec, ColumnAlign, Font, Outcome, ProgressBar, ProgressOptions, Spinner,
    SpinnerHandle, SpinnerOptions, TableSpec,
};
pub use config::Config;
pub use error::{ConsoleError, Result};
pub use layout::{Align, Spacing, VAlign};
pub use prompt::{confirm, Choice, Confirm, Input, Select};
pub use style::{compose, paint, Color, StyleSpec, StyledSpan, Text};
pub use terminal::{MemoryTerminal, StdoutTerminal, Terminal};
pub use theme::Theme;
