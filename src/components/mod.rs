//! Renderers built on the layout primitives.
//!
//! Boxes, tables and ASCII art are pure: `render()` returns the finished
//! string and `print()` writes it with a trailing newline. Progress bars and
//! spinners own a [`Terminal`](crate::terminal::Terminal) and redraw a single
//! line in place.

pub mod ascii;
pub mod boxed;
pub mod progress;
pub mod spinner;
pub mod table;

pub use ascii::{banner, line, loading_bar, Ascii, Font};
pub use boxed::BoxSpec;
pub use progress::{ProgressBar, ProgressOptions};
pub use spinner::{FrameSet, Outcome, Spinner, SpinnerHandle, SpinnerOptions, FRAME_SETS};
pub use table::{ColumnAlign, TableSpec};
