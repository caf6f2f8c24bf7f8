//! Interactive prompts.
//!
//! Prompts read [`Key`]s from a [`KeySource`] and draw through a
//! [`Terminal`](crate::terminal::Terminal), holding raw mode for as long as
//! they run. Each prompt is an explicit loop over keys; Ctrl-C ends it with
//! [`ConsoleError::Cancelled`](crate::error::ConsoleError::Cancelled) after
//! the terminal has been restored.
//!
//! ```no_run
//! use console_helper::prompt::{Input, Select};
//!
//! # fn main() -> console_helper::Result<()> {
//! let name = Input::text("Project name:").default_value("demo").ask()?;
//! let lang = Select::menu("Language:", ["rust", "go"])?.ask()?;
//! # let _ = (name, lang);
//! # Ok(())
//! # }
//! ```

mod input;
mod key;
mod select;
mod source;

pub use input::{confirm, parse_answer, Confirm, Input, Validator};
pub use key::{Key, KeyKind};
pub use select::{Choice, Select};
pub use source::{CrosstermKeys, KeySource, ScriptedKeys};
