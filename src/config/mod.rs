//! User configuration
//!
//! An optional TOML file sets the theme and the defaults for progress bars
//! and spinners:
//!
//! ```toml
//! [theme]
//! preset = "ocean"
//! border_style = "double"
//!
//! [spinner]
//! kind = "line"
//!
//! [progress]
//! width = 30
//! show_value = true
//! ```

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::theme::Theme;

impl Config {
    /// Get the config file path (~/.config/console-helper/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/console-helper)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save(self)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// The configured preset with any border overrides applied.
    pub fn theme(&self) -> Theme {
        let mut theme = Theme::from_name(&self.theme.preset);
        if let Some(style) = self.theme.border_style {
            theme.border_style = style;
        }
        if let Some(color) = &self.theme.border_color {
            theme.border_color = Some(color.clone());
        }
        theme
    }
}
