//! Configuration I/O operations

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::types::Config;

/// Get the config file path (~/.config/console-helper/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Get the config directory path (~/.config/console-helper)
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("console-helper"))
}

/// Load configuration from the default path, or return defaults if not found
pub fn load() -> Result<Config> {
    load_from(&config_path()?)
}

/// Load configuration from `path`, or return defaults if not found
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Save configuration to the default path
pub fn save(config: &Config) -> Result<()> {
    save_to(config, &config_path()?)
}

/// Save configuration to `path`, creating parent directories
pub fn save_to(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;
    debug!(path = %path.display(), "Saved config");

    Ok(())
}
