//! Configuration loading functionality.
//!
//! Handles locating `solar.toml`, reading and parsing it, and validating the
//! result.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::Config;
use super::validation::validate_config;
use crate::common::constants::*;

/// Get the configuration file path.
///
/// Uses `custom_dir` when given, otherwise the `solar` directory under the
/// user's config directory.
pub fn config_path(custom_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = custom_dir {
        return Ok(dir.join(CONFIG_FILE_NAME));
    }

    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load the configuration file.
///
/// Returns the configuration and the path it was read from. A missing file
/// in the default location gives an empty configuration and no path; a
/// missing file in an explicitly requested directory is an error.
pub fn load(custom_dir: Option<&Path>) -> Result<(Config, Option<PathBuf>)> {
    let path = config_path(custom_dir)?;

    if !path.exists() {
        if custom_dir.is_some() {
            anyhow::bail!(
                "Configuration file not found at specified path: {}",
                display_path(&path)
            );
        }
        return Ok((Config::default(), None));
    }

    let config = load_from_path(&path)?;
    Ok((config, Some(path)))
}

/// Load and validate configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", display_path(path)))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", display_path(path)))?;

    validate_config(&config)
        .with_context(|| format!("Invalid configuration in {}", display_path(path)))?;

    Ok(config)
}

/// Shorten a path under the home directory to `~/...` for display.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(relative) = path.strip_prefix(&home)
    {
        return format!("~/{}", relative.display());
    }
    path.display().to_string()
}
