// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! The config only supplies *startup* preferences (display language, initial
//! theme). Runtime shell state — sidebar visibility, theme toggles, pending
//! notifications — lives in memory for the coordinator's lifetime and is
//! deliberately never written back here.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `COMET_SHELL_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_DIR: &str = "CometShell";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "COMET_SHELL_CONFIG_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Theme the shell starts in. Unknown values fall back to the default
    /// at deserialization time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_mode: Option<ThemeMode>,
}

fn config_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns the config plus an optional warning key (an i18n key the caller
/// can surface as a notification) when the file exists but cannot be read.
/// A missing file is not a warning; defaults apply silently.
#[must_use]
pub fn load() -> (Config, Option<&'static str>) {
    let Some(path) = config_path() else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "failed to load settings");
            (Config::default(), Some("notification-config-load-error"))
        }
    }
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
