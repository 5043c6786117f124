//! This module handles host preferences for the toaster, including loading
//! and saving them to a `settings.toml` file.
//!
//! Preferences are deliberately loose: every field is optional and invalid
//! values degrade to defaults instead of failing, mirroring the silent
//! normalization the widgets themselves apply.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toaster::config::{self, Config};
//!
//! // Load existing preferences
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.position = Some("top-right".to_string());
//!
//! // Save the modified preferences
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

pub use defaults::{
    DEFAULT_DURATION_SECS, ENTRANCE_DELAY_MS, EXIT_DURATION_MS, MAX_DURATION_SECS,
    MIN_DURATION_SECS, SWIPE_THRESHOLD_PX, TICK_INTERVAL_MS,
};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToaster";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Corner the toaster anchors to (e.g. "bottom-left").
    pub position: Option<String>,
    /// Default toast lifetime in seconds.
    #[serde(default)]
    pub duration: Option<u64>,
    /// Whether new toasts default to persistent (no auto-dismiss).
    #[serde(default)]
    pub persistent: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            position: None,
            duration: Some(DEFAULT_DURATION_SECS),
            persistent: Some(false),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            position: Some("top-right".to_string()),
            duration: Some(10),
            persistent: Some(true),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.position, config.position);
        assert_eq!(loaded.duration, config.duration);
        assert_eq!(loaded.persistent, config.persistent);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.position.is_none());
        assert_eq!(loaded.duration, Some(DEFAULT_DURATION_SECS));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config {
            position: Some("bottom-right".to_string()),
            duration: Some(3),
            persistent: Some(false),
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_sets_duration_and_persistence() {
        let config = Config::default();
        assert!(config.position.is_none());
        assert_eq!(config.duration, Some(DEFAULT_DURATION_SECS));
        assert_eq!(config.persistent, Some(false));
    }
}
