//! Editor configuration for Stockflow
//!
//! Engine tunables that are fixed for the lifetime of an editing session:
//! how many history snapshots are retained, how far pasted copies are offset,
//! and the default size and label of elements created from a canvas click.
//!
//! Configuration is read from TOML or JSON files. Missing keys fall back to
//! their defaults, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Maximum number of retained history snapshots.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Default paste offset along each axis.
pub const DEFAULT_PASTE_OFFSET: f64 = 20.0;

/// Engine tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum number of retained history snapshots
    pub history_limit: usize,
    /// Horizontal offset applied to pasted elements
    pub paste_offset_x: f64,
    /// Vertical offset applied to pasted elements
    pub paste_offset_y: f64,
    /// Width of elements created from a canvas click
    pub default_element_width: f64,
    /// Height of elements created from a canvas click
    pub default_element_height: f64,
    /// Label of elements created from a canvas click
    pub default_element_label: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            paste_offset_x: DEFAULT_PASTE_OFFSET,
            paste_offset_y: DEFAULT_PASTE_OFFSET,
            default_element_width: 100.0,
            default_element_height: 60.0,
            default_element_label: "New Element".to_string(),
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> SettingsResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file; the format is chosen by extension.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                )
                .into())
            }
        };

        config.validate()?;
        tracing::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Loads the configuration at [`EditorConfig::default_path`], falling back
    /// to defaults when no file exists.
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            tracing::debug!("No editor config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(&path).map_err(|e| {
            tracing::warn!("Failed to load editor config {}: {}", path.display(), e);
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })
    }

    /// Platform config location: `<config_dir>/stockflow/editor.toml`.
    pub fn default_path() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("stockflow").join("editor.toml"))
            .ok_or_else(|| ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()))
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.history_limit == 0 {
            return Err(ConfigError::out_of_range("history_limit", self.history_limit));
        }

        for (key, value) in [
            ("paste_offset_x", self.paste_offset_x),
            ("paste_offset_y", self.paste_offset_y),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::out_of_range(key, value));
            }
        }

        for (key, value) in [
            ("default_element_width", self.default_element_width),
            ("default_element_height", self.default_element_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::out_of_range(key, value));
            }
        }

        Ok(())
    }
}
