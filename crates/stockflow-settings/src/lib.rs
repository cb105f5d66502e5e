//! Stockflow Settings Crate
//!
//! Holds the editor configuration (engine tunables loaded from TOML or JSON)
//! and the transient UI preference state: active tool, view mode, zoom, grid,
//! and panel visibility.

pub mod config;
pub mod error;
pub mod preferences;

pub use config::EditorConfig;
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use preferences::{ToolMode, UiPreferences, ViewMode};
