//! Application configuration
//!
//! This module re-exports shared types from lbchime-types and provides
//! persistence and sound-directory resolution for AppConfig.

use std::path::PathBuf;

use thiserror::Error;

// Re-export all shared types
pub use lbchime_types::{AppConfig, AudioSettings, MonitorMode, TriggerSettings};

const APP_NAME: &str = "lbchime";

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[source] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),
}

/// Extension trait for AppConfig persistence
pub trait AppConfigExt: Sized {
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn save(self) -> Result<(), ConfigError>;
    fn user_sounds_dir(&self) -> PathBuf;
}

impl AppConfigExt for AppConfig {
    /// Load the persisted config, falling back to defaults
    fn load() -> Self {
        Self::try_load().unwrap_or_default()
    }

    fn try_load() -> Result<Self, ConfigError> {
        confy::load(APP_NAME, "config").map_err(ConfigError::Load)
    }

    fn save(self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, "config", self).map_err(ConfigError::Save)
    }

    /// Directory searched first for sound files: the configured override,
    /// or `<config dir>/lbchime/sounds`.
    fn user_sounds_dir(&self) -> PathBuf {
        if let Some(dir) = &self.sounds_dir {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .map(|p| p.join(APP_NAME).join("sounds"))
            .unwrap_or_else(|| PathBuf::from("sounds"))
    }
}

/// Directory holding the sounds shipped with the addon, resolved next to
/// the running executable with a working-directory fallback for dev runs.
pub fn bundled_sounds_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("sounds")))
        .unwrap_or_else(|| PathBuf::from("sounds"))
}
