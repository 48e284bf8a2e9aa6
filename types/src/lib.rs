//! Shared configuration types for lbchime
//!
//! This crate contains serializable configuration types that are shared between
//! the monitoring engine (lbchime-core) and host adapters (lbchime-cli).

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Monitor Mode
// ─────────────────────────────────────────────────────────────────────────────

/// Which in-game condition the addon watches. The two monitors are
/// independent and never run together; the mode picks one at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorMode {
    /// Watch the limit break gauge and chime when stored units are spent.
    #[default]
    Gauge,
    /// Watch the local player's current cast and chime on limit break actions.
    Cast,
}

impl MonitorMode {
    /// Display label for chat/log output
    pub fn label(&self) -> &'static str {
        match self {
            MonitorMode::Gauge => "gauge",
            MonitorMode::Cast => "cast",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Audio Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Runtime-adjustable audio settings consumed by the playback service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSettings {
    /// Master toggle - when false, queued play events are dropped
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Playback volume, 0-100
    #[serde(default = "default_volume")]
    pub volume: u8,

    /// Candidate sound files (relative to the sounds directory).
    /// One is chosen uniformly at random per trigger.
    #[serde(default = "default_sound_files")]
    pub sound_files: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_volume() -> u8 {
    100
}

fn default_sound_files() -> Vec<String> {
    vec!["darkness.wav".to_string(), "doit.wav".to_string()]
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: default_volume(),
            sound_files: default_sound_files(),
        }
    }
}

impl AudioSettings {
    /// Check if any sound is configured
    pub fn has_sounds(&self) -> bool {
        !self.sound_files.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Trigger Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Action identifiers that qualify as limit break casts (cast mode only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerSettings {
    /// Qualifying action ids
    #[serde(default = "default_action_ids")]
    pub action_ids: Vec<u32>,
}

/// The stock level 1-3 limit break action ids for every role.
fn default_action_ids() -> Vec<u32> {
    vec![
        197, 198, 199, // tank
        200, 201, 202, // melee
        203, 204, 205, // caster
        206, 207, 208, // healer
        4238, 4239, 4246, // physical ranged
    ]
}

impl Default for TriggerSettings {
    fn default() -> Self {
        Self {
            action_ids: default_action_ids(),
        }
    }
}

impl TriggerSettings {
    /// Check whether an action id qualifies
    pub fn contains(&self, action_id: u32) -> bool {
        self.action_ids.contains(&action_id)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// App Config
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level persisted configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Which monitor the addon runs
    #[serde(default)]
    pub mode: MonitorMode,

    /// Override for the user sounds directory. None = platform default.
    #[serde(default)]
    pub sounds_dir: Option<String>,

    #[serde(default)]
    pub audio: AudioSettings,

    #[serde(default)]
    pub triggers: TriggerSettings,
}
