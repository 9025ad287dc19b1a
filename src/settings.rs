//! Run settings
//!
//! Persisted as JSON next to the working directory so a run can be
//! replayed with the same scenery layout.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// User-tweakable settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Fixed world seed; `None` picks a fresh random seed per run
    pub seed: Option<u64>,
    /// Log the tick counter once per second
    pub tick_log: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            tick_log: false,
        }
    }
}

impl Settings {
    /// Settings file name, looked up in the working directory
    pub const FILE_NAME: &'static str = "strider-settings.json";

    /// Load settings from the settings file, falling back to defaults if
    /// the file is missing or malformed
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Malformed settings file, using defaults: {e}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Write settings back to the settings file; failures are logged, not fatal
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(Self::FILE_NAME, json) {
                    log::warn!("Failed to save settings: {e}");
                }
            }
            Err(e) => log::warn!("Failed to serialize settings: {e}"),
        }
    }

    /// The seed to use for this run: the configured one, or a random one
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
