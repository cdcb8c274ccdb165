//! Game settings and preferences
//!
//! Persisted as a JSON file; a missing or malformed file falls back to the
//! defaults with a logged note rather than failing startup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::BALL_SEGMENTS;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Fixed RNG seed for reproducible runs; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Triangle-fan resolution used for balls
    pub ball_segments: u32,
    /// Log a state summary once per second of simulated frames
    pub frame_log: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            ball_segments: BALL_SEGMENTS,
            frame_log: true,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings in {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings to `path`
    pub fn save(&self, path: &Path) {
        let json = match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Could not encode settings: {}", err);
                return;
            }
        };
        match fs::write(path, json) {
            Ok(()) => log::info!("Settings saved to {}", path.display()),
            Err(err) => log::warn!("Could not write {}: {}", path.display(), err),
        }
    }
}
