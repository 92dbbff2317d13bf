//! Game settings and preferences
//!
//! Persisted separately from the leaderboard as a JSON file.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::persistence;

/// Default file name for settings
pub const DEFAULT_FILE: &str = "settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Silence everything
    pub muted: bool,

    // === HUD ===
    /// Show the wind indicator
    pub show_wind: bool,
    /// High score lines shown on the round-over screen
    pub leaderboard_lines: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Audio
            master_volume: 0.8,
            sfx_volume: 0.7,
            music_volume: 0.5,
            muted: false,

            // HUD
            show_wind: true,
            leaderboard_lines: 5,
        }
    }
}

impl Settings {
    /// Effective sound effect gain (0 when muted)
    pub fn effective_sfx_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Effective music gain (0 when muted)
    pub fn effective_music_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.music_volume).clamp(0.0, 1.0)
        }
    }

    /// Load settings, using defaults if the file is missing or corrupt
    pub fn load(path: &Path) -> Self {
        match persistence::load_json(path) {
            Some(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        persistence::save_json(path, self)?;
        log::info!("Settings saved");
        Ok(())
    }
}
