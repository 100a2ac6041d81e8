//! Player preferences
//!
//! Optional JSON file next to the score record. Anything missing or invalid
//! falls back to the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::HIGHSCORE_FILE;
use crate::difficulty::Difficulty;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty selected at startup
    pub difficulty: Difficulty,
    /// Where the best-score record lives
    pub score_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            score_file: PathBuf::from(HIGHSCORE_FILE),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or defaults if absent or unparsable
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Unreadable settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
