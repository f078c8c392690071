//! Game configuration
//!
//! Values come from an optional JSON settings file with environment
//! variables layered on top. Missing or malformed sources fall back to
//! defaults and are never fatal; the sim treats the result as immutable
//! for the whole session.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window width in pixels
    pub window_width: f32,
    /// Window height in pixels
    pub window_height: f32,
    pub window_title: String,
    /// Seconds between bowled balls
    pub ball_spawn_secs: u32,
    /// Directory holding the high-score file
    pub data_dir: PathBuf,
    pub score_filename: String,
    /// Simulation RNG seed
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 720.0,
            window_title: "Crease".to_owned(),
            ball_spawn_secs: 3,
            data_dir: PathBuf::from("data"),
            score_filename: "highscore.json".to_owned(),
            seed: 0x5eed,
        }
    }
}

impl Settings {
    /// Load settings: the file (if given and readable) first, then
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Self {
        let mut settings = path.map(Self::from_file).unwrap_or_default();
        settings.apply_env(|key| std::env::var(key).ok());
        settings
    }

    fn from_file(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) => {
                log::warn!(
                    "could not read settings file {}, using defaults: {err}",
                    path.display()
                );
                return Self::default();
            }
        };
        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!(
                    "invalid settings file {}, using defaults: {err}",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Apply environment overrides through an injectable lookup so tests
    /// can supply their own environment. Unparsable values are ignored.
    pub fn apply_env(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(v) = get("WINDOW_WIDTH").and_then(|v| v.parse().ok()) {
            self.window_width = v;
        }
        if let Some(v) = get("WINDOW_HEIGHT").and_then(|v| v.parse().ok()) {
            self.window_height = v;
        }
        if let Some(v) = get("WINDOW_TITLE") {
            self.window_title = v;
        }
        if let Some(v) = get("BALL_SPAWN_TIME_SECONDS").and_then(|v| v.parse().ok()) {
            self.ball_spawn_secs = v;
        }
        if let Some(v) = get("DATA_DIR") {
            self.data_dir = PathBuf::from(v);
        }
        if let Some(v) = get("SCORE_FILENAME") {
            self.score_filename = v;
        }
        if let Some(v) = get("SEED").and_then(|v| v.parse().ok()) {
            self.seed = v;
        }
    }
}
