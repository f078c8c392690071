//! Best-score record
//!
//! A single `{score, name}` JSON record on disk. Load failures fall back
//! to defaults; gameplay never depends on a successful save.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The single best-score record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub score: u32,
    pub name: String,
}

/// File-backed store for the best-score record
#[derive(Debug)]
pub struct HighScoreStore {
    path: PathBuf,
    record: HighScore,
}

impl HighScoreStore {
    /// Open the store, creating the data directory and loading any
    /// existing record. A missing or corrupt file yields the default
    /// record.
    pub fn open(data_dir: &Path, filename: &str) -> io::Result<Self> {
        fs::create_dir_all(data_dir)?;
        let path = data_dir.join(filename);
        let record = Self::load(&path);
        Ok(Self { path, record })
    }

    fn load(path: &Path) -> HighScore {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    log::warn!(
                        "could not read high score file {}, using defaults: {err}",
                        path.display()
                    );
                }
                return HighScore::default();
            }
        };
        match serde_json::from_str(&json) {
            Ok(record) => {
                log::debug!("loaded high score from {}", path.display());
                record
            }
            Err(err) => {
                log::warn!(
                    "invalid high score file {}, using defaults: {err}",
                    path.display()
                );
                HighScore::default()
            }
        }
    }

    pub fn record(&self) -> &HighScore {
        &self.record
    }

    /// Pure comparison against the stored record
    pub fn is_new_high_score(&self, score: u32) -> bool {
        score > self.record.score
    }

    /// Update the record and persist it. The in-memory record updates even
    /// when the write fails.
    pub fn set_high_score(&mut self, score: u32, name: String) -> io::Result<()> {
        self.record = HighScore { score, name };
        self.save()
    }

    pub fn save(&self) -> io::Result<()> {
        let json = serde_json::to_string(&self.record).map_err(io::Error::other)?;
        fs::write(&self.path, json)
    }

    /// Human-readable record line, e.g. `High Score: 12 (Viv)`
    pub fn display_text(&self, prefix: &str) -> String {
        if self.record.name.is_empty() {
            format!("{prefix}{}", self.record.score)
        } else {
            format!("{prefix}{} ({})", self.record.score, self.record.name)
        }
    }
}
