//! Configuration management

use crate::error::{Result, SongbookError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Address pre-filled in mail drafts (empty leaves it to the mail client)
    #[serde(default)]
    pub recipient: String,
    /// Where exported files are written; the songbook root when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            recipient: String::new(),
            export_dir: None,
            created: Utc::now(),
        }
    }

    /// Load config from .songbook/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".songbook").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SongbookError::NotSongbookDirectory(path.to_path_buf())
            } else {
                SongbookError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| SongbookError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .songbook/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let songbook_dir = path.join(".songbook");
        let config_path = songbook_dir.join("config.toml");

        // Ensure .songbook directory exists
        if !songbook_dir.exists() {
            fs::create_dir(&songbook_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| SongbookError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Directory exports go to, resolved against the songbook root
    pub fn export_dir_for(&self, root: &Path) -> PathBuf {
        match &self.export_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => root.join(dir),
            None => root.to_path_buf(),
        }
    }
}
