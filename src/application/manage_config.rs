//! Config management use case

use crate::error::{Result, SongbookError};
use crate::infrastructure::{Config, FileSystemRepository, SongbookRepository};
use std::path::PathBuf;

/// Service for managing songbook configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "recipient" => Ok(config.recipient.clone()),
            "export_dir" => Ok(config
                .export_dir
                .as_ref()
                .map(|dir| dir.display().to_string())
                .unwrap_or_default()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(SongbookError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: recipient, export_dir, created",
                key
            ))),
        }
    }

    /// Set a config value. An empty `export_dir` goes back to the songbook root.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "recipient" => {
                config.recipient = value.trim().to_string();
            }
            "export_dir" => {
                config.export_dir = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value.trim()))
                };
            }
            "created" => {
                return Err(SongbookError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(SongbookError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: recipient, export_dir",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
