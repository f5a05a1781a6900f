//! Initialize songbook use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, SongbookRepository};
use std::fs;
use std::path::Path;

/// Service creating a new songbook directory
pub struct InitService;

impl InitService {
    /// Initialize a new songbook at the specified path.
    /// Documents and preferences start out absent and load as defaults.
    pub fn execute(path: &Path) -> Result<FileSystemRepository> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());
        repo.initialize()?;
        repo.save_config(&Config::new())?;

        log::info!("Initialized songbook at {}", path.display());
        Ok(repo)
    }
}
