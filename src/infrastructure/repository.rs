//! File system repository

use crate::error::{Result, SongbookError};
use crate::infrastructure::{Config, FileStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for songbook operations
pub trait SongbookRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .songbook/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .songbook/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .songbook directory exists
    fn is_initialized(&self) -> bool;

    /// Create .songbook directory structure
    fn initialize(&self) -> Result<()>;

    /// Key-value namespace holding documents and preferences
    fn store(&self) -> FileStore;
}

/// File system implementation of SongbookRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover songbook root by walking up from current directory
    /// First checks SONGBOOK_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("SONGBOOK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_songbook_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(SongbookError::Config(format!(
                    "SONGBOOK_ROOT is set to '{}' but no .songbook directory found. \
                    Run 'songbook init' in that directory or unset SONGBOOK_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover songbook root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_songbook_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(SongbookError::NotSongbookDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .songbook directory
    fn has_songbook_dir(path: &Path) -> bool {
        path.join(".songbook").is_dir()
    }

    fn store_dir(&self) -> PathBuf {
        self.root.join(".songbook").join("store")
    }
}

impl SongbookRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_songbook_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let songbook_dir = self.root.join(".songbook");

        if songbook_dir.exists() {
            return Err(SongbookError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&songbook_dir)?;
        fs::create_dir(self.store_dir())?;
        Ok(())
    }

    fn store(&self) -> FileStore {
        FileStore::new(self.store_dir())
    }
}
