//! Error types for songbook

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for songbook application
#[derive(Debug, Error)]
pub enum SongbookError {
    #[error("Not a songbook directory: {0}")]
    NotSongbookDirectory(PathBuf),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Section index {index} is out of range ({len} sections)")]
    SectionOutOfRange { index: usize, len: usize },

    #[error("'{0}' is only available in pro mode")]
    ProModeOnly(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Launch error: {0}")]
    Launch(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SongbookError {
    pub(crate) fn invalid_value(field: &str, reason: impl Into<String>) -> Self {
        SongbookError::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SongbookError::NotSongbookDirectory(_) => 2,
            SongbookError::InvalidField(_) | SongbookError::InvalidValue { .. } => 3,
            SongbookError::SectionOutOfRange { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SongbookError::NotSongbookDirectory(path) => {
                format!(
                    "Not a songbook directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'songbook init' in this directory to start a notebook\n\
                    • Navigate to an existing songbook directory\n\
                    • Set SONGBOOK_ROOT environment variable to your notebook path",
                    path.display()
                )
            }
            SongbookError::InvalidField(name) => {
                format!(
                    "Invalid field: '{}'\n\n\
                    Simple mode fields: title, author, location, datetime, font-family, font-size, body\n\
                    Pro mode fields: title, author, location, datetime, style, tempo, time-sig, key, notes\n\n\
                    Example: songbook set title \"Midnight\"",
                    name
                )
            }
            SongbookError::InvalidValue { field, reason } if field == "datetime" => {
                format!(
                    "Invalid value for datetime: {}\n\n\
                    Expected format: YYYY-MM-DDTHH:MM\n\
                    Example: songbook set datetime 2025-01-17T21:30",
                    reason
                )
            }
            SongbookError::SectionOutOfRange { len, .. } => {
                let hint = if *len == 0 {
                    "• The song has no sections yet, add one with 'songbook section add verse'"
                        .to_string()
                } else {
                    format!("• Valid indices are 0 to {}", len - 1)
                };
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    {}\n\
                    • Use 'songbook section list' to see section indices",
                    self, hint
                )
            }
            SongbookError::ProModeOnly(_) => {
                format!(
                    "{}\n\n\
                    Switch forms with 'songbook toggle mode'",
                    self
                )
            }
            SongbookError::Clipboard(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Install xclip or xsel on Linux\n\
                    • Use 'songbook export txt' to save the text instead",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SongbookError
pub type Result<T> = std::result::Result<T, SongbookError>;
