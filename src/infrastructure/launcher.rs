//! Handing URIs to the platform's default handler

use crate::error::{Result, SongbookError};

/// Open a URI (e.g. a `mailto:` draft) with the default application
pub fn open_uri(uri: &str) -> Result<()> {
    log::debug!("Opening {} bytes URI with the system handler", uri.len());
    open::that(uri).map_err(|e| SongbookError::Launch(format!("Failed to open mail client: {}", e)))
}
