//! Reading image files into base64 data URIs

use crate::error::{Result, SongbookError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::Path;

/// MIME type for an image file, judged by extension
pub fn image_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Read an image file and encode it as `data:<mime>;base64,<payload>`
pub fn read_data_url(path: &Path) -> Result<String> {
    let mime = image_mime_type(path).ok_or_else(|| {
        SongbookError::Image(format!(
            "Not an image file: {} (expected png, jpg, gif, webp, bmp or svg)",
            path.display()
        ))
    })?;

    let bytes = fs::read(path)
        .map_err(|e| SongbookError::Image(format!("Failed to read {}: {}", path.display(), e)))?;

    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// Decode the payload of a base64 data URI.
/// Returns `None` for anything that is not a well-formed base64 data URI.
pub fn decode_data_url(data_url: &str) -> Option<Vec<u8>> {
    let rest = data_url.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    if !meta.ends_with(";base64") {
        return None;
    }
    STANDARD.decode(payload.trim()).ok()
}
