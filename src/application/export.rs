//! Export use cases: text file, PDF, mail draft and clipboard

use crate::domain::{Document, Mode, Note, ProDocument, SimpleDocument};
use crate::error::Result;
use crate::infrastructure::clipboard::copy_to_clipboard;
use crate::infrastructure::pdf_writer::{decode_image, write_pdf};
use crate::infrastructure::store::{self, KeyValueStore};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Load the stored note of the given form
pub fn load_note<S: KeyValueStore + ?Sized>(store: &S, mode: Mode) -> Note {
    match mode {
        Mode::Simple => Note::Simple(store::load(
            store,
            SimpleDocument::STORAGE_KEY,
            SimpleDocument::default(),
        )),
        Mode::Pro => Note::Pro(store::load(
            store,
            ProDocument::STORAGE_KEY,
            ProDocument::default(),
        )),
    }
}

/// Service writing export artifacts for a songbook
pub struct ExportService {
    root: PathBuf,
    config: Config,
}

impl ExportService {
    pub fn new(root: PathBuf, config: Config) -> Self {
        ExportService { root, config }
    }

    /// Resolve where an artifact named `filename` goes.
    /// An explicit `out` that is a directory receives the default file name.
    fn target(&self, out: Option<&Path>, filename: &str) -> Result<PathBuf> {
        let path = match out {
            Some(out) if out.is_dir() => out.join(filename),
            Some(out) => out.to_path_buf(),
            None => self.config.export_dir_for(&self.root).join(filename),
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        Ok(path)
    }

    /// Write the plain-text rendering as UTF-8
    pub fn export_text(&self, note: &Note, out: Option<&Path>) -> Result<PathBuf> {
        let path = self.target(out, &note.text_filename())?;
        fs::write(&path, note.plain_text())?;
        log::info!("Exported text to {}", path.display());
        Ok(path)
    }

    /// Lay out and write the PDF. An image that cannot be decoded is left out.
    pub fn export_pdf(&self, note: &Note, out: Option<&Path>) -> Result<PathBuf> {
        let path = self.target(out, &note.pdf_filename())?;
        let image = decode_image(note.image_data_url());
        let layout = note.layout(image.is_some());
        write_pdf(&layout, image.as_ref(), &path)?;
        Ok(path)
    }

    /// `mailto:` URI addressed to the configured recipient
    pub fn mail_uri(&self, note: &Note) -> String {
        note.mail_draft().to_uri(&self.config.recipient)
    }

    pub fn copy(&self, note: &Note) -> Result<()> {
        copy_to_clipboard(&note.clipboard_text())
    }
}
