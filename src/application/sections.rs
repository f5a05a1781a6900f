//! Section list editing use case

use crate::application::edit_document::EditService;
use crate::domain::{ProDocument, SectionKind};
use crate::error::Result;

impl EditService<ProDocument> {
    pub fn add_section(&mut self, kind: SectionKind) -> Result<&ProDocument> {
        log::debug!("Adding {} section", kind);
        self.apply(|doc| Ok(doc.add_section(kind)))
    }

    pub fn update_section(&mut self, index: usize, content: &str) -> Result<&ProDocument> {
        self.apply(|doc| doc.update_section(index, content))
    }

    pub fn remove_section(&mut self, index: usize) -> Result<&ProDocument> {
        log::debug!("Removing section {}", index);
        self.apply(|doc| doc.remove_section(index))
    }
}
