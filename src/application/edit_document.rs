//! Edit note use case

use crate::application::controller::DocumentController;
use crate::domain::Document;
use crate::error::Result;
use crate::infrastructure::image::read_data_url;
use crate::infrastructure::store::{self, KeyValueStore};
use std::path::Path;

/// Service editing the stored document of one form.
/// Every accepted change is saved to the store before the call returns.
pub struct EditService<D: Document> {
    controller: DocumentController<D>,
}

impl<D: Document> EditService<D> {
    /// Load the document from its slot (defaults if absent or corrupt) and
    /// subscribe the store to every later snapshot
    pub fn open<S>(store: &S) -> Self
    where
        S: KeyValueStore + Clone + 'static,
    {
        let initial = store::load(store, D::STORAGE_KEY, D::default());
        let mut controller = DocumentController::new(initial);

        let persist_to = store.clone();
        controller.subscribe(move |doc: &D| store::save(&persist_to, D::STORAGE_KEY, doc));

        EditService { controller }
    }

    pub fn document(&self) -> &D {
        self.controller.snapshot()
    }

    /// Register an additional view of the document
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&D) -> Result<()> + 'static,
    {
        self.controller.subscribe(subscriber);
    }

    pub fn set_field(&mut self, field: D::Field, raw: &str) -> Result<&D> {
        log::debug!("Setting {:?} on {}", field, D::STORAGE_KEY);
        self.controller.set_field(field, raw)
    }

    /// Attach the image at `path`, replacing any previous one.
    /// With no path there is nothing to attach and the document is unchanged.
    pub fn attach_image(&mut self, path: Option<&Path>) -> Result<&D> {
        let Some(path) = path else {
            return Ok(self.controller.snapshot());
        };

        let data_url = read_data_url(path)?;
        self.controller.set_image(Some(data_url))
    }

    pub fn remove_image(&mut self) -> Result<&D> {
        self.controller.set_image(None)
    }

    /// Reset to a fresh document; preferences are not touched
    pub fn clear(&mut self) -> Result<&D> {
        self.controller.reset()
    }

    /// Apply an arbitrary whole-document update
    pub(crate) fn apply<F>(&mut self, update: F) -> Result<&D>
    where
        F: FnOnce(&D) -> Result<D>,
    {
        self.controller.apply(update)
    }
}
