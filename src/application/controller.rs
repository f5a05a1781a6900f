//! Snapshot-based form controller

use crate::domain::Document;
use crate::error::Result;

/// Receives every new snapshot after it replaces the previous one
pub type Subscriber<D> = Box<dyn FnMut(&D) -> Result<()>>;

/// Holds the current document and publishes each replacement to subscribers.
///
/// Updates never mutate the held document in place: an update produces a new
/// snapshot, which then replaces the old one as a whole. Subscribers only ever
/// see complete snapshots.
pub struct DocumentController<D: Document> {
    current: D,
    subscribers: Vec<Subscriber<D>>,
}

impl<D: Document> DocumentController<D> {
    pub fn new(initial: D) -> Self {
        DocumentController {
            current: initial,
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&D) -> Result<()> + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn snapshot(&self) -> &D {
        &self.current
    }

    /// Replace the snapshot with `update(current)` and notify subscribers.
    /// A failed update leaves the current snapshot untouched.
    pub fn apply<F>(&mut self, update: F) -> Result<&D>
    where
        F: FnOnce(&D) -> Result<D>,
    {
        let next = update(&self.current)?;
        self.current = next;

        for subscriber in self.subscribers.iter_mut() {
            subscriber(&self.current)?;
        }

        Ok(&self.current)
    }

    pub fn set_field(&mut self, field: D::Field, raw: &str) -> Result<&D> {
        self.apply(|doc| doc.with_field(field, raw))
    }

    pub fn set_image(&mut self, image_data_url: Option<String>) -> Result<&D> {
        self.apply(|doc| Ok(doc.with_image(image_data_url)))
    }

    /// Back to a freshly created document
    pub fn reset(&mut self) -> Result<&D> {
        self.apply(|_| Ok(D::default()))
    }
}
