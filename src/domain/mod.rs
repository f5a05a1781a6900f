//! Domain layer - Note documents, section editing and export transformations

pub mod choices;
pub mod document;
pub mod export;
pub mod note;
pub mod preferences;
pub mod pro;
pub mod section;
pub mod simple;

pub use choices::{FontFamily, MusicalKey, Style, TimeSignature};
pub use document::Document;
pub use note::Note;
pub use preferences::{Mode, Preferences, Theme};
pub use pro::{ProDocument, ProField};
pub use section::{Section, SectionKind};
pub use simple::{SimpleDocument, SimpleField};
