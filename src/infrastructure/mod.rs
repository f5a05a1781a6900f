//! Infrastructure layer - External I/O and persistence

pub mod clipboard;
pub mod config;
pub mod image;
pub mod launcher;
pub mod pdf_writer;
pub mod repository;
pub mod store;

pub use config::Config;
pub use repository::{FileSystemRepository, SongbookRepository};
pub use store::{FileStore, KeyValueStore, MemoryStore};
