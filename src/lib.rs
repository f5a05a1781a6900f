//! songbook - Songwriting notebook
//!
//! A command-line notebook for songwriters with a simple lyrics form and a
//! pro song-sheet form, persisted per songbook directory and exportable as
//! plain text, PDF, a mail draft or clipboard text.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SongbookError;
