//! Application layer - Use cases and orchestration

pub mod controller;
pub mod edit_document;
pub mod export;
pub mod init;
pub mod manage_config;
pub mod preferences;
pub mod sections;

pub use controller::DocumentController;
pub use edit_document::EditService;
pub use export::{load_note, ExportService};
pub use init::InitService;
pub use manage_config::ConfigService;
pub use preferences::PreferencesService;
