//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, ExportFormat, SectionAction, ToggleTarget};
pub use output::{format_preferences, format_pro, format_section_list, format_simple};
