//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "songbook")]
#[command(about = "Songwriting notebook for lyrics and song sheets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new songbook
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show the note of the current mode
    Show,

    /// Set a field of the current note
    Set {
        /// Field name (e.g., title, author, body, tempo, key)
        field: String,

        /// New value, or '-' to read it from stdin
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Attach or remove the cover image
    Image {
        /// Image file to attach (replaces any previous image)
        path: Option<PathBuf>,

        /// Remove the attached image
        #[arg(long, conflicts_with = "path")]
        remove: bool,
    },

    /// Reset the current note to a blank one
    Clear,

    /// Edit the sections of a pro song sheet
    Section {
        #[command(subcommand)]
        action: SectionAction,
    },

    /// Export the current note to a file
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Output file or directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print a mailto: link for the current note
    Mail {
        /// Open the link in the default mail client
        #[arg(long)]
        open: bool,
    },

    /// Copy the current note to the clipboard
    Copy,

    /// Switch mode or theme
    Toggle {
        #[arg(value_enum)]
        target: ToggleTarget,
    },

    /// Show the current mode and theme
    Prefs,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SectionAction {
    /// Append a section pre-filled with its template
    Add {
        /// Section type (intro, verse, pre-chorus, chorus, bridge, solo, break, outro)
        kind: String,
    },

    /// Replace the content of a section
    Edit {
        index: usize,

        /// New content, or '-' to read it from stdin
        #[arg(allow_hyphen_values = true)]
        content: String,
    },

    /// Delete a section
    Remove { index: usize },

    /// List sections with their indices
    List,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Txt,
    Pdf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleTarget {
    Mode,
    Theme,
}
