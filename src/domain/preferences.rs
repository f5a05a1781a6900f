//! Process-wide UI preferences: form mode and colour theme

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which note form is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Simple,
    Pro,
}

impl Mode {
    pub const STORAGE_KEY: &'static str = "mode";

    pub fn toggled(self) -> Self {
        match self {
            Mode::Simple => Mode::Pro,
            Mode::Pro => Mode::Simple,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Simple => f.write_str("simple"),
            Mode::Pro => f.write_str("pro"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub const STORAGE_KEY: &'static str = "theme";

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Marker placed in front of headings when rendering to the terminal
    pub fn heading_marker(self) -> &'static str {
        match self {
            Theme::Light => "##",
            Theme::Dark => "▌",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

/// Snapshot of both preferences, passed explicitly to whatever needs them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub mode: Mode,
    pub theme: Theme,
}
