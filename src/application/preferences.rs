//! Mode and theme switching use case

use crate::domain::{Mode, Preferences, Theme};
use crate::error::Result;
use crate::infrastructure::store::{self, KeyValueStore};

/// Loads preferences at startup and persists each toggle
pub struct PreferencesService<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PreferencesService<S> {
    pub fn new(store: S) -> Self {
        PreferencesService { store }
    }

    pub fn load(&self) -> Preferences {
        Preferences {
            mode: store::load(&self.store, Mode::STORAGE_KEY, Mode::default()),
            theme: store::load(&self.store, Theme::STORAGE_KEY, Theme::default()),
        }
    }

    /// Switch between the simple and pro forms
    pub fn toggle_mode(&self) -> Result<Mode> {
        let next = self.load().mode.toggled();
        store::save(&self.store, Mode::STORAGE_KEY, &next)?;
        log::info!("Switched to {} mode", next);
        Ok(next)
    }

    /// Switch between the light and dark themes
    pub fn toggle_theme(&self) -> Result<Theme> {
        let next = self.load().theme.toggled();
        store::save(&self.store, Theme::STORAGE_KEY, &next)?;
        log::info!("Switched to {} theme", next);
        Ok(next)
    }
}
