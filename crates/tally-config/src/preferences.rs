use std::sync::Arc;

use tally_core::{CoreError, KeyValueStore, THEME_MODE_KEY};

use crate::ThemeMode;

/// Reads and writes the theme preference under its fixed key.
///
/// The stored value is the bare token (`light`/`dark`/`system`), not a JSON
/// document. It shares the adapter namespace with the finance document, so
/// a full reset (`clear`) removes the preference along with the data.
#[derive(Clone)]
pub struct ThemePreferences {
    storage: Arc<dyn KeyValueStore>,
}

impl ThemePreferences {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Loads the stored preference; a missing or unrecognized value yields
    /// [`ThemeMode::System`].
    pub fn load(&self) -> Result<ThemeMode, CoreError> {
        let stored = self.storage.get(THEME_MODE_KEY)?;
        Ok(stored
            .map(|value| ThemeMode::from_str(&value))
            .unwrap_or_default())
    }

    pub fn save(&self, mode: ThemeMode) -> Result<(), CoreError> {
        self.storage.set(THEME_MODE_KEY, mode.as_str())
    }
}
