//! Viewer preference persistence.
//!
//! Preferences live in eframe's key/value storage as JSON strings, one key
//! per state component.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::app::AppState;
use crate::state::{LayoutState, ViewportState};

const VIEWPORT_KEY: &str = "viewport";
const LAYOUT_KEY: &str = "layout";
const LAST_DECK_KEY: &str = "last_deck_path";

/// Preferences restored at startup.
#[derive(Debug, Default)]
pub struct ViewerSettings {
    pub viewport: Option<ViewportState>,
    pub layout: LayoutState,
    pub last_deck_path: Option<PathBuf>,
}

/// Coordinates loading and saving of viewer preferences.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Reads all viewer preferences, falling back per key.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> ViewerSettings {
        ViewerSettings {
            viewport: Self::try_load_setting(storage, VIEWPORT_KEY),
            layout: Self::try_load_setting(storage, LAYOUT_KEY).unwrap_or_default(),
            last_deck_path: Self::try_load_setting(storage, LAST_DECK_KEY),
        }
    }

    /// Writes all viewer preferences.
    pub fn save(storage: &mut dyn eframe::Storage, state: &AppState) {
        Self::save_setting(storage, VIEWPORT_KEY, &state.viewport);
        Self::save_setting(storage, LAYOUT_KEY, &state.layout);
        if let Some(path) = state.deck.file_path() {
            Self::save_setting(storage, LAST_DECK_KEY, path);
        }
        storage.flush();
    }

    /// Serializes `value` under `key`. Unserializable values are skipped.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => storage.set_string(key, json_str),
            Err(err) => tracing::warn!(key, error = %err, "failed to serialize setting"),
        }
    }

    /// Attempts to load a setting, returning None if missing or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "ignoring invalid stored setting");
                None
            }
        }
    }
}
