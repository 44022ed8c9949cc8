//! Dark/light theme preference, persisted alongside the history in the same store.
//!
//! The value is a JSON boolean under the `isDarkTheme` key. Anything unreadable falls
//! back to the light theme.

use crate::storage::{StorageError, Store};

/// Storage key for the theme preference
pub const THEME_KEY: &str = "isDarkTheme";

/// Whether the dark theme is selected (defaults to light)
pub fn load_dark_theme(store: &impl Store) -> bool {
    match store.get(THEME_KEY) {
        Ok(Some(raw)) => serde_json::from_str::<bool>(&raw).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid theme preference {:?}: {}", raw, e);
            false
        }),
        Ok(None) => false,
        Err(e) => {
            tracing::warn!("Could not read theme preference: {}", e);
            false
        }
    }
}

/// Persist the theme preference
pub fn save_dark_theme(store: &mut impl Store, dark: bool) -> Result<(), StorageError> {
    let json = serde_json::to_string(&dark)
        .map_err(|e| StorageError::unavailable("Failed to serialize theme preference", e))?;
    store.set(THEME_KEY, &json)
}

/// Flip and persist the theme preference, returning the new value
pub fn toggle_dark_theme(store: &mut impl Store) -> Result<bool, StorageError> {
    let dark = !load_dark_theme(store);
    save_dark_theme(store, dark)?;
    Ok(dark)
}
