use crate::config::{SimMode, Theme};
use crate::constants::{PREF_KEY_MODE, PREF_KEY_THEME};
use std::str::FromStr;

/// Persistent string key-value store that survives reloads.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Stored mode, or the default when absent or unreadable.
pub fn load_mode(store: &dyn PreferenceStore) -> SimMode {
    load_or_default(store, PREF_KEY_MODE)
}

/// Stored theme, or the default when absent or unreadable.
pub fn load_theme(store: &dyn PreferenceStore) -> Theme {
    load_or_default(store, PREF_KEY_THEME)
}

pub fn save_mode(store: &mut dyn PreferenceStore, mode: SimMode) {
    store.set(PREF_KEY_MODE, mode.as_str());
}

pub fn save_theme(store: &mut dyn PreferenceStore, theme: Theme) {
    store.set(PREF_KEY_THEME, theme.as_str());
}

fn load_or_default<T>(store: &dyn PreferenceStore, key: &str) -> T
where
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    match store.get(key) {
        Some(raw) => T::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("[prefs] ignoring stored {}: {}", key, e);
            T::default()
        }),
        None => T::default(),
    }
}
