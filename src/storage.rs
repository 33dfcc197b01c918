use field_core::PreferenceStore;
use web_sys as web;

/// `PreferenceStore` over `window.localStorage`.
///
/// Storage can be missing or blocked (private browsing, sandboxed iframes);
/// reads then return `None` and writes are dropped.
#[derive(Clone, Default)]
pub struct LocalPrefs {
    storage: Option<web::Storage>,
}

impl LocalPrefs {
    pub fn from_window() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[prefs] localStorage unavailable; preferences will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(s) = &self.storage {
            if s.set_item(key, value).is_err() {
                log::warn!("[prefs] failed to store {}", key);
            }
        }
    }
}
