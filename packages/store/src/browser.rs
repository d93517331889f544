//! # localStorage-backed store — browser-side persistence
//!
//! [`BrowserStore`] is the [`KeyValueStore`] implementation used on the
//! **web platform**. It reads and writes `window.localStorage`, which the
//! browser keeps per origin across page reloads.
//!
//! All methods silently swallow storage errors (returning `None` for reads,
//! doing nothing for writes). A browser with storage disabled or a full
//! quota degrades to "nothing persisted" rather than crashing the UI.

use crate::kv::KeyValueStore;

/// localStorage-backed KeyValueStore for the web platform.
///
/// Zero-size and `Clone`-friendly; the `Storage` handle is looked up from
/// the window on every operation because it is not `Send` and cheap to get.
#[derive(Clone, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}
