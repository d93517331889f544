//! Shared preferences constructor for all platforms.
//!
//! Returns a [`store::Preferences`] backed by the appropriate
//! [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::BrowserStore`]
//! - **Desktop** (native): filesystem via [`store::FileStore`]

/// Create a platform-appropriate preferences handle.
pub fn make_prefs() -> store::Preferences<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::Preferences::new(store::BrowserStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("twitube");
        store::Preferences::new(store::FileStore::new(base))
    }
}
