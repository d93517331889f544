//! # Typed preference access
//!
//! [`Preferences`] wraps a [`KeyValueStore`] and owns the well-known keys,
//! their serialized forms, and the fallback behavior when a stored value is
//! missing or corrupt. Callers get typed reads and writes and never see raw
//! storage strings.
//!
//! Values are stored as JSON so they interoperate with anything else that
//! inspects the browser's localStorage (`"subscribed"` holds `true`/`false`).

use crate::kv::KeyValueStore;

/// Storage key for the channel subscription preference.
pub const SUBSCRIBED_KEY: &str = "subscribed";

/// Typed view over a key-value store.
#[derive(Clone, Debug)]
pub struct Preferences<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether the viewer is subscribed.
    ///
    /// A missing or unparsable stored value reads as `false`; corruption is
    /// an expected condition here, never an error.
    pub fn subscribed(&self) -> bool {
        self.store
            .get(SUBSCRIBED_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or(false)
    }

    /// Persist a subscription state.
    pub fn set_subscribed(&self, value: bool) {
        self.store
            .set(SUBSCRIBED_KEY, if value { "true" } else { "false" });
    }

    /// Flip the subscription state and write it back before returning.
    ///
    /// The write is part of the toggle: callers never observe a flipped
    /// in-memory value without the store having been updated.
    pub fn toggle_subscribed(&self) -> bool {
        let next = !self.subscribed();
        self.set_subscribed(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[test]
    fn test_defaults_to_unsubscribed() {
        let prefs = Preferences::new(MemoryStore::new());
        assert!(!prefs.subscribed());
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let store = MemoryStore::new();
        let prefs = Preferences::new(store.clone());

        assert!(prefs.toggle_subscribed());
        assert!(prefs.subscribed());
        assert_eq!(store.get(SUBSCRIBED_KEY), Some("true".to_string()));
    }

    #[test]
    fn test_toggle_twice_returns_to_start() {
        let store = MemoryStore::new();
        let prefs = Preferences::new(store.clone());

        prefs.toggle_subscribed();
        assert!(!prefs.toggle_subscribed());
        assert!(!prefs.subscribed());
        assert_eq!(store.get(SUBSCRIBED_KEY), Some("false".to_string()));
    }

    #[test]
    fn test_corrupt_value_reads_as_false() {
        let store = MemoryStore::new();
        store.set(SUBSCRIBED_KEY, "definitely not json");
        let prefs = Preferences::new(store.clone());
        assert!(!prefs.subscribed());

        // Wrong JSON type is corruption too
        store.set(SUBSCRIBED_KEY, "\"yes\"");
        assert!(!prefs.subscribed());
    }

    #[test]
    fn test_survives_reopen() {
        let store = MemoryStore::new();
        Preferences::new(store.clone()).set_subscribed(true);
        assert!(Preferences::new(store).subscribed());
    }
}
