/// String key-value storage behind the client's preferences.
///
/// Reads and writes are synchronous; a value is either fully written or not
/// written at all from the caller's perspective. Implementations must never
/// panic on storage failure — a read that fails returns `None` and a write
/// that fails is dropped, so a broken store degrades to "no persisted data".
pub trait KeyValueStore {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
}
