//! # Store crate — durable client-side preferences
//!
//! Typed persistence for the small amount of state the client keeps across
//! page loads. A [`KeyValueStore`] trait abstracts over the backing storage:
//!
//! | Implementation | Platform | Backing |
//! |----------------|----------|---------|
//! | [`BrowserStore`] | Web (WASM + `web` feature) | `window.localStorage` |
//! | [`FileStore`] | Desktop | one file per key under a base directory |
//! | [`MemoryStore`] | tests / fallback | `HashMap` behind a mutex |
//!
//! [`Preferences`] wraps any store and owns the well-known keys and their
//! serialized forms, so callers never touch raw strings.

mod kv;
pub use kv::KeyValueStore;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserStore;

mod prefs;
pub use prefs::{Preferences, SUBSCRIBED_KEY};
