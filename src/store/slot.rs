//! Typed persisted state slot.
//!
//! DESIGN
//! ======
//! A slot is read once when opened and then owns the in-memory value. Every
//! mutation writes the whole value back to its key. The in-memory value is the
//! source of truth: a failed write is logged and dropped, and the next
//! successful write (or a reload) reconciles storage.
//!
//! ERROR HANDLING
//! ==============
//! Missing keys, unreadable storage and unparsable content all fall back to
//! the caller's default. Partial or legacy data is never merged into it.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{KeyValueStore, StorageKey};

/// Load and decode the JSON value at `key`. Any failure yields `None`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: StorageKey) -> Option<T> {
    let raw = match store.get(key.as_str()) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(%key, error = %e, "storage read failed; using default");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(%key, error = %e, "stored value unparsable; using default");
            None
        }
    }
}

/// Encode and write `value` at `key`. Failures are logged, never surfaced.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: StorageKey, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(%key, error = %e, "value not serializable; write dropped");
            return;
        }
    };
    if let Err(e) = store.set(key.as_str(), &raw) {
        warn!(%key, error = %e, "storage write failed; keeping in-memory value");
    }
}

pub struct PersistedSlot<T> {
    store: Arc<dyn KeyValueStore>,
    key: StorageKey,
    value: T,
}

impl<T> PersistedSlot<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Open the slot at `key`, falling back to `default` when nothing usable is stored.
    pub fn open(store: Arc<dyn KeyValueStore>, key: StorageKey, default: T) -> Self {
        Self::open_with(store, key, || default)
    }

    /// Like [`open`](Self::open) but builds the default only when it is needed.
    ///
    /// A fallback default is written back once so ids generated inside it stay
    /// stable across reloads.
    pub fn open_with(
        store: Arc<dyn KeyValueStore>,
        key: StorageKey,
        default: impl FnOnce() -> T,
    ) -> Self {
        if let Some(value) = load_json(store.as_ref(), key) {
            debug!(%key, "slot hydrated from storage");
            return Self { store, key, value };
        }
        let slot = Self { store, key, value: default() };
        slot.persist();
        slot
    }

    #[must_use]
    pub fn key(&self) -> StorageKey {
        self.key
    }

    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and write it back.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.persist();
    }

    /// Mutate the value in place and write it back.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let out = f(&mut self.value);
        self.persist();
        out
    }

    fn persist(&self) {
        save_json(self.store.as_ref(), self.key, &self.value);
    }
}

#[cfg(test)]
#[path = "slot_test.rs"]
mod tests;
