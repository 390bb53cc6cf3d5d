//! Durable key-value storage for per-feature state.
//!
//! DESIGN
//! ======
//! The keyspace is partitioned by fixed [`StorageKey`]s, one owner per key.
//! Values are opaque JSON strings at this layer; typing happens in
//! [`slot::PersistedSlot`]. Backends are injected as `Arc<dyn KeyValueStore>`
//! so services never reach for ambient global state.

pub mod file;
pub mod memory;
pub mod slot;

use std::fmt;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use slot::PersistedSlot;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("quota exceeded writing {key}: {needed} bytes needed, {limit} allowed")]
    QuotaExceeded { key: String, needed: usize, limit: usize },
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// KEYSPACE
// =============================================================================

/// Fixed storage keys, one per feature area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Diary,
    Feed,
    Mood,
    Forum,
    Profile,
    Groups,
    Events,
    Badges,
    Reminders,
    Session,
}

impl StorageKey {
    pub const ALL: [Self; 10] = [
        Self::Diary,
        Self::Feed,
        Self::Mood,
        Self::Forum,
        Self::Profile,
        Self::Groups,
        Self::Events,
        Self::Badges,
        Self::Reminders,
        Self::Session,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Diary => "ss_diary",
            Self::Feed => "ss_feed",
            Self::Mood => "ss_mood",
            Self::Forum => "ss_forum",
            Self::Profile => "ss_profile",
            Self::Groups => "ss_groups",
            Self::Events => "ss_events",
            Self::Badges => "ss_badges",
            Self::Reminders => "ss_reminders",
            Self::Session => "ss_session",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// STORE TRAIT
// =============================================================================

/// Raw string key-value storage. Implementations must be safe to share.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value at `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the raw value at `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write (e.g. quota).
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Deleting an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
