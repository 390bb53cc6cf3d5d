use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::*;
use crate::store::{MemoryStore, StoreError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Note {
    id: u32,
    text: String,
}

fn memory() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

/// Store whose writes always fail.
struct ReadOnlyStore {
    inner: MemoryStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("read only".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("read only".into()))
    }
}

// =============================================================================
// open
// =============================================================================

#[test]
fn open_missing_key_uses_default() {
    let slot = PersistedSlot::open(memory(), StorageKey::Diary, vec![1, 2, 3]);
    assert_eq!(slot.get(), &vec![1, 2, 3]);
}

#[test]
fn open_corrupted_value_uses_exact_default() {
    let store = memory();
    store.set("ss_feed", "{not json").unwrap();
    let slot = PersistedSlot::open(store, StorageKey::Feed, Vec::<Note>::new());
    assert!(slot.get().is_empty());
}

#[test]
fn open_wrong_shape_uses_default_without_merging() {
    let store = memory();
    store.set("ss_profile", r#"{"id": 7}"#).unwrap();
    let default = Note { id: 1, text: "default".into() };
    let slot = PersistedSlot::open(store, StorageKey::Profile, default.clone());
    assert_eq!(slot.get(), &default);
}

#[test]
fn open_persists_fallback_default() {
    let store = memory();
    let _slot = PersistedSlot::open(store.clone(), StorageKey::Badges, vec!["starter".to_owned()]);
    assert_eq!(store.get("ss_badges").unwrap().as_deref(), Some(r#"["starter"]"#));
}

#[test]
fn open_with_skips_default_when_stored() {
    let store = memory();
    store.set("ss_mood", "[5]").unwrap();
    let slot = PersistedSlot::open_with(store, StorageKey::Mood, || -> Vec<i32> {
        panic!("default built")
    });
    assert_eq!(slot.get(), &vec![5]);
}

// =============================================================================
// mutation
// =============================================================================

#[test]
fn set_survives_reload() {
    let store = memory();
    let written = vec![Note { id: 1, text: "xin chào".into() }, Note { id: 2, text: "b".into() }];
    {
        let mut slot = PersistedSlot::open(store.clone(), StorageKey::Diary, Vec::new());
        slot.set(written.clone());
    }
    let reloaded = PersistedSlot::open(store, StorageKey::Diary, Vec::<Note>::new());
    assert_eq!(reloaded.get(), &written);
}

#[test]
fn update_writes_back_and_returns_closure_result() {
    let store = memory();
    let mut slot = PersistedSlot::open(store.clone(), StorageKey::Reminders, vec![1]);
    let len = slot.update(|v| {
        v.push(2);
        v.len()
    });
    assert_eq!(len, 2);
    assert_eq!(store.get("ss_reminders").unwrap().as_deref(), Some("[1,2]"));
}

#[test]
fn slots_on_different_keys_are_independent() {
    let store = memory();
    let mut a = PersistedSlot::open(store.clone(), StorageKey::Events, vec![0]);
    let mut b = PersistedSlot::open(store.clone(), StorageKey::Groups, vec![0]);
    a.set(vec![1]);
    b.set(vec![2]);
    assert_eq!(store.get("ss_events").unwrap().as_deref(), Some("[1]"));
    assert_eq!(store.get("ss_groups").unwrap().as_deref(), Some("[2]"));
}

#[test]
fn failed_write_keeps_in_memory_value() {
    let store = Arc::new(ReadOnlyStore { inner: MemoryStore::new() });
    let mut slot = PersistedSlot::open(store.clone(), StorageKey::Feed, vec![1]);
    slot.set(vec![1, 2]);
    assert_eq!(slot.get(), &vec![1, 2]);
    assert_eq!(store.get("ss_feed").unwrap(), None);
}

#[test]
fn quota_exceeded_write_is_swallowed() {
    let store = Arc::new(MemoryStore::with_quota(16));
    let mut slot = PersistedSlot::open(store.clone(), StorageKey::Feed, String::new());
    slot.set("x".repeat(64));
    assert_eq!(slot.get().len(), 64);
    assert_eq!(store.get("ss_feed").unwrap().as_deref(), Some(r#""""#));
}

#[test]
fn key_reports_slot_key() {
    let slot = PersistedSlot::open(memory(), StorageKey::Session, Option::<Note>::None);
    assert_eq!(slot.key(), StorageKey::Session);
}

// =============================================================================
// load_json / save_json
// =============================================================================

#[test]
fn load_json_missing_is_none() {
    let store = MemoryStore::new();
    assert_eq!(load_json::<Vec<i32>>(&store, StorageKey::Diary), None);
}

#[test]
fn save_then_load_json() {
    let store = MemoryStore::new();
    save_json(&store, StorageKey::Diary, &vec!["a", "b"]);
    assert_eq!(
        load_json::<Vec<String>>(&store, StorageKey::Diary),
        Some(vec!["a".to_owned(), "b".to_owned()])
    );
}
