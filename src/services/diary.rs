//! Personal study diary.
//!
//! Entries keep the text exactly as written (blank entries are rejected) and
//! are stored newest first under `ss_diary`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ServiceError, new_id};
use crate::screening::CrisisAlert;
use crate::store::{KeyValueStore, PersistedSlot, StorageKey};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: Uuid,
    pub text: String,
    pub time: DateTime<Utc>,
}

pub struct Diary {
    slot: PersistedSlot<Vec<DiaryEntry>>,
    alert: CrisisAlert,
}

impl Diary {
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            slot: PersistedSlot::open(store, StorageKey::Diary, Vec::new()),
            alert: CrisisAlert::new(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[DiaryEntry] {
        self.slot.get()
    }

    pub fn screen_draft(&mut self, draft: &str) -> Option<&'static str> {
        self.alert.observe(draft)
    }

    #[must_use]
    pub fn alert_visible(&self) -> bool {
        self.alert.is_visible()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert.dismiss();
    }

    /// # Errors
    ///
    /// Returns [`ServiceError::Empty`] for blank text.
    pub fn add(&mut self, text: &str) -> Result<DiaryEntry, ServiceError> {
        if text.trim().is_empty() {
            return Err(ServiceError::Empty { field: "text" });
        }
        let entry = DiaryEntry { id: new_id(), text: text.to_owned(), time: Utc::now() };
        self.slot.update(|entries| entries.insert(0, entry.clone()));
        Ok(entry)
    }
}

#[cfg(test)]
#[path = "diary_test.rs"]
mod tests;
