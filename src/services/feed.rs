//! Anonymous confession feed.
//!
//! Posts are trimmed, stored newest first under `ss_feed`, and carry no author.
//! The composer screens its draft on every change and raises the crisis
//! disclosure on a match; posting is never blocked by it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ServiceError, new_id, required};
use crate::screening::CrisisAlert;
use crate::store::{KeyValueStore, PersistedSlot, StorageKey};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confession {
    pub id: Uuid,
    pub text: String,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub likes: u32,
}

pub struct ConfessionFeed {
    slot: PersistedSlot<Vec<Confession>>,
    alert: CrisisAlert,
}

impl ConfessionFeed {
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            slot: PersistedSlot::open(store, StorageKey::Feed, Vec::new()),
            alert: CrisisAlert::new(),
        }
    }

    #[must_use]
    pub fn list(&self) -> &[Confession] {
        self.slot.get()
    }

    /// Screen the composer draft; returns the matched keyword.
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
    /// Returns [`ServiceError::Empty`] for blank text; the feed is unchanged.
    pub fn post(&mut self, text: &str) -> Result<Confession, ServiceError> {
        let confession =
            Confession { id: new_id(), text: required("text", text)?, time: Utc::now(), likes: 0 };
        self.slot.update(|feed| feed.insert(0, confession.clone()));
        Ok(confession)
    }
}

#[cfg(test)]
#[path = "feed_test.rs"]
mod tests;
