//! Friendly reminders and exam deadlines.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ServiceError, new_id, not_found, required};
use crate::store::{KeyValueStore, PersistedSlot, StorageKey};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    #[serde(rename = "t")]
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

pub struct Reminders {
    slot: PersistedSlot<Vec<Reminder>>,
}

impl Reminders {
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        Self { slot: PersistedSlot::open(store, StorageKey::Reminders, Vec::new()) }
    }

    #[must_use]
    pub fn items(&self) -> &[Reminder] {
        self.slot.get()
    }

    /// # Errors
    ///
    /// Returns [`ServiceError::Empty`] for blank text.
    pub fn add(&mut self, text: &str) -> Result<Reminder, ServiceError> {
        let reminder = Reminder { id: new_id(), text: required("text", text)?, done: false };
        self.slot.update(|items| items.insert(0, reminder.clone()));
        Ok(reminder)
    }

    /// Flip the done flag of one reminder and return its new value.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] for an unknown id.
    pub fn toggle(&mut self, id: Uuid) -> Result<bool, ServiceError> {
        self.slot
            .update(|items| {
                items.iter_mut().find(|r| r.id == id).map(|r| {
                    r.done = !r.done;
                    r.done
                })
            })
            .ok_or_else(|| not_found("reminder", id))
    }
}

#[cfg(test)]
#[path = "reminders_test.rs"]
mod tests;
