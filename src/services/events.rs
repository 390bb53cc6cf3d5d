//! Online events (talkshows, Q&A sessions).

use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ServiceError, new_id, required};
use crate::store::{KeyValueStore, PersistedSlot, StorageKey};

/// Local-style inputs accepted in addition to RFC 3339, read as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];

const NO_HOST: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub link: String,
}

impl Event {
    #[must_use]
    pub fn host_label(&self) -> &str {
        if self.host.trim().is_empty() { NO_HOST } else { &self.host }
    }
}

/// Parse an event time; blank input means now.
///
/// # Errors
///
/// Returns [`ServiceError::InvalidTime`] when no accepted format matches.
pub fn parse_event_time(input: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, ServiceError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(now);
    }
    if let Ok(time) = DateTime::parse_from_rfc3339(input) {
        return Ok(time.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ServiceError::InvalidTime(input.to_owned()))
}

fn seed_events() -> Vec<Event> {
    vec![Event {
        id: new_id(),
        title: "Talkshow: Chọn ngành CNTT".to_owned(),
        time: Utc::now(),
        host: "Cựu HS".to_owned(),
        link: String::new(),
    }]
}

pub struct EventBoard {
    slot: PersistedSlot<Vec<Event>>,
}

impl EventBoard {
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        Self { slot: PersistedSlot::open_with(store, StorageKey::Events, seed_events) }
    }

    #[must_use]
    pub fn list(&self) -> &[Event] {
        self.slot.get()
    }

    /// # Errors
    ///
    /// Returns [`ServiceError::Empty`] for a blank title or
    /// [`ServiceError::InvalidTime`] for an unparseable time.
    pub fn create(
        &mut self,
        title: &str,
        time: &str,
        host: &str,
        link: &str,
    ) -> Result<Event, ServiceError> {
        let event = Event {
            id: new_id(),
            title: required("title", title)?,
            time: parse_event_time(time, Utc::now())?,
            host: host.trim().to_owned(),
            link: link.trim().to_owned(),
        };
        tracing::debug!(event_id = %event.id, time = %event.time, "event created");
        self.slot.update(|events| events.insert(0, event.clone()));
        Ok(event)
    }
}

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;
