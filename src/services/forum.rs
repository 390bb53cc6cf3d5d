//! Career forum: questions with threaded replies.
//!
//! DESIGN
//! ======
//! Topics are stored newest first under `ss_forum`; each topic owns its
//! replies in arrival order. A fresh keyspace is seeded with one alumni
//! topic so the board is never empty on first visit.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ServiceError, new_id, not_found, required};
use crate::store::{KeyValueStore, PersistedSlot, StorageKey};

pub const ANONYMOUS_AUTHOR: &str = "Bạn ẩn danh";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: Uuid,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub body: String,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

fn seed_topics() -> Vec<Topic> {
    vec![Topic {
        id: new_id(),
        title: "Học ngành CNTT cần những gì?".to_owned(),
        author: "Cựu học sinh".to_owned(),
        body: "Lộ trình, dự án, thực tập…".to_owned(),
        replies: Vec::new(),
    }]
}

pub struct CareerForum {
    slot: PersistedSlot<Vec<Topic>>,
}

impl CareerForum {
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        Self { slot: PersistedSlot::open_with(store, StorageKey::Forum, seed_topics) }
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        self.slot.get()
    }

    #[must_use]
    pub fn topic(&self, id: Uuid) -> Option<&Topic> {
        self.topics().iter().find(|t| t.id == id)
    }

    /// Post a new anonymous question at the top of the board.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Empty`] when the title or body is blank.
    pub fn create_topic(&mut self, title: &str, body: &str) -> Result<Topic, ServiceError> {
        let topic = Topic {
            id: new_id(),
            title: required("title", title)?,
            author: ANONYMOUS_AUTHOR.to_owned(),
            body: required("body", body)?,
            replies: Vec::new(),
        };
        self.slot.update(|topics| topics.insert(0, topic.clone()));
        Ok(topic)
    }

    /// Append a reply to one topic.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Empty`] for a blank reply or
    /// [`ServiceError::NotFound`] for an unknown topic.
    pub fn reply(&mut self, topic_id: Uuid, content: &str) -> Result<Reply, ServiceError> {
        let reply = Reply { id: new_id(), content: required("content", content)? };
        if self.topic(topic_id).is_none() {
            return Err(not_found("topic", topic_id));
        }
        self.slot.update(|topics| {
            if let Some(topic) = topics.iter_mut().find(|t| t.id == topic_id) {
                topic.replies.push(reply.clone());
            }
        });
        Ok(reply)
    }
}

#[cfg(test)]
#[path = "forum_test.rs"]
mod tests;
