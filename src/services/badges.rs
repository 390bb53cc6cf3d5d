//! Badge collection. Badges only accumulate; there is no revoke.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{ServiceError, new_id, required};
use crate::store::{KeyValueStore, PersistedSlot, StorageKey};

pub const STARTER_BADGE_ID: &str = "starter";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
}

fn seed_badges() -> Vec<Badge> {
    vec![Badge {
        id: STARTER_BADGE_ID.to_owned(),
        name: "Người mở đường".to_owned(),
        desc: "Đăng bài đầu tiên".to_owned(),
    }]
}

pub struct BadgeShelf {
    slot: PersistedSlot<Vec<Badge>>,
}

impl BadgeShelf {
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        Self { slot: PersistedSlot::open_with(store, StorageKey::Badges, seed_badges) }
    }

    #[must_use]
    pub fn badges(&self) -> &[Badge] {
        self.slot.get()
    }

    /// Append a badge with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Empty`] for a blank name.
    pub fn grant(&mut self, name: &str, desc: &str) -> Result<Badge, ServiceError> {
        let badge = Badge {
            id: new_id().to_string(),
            name: required("name", name)?,
            desc: desc.trim().to_owned(),
        };
        self.slot.update(|badges| badges.push(badge.clone()));
        Ok(badge)
    }

    pub fn grant_kindness(&mut self) -> Badge {
        let badge = Badge {
            id: new_id().to_string(),
            name: "Bạn tốt bụng".to_owned(),
            desc: "Gửi 5 lời động viên".to_owned(),
        };
        self.slot.update(|badges| badges.push(badge.clone()));
        badge
    }
}

#[cfg(test)]
#[path = "badges_test.rs"]
mod tests;
