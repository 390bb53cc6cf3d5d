//! Study groups with external invite links (Zalo, Discord, Meet...).
//!
//! DESIGN
//! ======
//! Groups live outside the app; a group here is a card holding the link to
//! join it. Joining a group without a link asks the caller for one, which is
//! then stored on that group so the next visitor can join directly.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ServiceError, new_id, not_found, required};
use crate::store::{KeyValueStore, PersistedSlot, StorageKey};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyGroup {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    pub members: u32,
    #[serde(default)]
    pub join: String,
}

impl StudyGroup {
    #[must_use]
    pub fn has_link(&self) -> bool {
        !self.join.trim().is_empty()
    }
}

/// What the caller should do after asking to join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinAction {
    Open(String),
    /// No link stored yet; collect one and call `set_join_link`.
    NeedsLink,
}

/// Make a stored link openable: anything not already starting with `http`
/// gets an `https://` prefix.
#[must_use]
pub fn normalize_join_url(link: &str) -> String {
    let link = link.trim();
    if link.starts_with("http") {
        link.to_owned()
    } else {
        format!("https://{link}")
    }
}

fn seed_groups() -> Vec<StudyGroup> {
    vec![StudyGroup {
        id: new_id(),
        name: "Nhóm học Toán 12".to_owned(),
        desc: "Chia sẻ đề và lời giải.".to_owned(),
        members: 12,
        join: "https://zalo.me/g/your-group-code".to_owned(),
    }]
}

pub struct StudyGroups {
    slot: PersistedSlot<Vec<StudyGroup>>,
}

impl StudyGroups {
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        Self { slot: PersistedSlot::open_with(store, StorageKey::Groups, seed_groups) }
    }

    #[must_use]
    pub fn list(&self) -> &[StudyGroup] {
        self.slot.get()
    }

    fn find(&self, id: Uuid) -> Result<&StudyGroup, ServiceError> {
        self.list().iter().find(|g| g.id == id).ok_or_else(|| not_found("group", id))
    }

    /// # Errors
    ///
    /// Returns [`ServiceError::Empty`] for a blank name.
    pub fn create(
        &mut self,
        name: &str,
        desc: &str,
        join: &str,
    ) -> Result<StudyGroup, ServiceError> {
        let group = StudyGroup {
            id: new_id(),
            name: required("name", name)?,
            desc: desc.trim().to_owned(),
            members: 1,
            join: join.trim().to_owned(),
        };
        self.slot.update(|groups| groups.insert(0, group.clone()));
        Ok(group)
    }

    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] for an unknown group.
    pub fn join(&self, id: Uuid) -> Result<JoinAction, ServiceError> {
        let group = self.find(id)?;
        if group.has_link() {
            Ok(JoinAction::Open(normalize_join_url(&group.join)))
        } else {
            Ok(JoinAction::NeedsLink)
        }
    }

    /// Store a join link on one group and return the URL to open.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Empty`] for a blank link or
    /// [`ServiceError::NotFound`] for an unknown group.
    pub fn set_join_link(&mut self, id: Uuid, link: &str) -> Result<String, ServiceError> {
        let link = required("link", link)?;
        self.find(id)?;
        let url = normalize_join_url(&link);
        self.slot.update(|groups| {
            if let Some(group) = groups.iter_mut().find(|g| g.id == id) {
                group.join = link;
            }
        });
        Ok(url)
    }

    /// The raw invite link to share.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MissingInviteLink`] when the group has none.
    pub fn invite_link(&self, id: Uuid) -> Result<&str, ServiceError> {
        let group = self.find(id)?;
        if group.has_link() { Ok(&group.join) } else { Err(ServiceError::MissingInviteLink) }
    }
}

#[cfg(test)]
#[path = "groups_test.rs"]
mod tests;
