//! Learning portfolio ("Học Bạ 4.0").
//!
//! DESIGN
//! ======
//! The editor works on a draft copy of the saved profile. List edits and field
//! setters touch only the draft; `save` commits it to `ss_profile` and
//! `discard` throws it away. A missing or unreadable key yields the default
//! profile.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{ServiceError, required};
use crate::store::{KeyValueStore, PersistedSlot, StorageKey};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub grade: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub avatar: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Học sinh ẩn danh".to_owned(),
            grade: "Lớp 12".to_owned(),
            interests: vec!["Toán".to_owned(), "Lập trình".to_owned()],
            bio: "Mình thích chia sẻ tips học và dự án nhỏ.".to_owned(),
            projects: vec![Project {
                title: "Web flashcard Hóa 11".to_owned(),
                link: String::new(),
                desc: "Ôn tập phản ứng".to_owned(),
            }],
            achievements: vec!["Giải Nhì HSG Tin tỉnh".to_owned()],
            avatar: "https://avatars.githubusercontent.com/u/9919?s=200&v=4".to_owned(),
        }
    }
}

pub struct ProfileEditor {
    slot: PersistedSlot<Profile>,
    draft: Profile,
}

impl ProfileEditor {
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        let slot = PersistedSlot::open_with(store, StorageKey::Profile, Profile::default);
        let draft = slot.get().clone();
        Self { slot, draft }
    }

    #[must_use]
    pub fn saved(&self) -> &Profile {
        self.slot.get()
    }

    #[must_use]
    pub fn draft(&self) -> &Profile {
        &self.draft
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.draft != *self.slot.get()
    }

    // =========================================================================
    // FIELDS
    // =========================================================================

    pub fn set_name(&mut self, name: &str) {
        name.clone_into(&mut self.draft.name);
    }

    pub fn set_grade(&mut self, grade: &str) {
        grade.clone_into(&mut self.draft.grade);
    }

    pub fn set_bio(&mut self, bio: &str) {
        bio.clone_into(&mut self.draft.bio);
    }

    pub fn set_avatar(&mut self, avatar: &str) {
        avatar.clone_into(&mut self.draft.avatar);
    }

    // =========================================================================
    // LISTS
    // =========================================================================

    /// # Errors
    ///
    /// Returns [`ServiceError::Empty`] for a blank tag.
    pub fn add_interest(&mut self, tag: &str) -> Result<(), ServiceError> {
        self.draft.interests.push(required("interest", tag)?);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ServiceError::OutOfRange`] for an index past the end.
    pub fn remove_interest(&mut self, index: usize) -> Result<String, ServiceError> {
        remove_at(&mut self.draft.interests, "interests", index)
    }

    /// # Errors
    ///
    /// Returns [`ServiceError::Empty`] for a blank entry.
    pub fn add_achievement(&mut self, achievement: &str) -> Result<(), ServiceError> {
        self.draft.achievements.push(required("achievement", achievement)?);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ServiceError::OutOfRange`] for an index past the end.
    pub fn remove_achievement(&mut self, index: usize) -> Result<String, ServiceError> {
        remove_at(&mut self.draft.achievements, "achievements", index)
    }

    /// Add a project at the top of the list. All fields are trimmed; only the
    /// title is required.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Empty`] for a blank title.
    pub fn add_project(
        &mut self,
        title: &str,
        link: &str,
        desc: &str,
    ) -> Result<Project, ServiceError> {
        let project = Project {
            title: required("title", title)?,
            link: link.trim().to_owned(),
            desc: desc.trim().to_owned(),
        };
        self.draft.projects.insert(0, project.clone());
        Ok(project)
    }

    /// # Errors
    ///
    /// Returns [`ServiceError::OutOfRange`] for an index past the end.
    pub fn remove_project(&mut self, index: usize) -> Result<Project, ServiceError> {
        remove_at(&mut self.draft.projects, "projects", index)
    }

    // =========================================================================
    // COMMIT
    // =========================================================================

    pub fn save(&mut self) {
        self.slot.set(self.draft.clone());
    }

    pub fn discard(&mut self) {
        self.draft = self.slot.get().clone();
    }
}

fn remove_at<T>(items: &mut Vec<T>, field: &'static str, index: usize) -> Result<T, ServiceError> {
    if index >= items.len() {
        return Err(ServiceError::OutOfRange { field, index, len: items.len() });
    }
    Ok(items.remove(index))
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
