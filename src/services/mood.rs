//! Mood board: quick emoji check-ins over time.
//!
//! Samples are stored under `ss_mood` with the short wire names `m` (emoji)
//! and `t` (timestamp), newest first.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::new_id;
use crate::store::{KeyValueStore, PersistedSlot, StorageKey};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "😄")]
    Joyful,
    #[serde(rename = "🙂")]
    Content,
    #[serde(rename = "😐")]
    Neutral,
    #[serde(rename = "😕")]
    Uneasy,
    #[serde(rename = "😢")]
    Sad,
    #[serde(rename = "😤")]
    Frustrated,
    #[serde(rename = "😴")]
    Tired,
}

impl Mood {
    /// Palette in display order.
    pub const PALETTE: [Self; 7] = [
        Self::Joyful,
        Self::Content,
        Self::Neutral,
        Self::Uneasy,
        Self::Sad,
        Self::Frustrated,
        Self::Tired,
    ];

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Joyful => "😄",
            Self::Content => "🙂",
            Self::Neutral => "😐",
            Self::Uneasy => "😕",
            Self::Sad => "😢",
            Self::Frustrated => "😤",
            Self::Tired => "😴",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Joyful => "joyful",
            Self::Content => "content",
            Self::Neutral => "neutral",
            Self::Uneasy => "uneasy",
            Self::Sad => "sad",
            Self::Frustrated => "frustrated",
            Self::Tired => "tired",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.emoji())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mood: {0}")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    /// Accepts the emoji or the English name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::PALETTE
            .into_iter()
            .find(|mood| mood.emoji() == wanted || mood.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownMood(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodSample {
    pub id: Uuid,
    #[serde(rename = "m")]
    pub mood: Mood,
    #[serde(rename = "t")]
    pub time: DateTime<Utc>,
}

pub struct MoodBoard {
    slot: PersistedSlot<Vec<MoodSample>>,
}

impl MoodBoard {
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        Self { slot: PersistedSlot::open(store, StorageKey::Mood, Vec::new()) }
    }

    #[must_use]
    pub fn samples(&self) -> &[MoodSample] {
        self.slot.get()
    }

    pub fn record(&mut self, mood: Mood) -> MoodSample {
        let sample = MoodSample { id: new_id(), mood, time: Utc::now() };
        self.slot.update(|samples| samples.insert(0, sample.clone()));
        sample
    }
}

#[cfg(test)]
#[path = "mood_test.rs"]
mod tests;
