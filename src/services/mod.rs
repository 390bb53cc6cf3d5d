//! Feature services, one per navigation view.
//!
//! ARCHITECTURE
//! ============
//! Each service owns the persisted slot for its feature key and exposes the
//! view's operations as plain methods, so entry points (CLI, tests, a future
//! UI) share one implementation. Validation is presence-only: required text is
//! trimmed and rejected when empty, and a rejected call changes nothing.

pub mod badges;
pub mod diary;
pub mod events;
pub mod feed;
pub mod forum;
pub mod groups;
pub mod mentors;
pub mod mood;
pub mod profile;
pub mod quiz;
pub mod reminders;
pub mod rules;

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("no {kind} with id {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("index {index} out of range for {field} ({len} items)")]
    OutOfRange { field: &'static str, index: usize, len: usize },
    #[error("group has no invite link yet")]
    MissingInviteLink,
    #[error("invalid event time: {0}")]
    InvalidTime(String),
}

/// Trim `value`, rejecting blank input.
///
/// # Errors
///
/// Returns [`ServiceError::Empty`] naming `field` when nothing is left after trimming.
pub fn required(field: &'static str, value: &str) -> Result<String, ServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

pub(crate) fn new_id() -> Uuid {
    Uuid::new_v4()
}

pub(crate) fn not_found(kind: &'static str, id: Uuid) -> ServiceError {
    ServiceError::NotFound { kind, id: id.to_string() }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
