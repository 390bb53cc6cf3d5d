//! Navigation surface: feature tabs, top-level routes and the auth guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every feature view sits behind the same guard: nothing renders while the
//! identity provider is still reporting, and a settled state without a user
//! redirects to the login route.

use std::fmt;
use std::str::FromStr;

use crate::identity::{AuthState, Identity};

pub const SAFETY_BANNER: &str = "🌿 Góc An Yên Trường Mình: Nơi học trò sẻ chia cảm xúc, \
                                 học hỏi và cùng tiến bộ. \
                                 Tôn trọng – Không phán xét – Ẩn danh tuỳ chọn.";

// =============================================================================
// ROUTES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    App,
    Login,
    Signup,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::App => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
        }
    }
}

/// Outcome of guarding an authenticated view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access<'a> {
    /// Provider has not reported yet; render nothing.
    Pending,
    Granted(&'a Identity),
    Redirect(Route),
}

#[must_use]
pub fn guard(state: &AuthState) -> Access<'_> {
    if state.loading {
        return Access::Pending;
    }
    match &state.user {
        Some(user) => Access::Granted(user),
        None => Access::Redirect(Route::Login),
    }
}

/// `true` once auth has settled with no user present.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

// =============================================================================
// VIEWS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Feed,
    Diary,
    Mood,
    Career,
    Tests,
    Profile,
    Mentors,
    Groups,
    Events,
    Rewards,
    Reminders,
    Rules,
}

impl View {
    /// Tabs in navigation order.
    pub const ALL: [Self; 12] = [
        Self::Feed,
        Self::Diary,
        Self::Mood,
        Self::Career,
        Self::Tests,
        Self::Profile,
        Self::Mentors,
        Self::Groups,
        Self::Events,
        Self::Rewards,
        Self::Reminders,
        Self::Rules,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Diary => "diary",
            Self::Mood => "mood",
            Self::Career => "career",
            Self::Tests => "tests",
            Self::Profile => "profile",
            Self::Mentors => "mentors",
            Self::Groups => "groups",
            Self::Events => "events",
            Self::Rewards => "rewards",
            Self::Reminders => "reminders",
            Self::Rules => "rules",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Feed => "Confession Trường Tui",
            Self::Diary => "Ký Sự 'Đi Học'",
            Self::Mood => "Check 'Mood' Hôm Nay",
            Self::Career => "Góc Định Hướng 'Gen Z'",
            Self::Tests => "Quiz 'Hiểu Mình, Chọn Trường'",
            Self::Profile => "Học Bạ 4.0",
            Self::Mentors => "List Thầy Cô 'Gỡ Rối'",
            Self::Groups => "Team 'Cùng Tiến'",
            Self::Events => "Event 'Hot' Trường Mình",
            Self::Rewards => "Sưu Tầm 'Thành Tích'",
            Self::Reminders => "Báo Deadline / Nhắc Lịch Thi",
            Self::Rules => "Nội Quy 'Văn Minh'",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view: {0}")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|view| view.id() == s)
            .ok_or_else(|| UnknownView(s.to_owned()))
    }
}

#[cfg(test)]
#[path = "views_test.rs"]
mod tests;
