//! Configuration parsed from environment variables.
//!
//! Parsing goes through a lookup closure so callers (and tests) can supply
//! values without touching the process environment.

use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = ".safespace";
pub const DEFAULT_FIREBASE_AUTH_BASE_URL: &str = "https://identitytoolkit.googleapis.com";
pub const DEFAULT_GOOGLE_REQUEST_URI: &str = "http://localhost";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Identity provider settings. Absent when `FIREBASE_API_KEY` is unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
    pub app_id: Option<String>,
    pub base_url: String,
    pub google_request_uri: String,
    pub timeouts: Timeouts,
}

impl FirebaseConfig {
    /// Load from `FIREBASE_*` environment variables.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// Required: `FIREBASE_API_KEY` (non-blank).
    ///
    /// Optional:
    /// - `FIREBASE_AUTH_DOMAIN`, `FIREBASE_PROJECT_ID`, `FIREBASE_APP_ID`
    /// - `FIREBASE_AUTH_BASE_URL`: default identity toolkit host
    /// - `FIREBASE_GOOGLE_REQUEST_URI`: default `http://localhost`
    /// - `FIREBASE_REQUEST_TIMEOUT_SECS`: default 30
    /// - `FIREBASE_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let api_key = non_blank(lookup("FIREBASE_API_KEY"))?;
        let base_url = non_blank(lookup("FIREBASE_AUTH_BASE_URL"))
            .unwrap_or_else(|| DEFAULT_FIREBASE_AUTH_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let google_request_uri = non_blank(lookup("FIREBASE_GOOGLE_REQUEST_URI"))
            .unwrap_or_else(|| DEFAULT_GOOGLE_REQUEST_URI.to_owned());
        let timeouts = Timeouts {
            request_secs: parse_or(
                lookup("FIREBASE_REQUEST_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            ),
            connect_secs: parse_or(
                lookup("FIREBASE_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
        };

        Some(Self {
            api_key,
            auth_domain: non_blank(lookup("FIREBASE_AUTH_DOMAIN")),
            project_id: non_blank(lookup("FIREBASE_PROJECT_ID")),
            app_id: non_blank(lookup("FIREBASE_APP_ID")),
            base_url,
            google_request_uri,
            timeouts,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub firebase: Option<FirebaseConfig>,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `SAFESPACE_DATA_DIR` selects the storage directory; Firebase settings as
    /// in [`FirebaseConfig::from_lookup`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = non_blank(lookup("SAFESPACE_DATA_DIR"))
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_owned());
        Self { data_dir: PathBuf::from(data_dir), firebase: FirebaseConfig::from_lookup(&lookup) }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_or(value: Option<String>, default: u64) -> u64 {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
