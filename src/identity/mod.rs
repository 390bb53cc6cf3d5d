//! Identity: accounts and sessions delegated to an external provider.
//!
//! ARCHITECTURE
//! ============
//! [`IdentityProvider`] is the narrow capability the rest of the crate sees:
//! sign-in (password or Google), sign-up, display-name update and sign-out.
//! [`session::AuthSession`] layers the persisted current identity and an
//! observable [`AuthState`] on top of it. Credential checks, token issuance
//! and provider error wording all live with the provider; its messages are
//! passed through unchanged.

pub mod firebase;
pub mod session;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use firebase::FirebaseAuth;
pub use session::AuthSession;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// Provider-rejected operation. Displays the provider's message verbatim.
    #[error("{0}")]
    Provider(String),

    /// The provider answered with a non-success status and no readable error body.
    #[error("identity provider error: status {status}")]
    Response { status: u16, body: String },

    #[error("identity request failed: {0}")]
    Request(String),

    #[error("identity response parse failed: {0}")]
    Parse(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    #[error("identity provider not configured")]
    NotConfigured,
}

// =============================================================================
// IDENTITY
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignInMethod {
    Password,
    Google,
}

/// The authenticated user as reported by the provider.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub method: SignInMethod,
    #[serde(default)]
    pub id_token: String,
    #[serde(default)]
    pub refresh_token: String,
}

impl Identity {
    /// Best human-readable name: display name, then email, then uid.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or(&self.uid)
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("uid", &self.uid)
            .field("email", &self.email)
            .field("display_name", &self.display_name)
            .field("photo_url", &self.photo_url)
            .field("method", &self.method)
            .field("id_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Current identity plus whether the provider has reported yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Identity>,
    pub loading: bool,
}

// =============================================================================
// PROVIDER TRAIT
// =============================================================================

/// Provider-neutral account operations. Enables fakes in tests.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns [`IdentityError::Provider`] with the provider's message when the
    /// credentials are rejected, or a transport error.
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, IdentityError>;

    /// Exchange a Google ID token for a provider session.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider rejects the token.
    async fn sign_in_with_google(&self, google_id_token: &str) -> Result<Identity, IdentityError>;

    /// Create an account. Success also signs the new account in.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider rejects the email or password.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, IdentityError>;

    /// # Errors
    ///
    /// Returns an error if the provider rejects the update.
    async fn update_display_name(
        &self,
        identity: &Identity,
        display_name: &str,
    ) -> Result<Identity, IdentityError>;

    /// # Errors
    ///
    /// Returns an error if the provider could not end the session.
    async fn sign_out(&self, identity: &Identity) -> Result<(), IdentityError>;
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
