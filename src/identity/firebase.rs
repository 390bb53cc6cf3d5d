//! Firebase Authentication over the Identity Toolkit REST API.
//!
//! Thin HTTP wrapper for the `accounts:*` endpoints. Response handling lives in
//! the pure `parse_account_response` for testability. Sign-out is local: the
//! REST API keeps no server-side session to end.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{Identity, IdentityError, IdentityProvider, SignInMethod};
use crate::config::FirebaseConfig;

const GOOGLE_PROVIDER_ID: &str = "google.com";

// =============================================================================
// CLIENT
// =============================================================================

pub struct FirebaseAuth {
    http: reqwest::Client,
    config: FirebaseConfig,
}

impl FirebaseAuth {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: FirebaseConfig) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| IdentityError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/v1/accounts:{method}?key={}", self.config.base_url, self.config.api_key)
    }

    async fn call<B: Serialize + Sync>(
        &self,
        method: &str,
        body: &B,
    ) -> Result<AccountResponse, IdentityError> {
        let response = self
            .http
            .post(self.endpoint(method))
            .json(body)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(request_error)?;

        parse_account_response(status, &text)
    }
}

#[async_trait::async_trait]
impl IdentityProvider for FirebaseAuth {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, IdentityError> {
        let body = PasswordRequest { email, password, return_secure_token: true };
        let account = self.call("signInWithPassword", &body).await?;
        Ok(account.into_identity(SignInMethod::Password))
    }

    async fn sign_in_with_google(&self, google_id_token: &str) -> Result<Identity, IdentityError> {
        let body = IdpRequest {
            post_body: format!("id_token={google_id_token}&providerId={GOOGLE_PROVIDER_ID}"),
            request_uri: &self.config.google_request_uri,
            return_idp_credential: true,
            return_secure_token: true,
        };
        let account = self.call("signInWithIdp", &body).await?;
        Ok(account.into_identity(SignInMethod::Google))
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, IdentityError> {
        let body = PasswordRequest { email, password, return_secure_token: true };
        let account = self.call("signUp", &body).await?;
        Ok(account.into_identity(SignInMethod::Password))
    }

    async fn update_display_name(
        &self,
        identity: &Identity,
        display_name: &str,
    ) -> Result<Identity, IdentityError> {
        let body = UpdateRequest {
            id_token: &identity.id_token,
            display_name,
            return_secure_token: true,
        };
        let account = self.call("update", &body).await?;
        Ok(account.merge_into(identity))
    }

    async fn sign_out(&self, _identity: &Identity) -> Result<(), IdentityError> {
        Ok(())
    }
}

/// The endpoint URL carries the API key; keep it out of the message.
fn request_error(e: reqwest::Error) -> IdentityError {
    IdentityError::Request(e.without_url().to_string())
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IdpRequest<'a> {
    post_body: String,
    request_uri: &'a str,
    return_idp_credential: bool,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateRequest<'a> {
    id_token: &'a str,
    display_name: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AccountResponse {
    local_id: String,
    email: Option<String>,
    display_name: Option<String>,
    photo_url: Option<String>,
    id_token: Option<String>,
    refresh_token: Option<String>,
}

impl AccountResponse {
    fn into_identity(self, method: SignInMethod) -> Identity {
        Identity {
            uid: self.local_id,
            email: self.email,
            display_name: self.display_name.filter(|n| !n.is_empty()),
            photo_url: self.photo_url,
            method,
            id_token: self.id_token.unwrap_or_default(),
            refresh_token: self.refresh_token.unwrap_or_default(),
        }
    }

    /// Apply an update response on top of the identity it was issued for.
    fn merge_into(self, identity: &Identity) -> Identity {
        Identity {
            uid: self.local_id,
            email: self.email.or_else(|| identity.email.clone()),
            display_name: self.display_name.or_else(|| identity.display_name.clone()),
            photo_url: self.photo_url.or_else(|| identity.photo_url.clone()),
            method: identity.method,
            id_token: self.id_token.unwrap_or_else(|| identity.id_token.clone()),
            refresh_token: self.refresh_token.unwrap_or_else(|| identity.refresh_token.clone()),
        }
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

// =============================================================================
// PARSING
// =============================================================================

pub(crate) fn parse_account_response(
    status: u16,
    body: &str,
) -> Result<AccountResponse, IdentityError> {
    if !(200..300).contains(&status) {
        return Err(match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => IdentityError::Provider(envelope.error.message),
            Err(_) => IdentityError::Response { status, body: body.to_owned() },
        });
    }
    serde_json::from_str(body).map_err(|e| IdentityError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "firebase_test.rs"]
mod tests;
