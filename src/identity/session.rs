//! Signed-in session: provider calls, persisted identity, state observers.
//!
//! DESIGN
//! ======
//! The session starts in the loading state. `restore` publishes whatever
//! identity was persisted at `ss_session`, which is the moment route guards
//! may act. Successful provider calls persist the new identity before
//! publishing it; failed calls leave both untouched and return the provider
//! error for display next to the form.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use super::{AuthState, Identity, IdentityError, IdentityProvider};
use crate::store::{KeyValueStore, PersistedSlot, StorageKey};

pub struct AuthSession {
    provider: Arc<dyn IdentityProvider>,
    slot: PersistedSlot<Option<Identity>>,
    state: watch::Sender<AuthState>,
}

impl AuthSession {
    pub fn new(provider: Arc<dyn IdentityProvider>, store: Arc<dyn KeyValueStore>) -> Self {
        let slot = PersistedSlot::open(store, StorageKey::Session, None);
        let (state, _) = watch::channel(AuthState { user: None, loading: true });
        Self { provider, slot, state }
    }

    /// Publish the persisted identity and leave the loading state.
    pub fn restore(&self) {
        self.publish(self.slot.get().clone());
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Identity> {
        self.slot.get().as_ref()
    }

    /// # Errors
    ///
    /// Returns the provider error; the previous session stays in place.
    pub async fn sign_in(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<Identity, IdentityError> {
        let identity = self
            .provider
            .sign_in_with_password(email, password)
            .await
            .inspect_err(|e| warn!(error = %e, "password sign-in failed"))?;
        self.establish(identity.clone());
        Ok(identity)
    }

    /// # Errors
    ///
    /// Returns the provider error; the previous session stays in place.
    pub async fn sign_in_with_google(
        &mut self,
        google_id_token: &str,
    ) -> Result<Identity, IdentityError> {
        let identity = self
            .provider
            .sign_in_with_google(google_id_token)
            .await
            .inspect_err(|e| warn!(error = %e, "google sign-in failed"))?;
        self.establish(identity.clone());
        Ok(identity)
    }

    /// Create an account and sign it in, then apply `display_name` when it is
    /// non-blank.
    ///
    /// # Errors
    ///
    /// Returns the provider error. If only the display-name update fails, the
    /// new account remains signed in.
    pub async fn sign_up(
        &mut self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<Identity, IdentityError> {
        let identity = self
            .provider
            .sign_up(email, password)
            .await
            .inspect_err(|e| warn!(error = %e, "sign-up failed"))?;
        self.establish(identity.clone());

        let Some(name) = display_name.map(str::trim).filter(|n| !n.is_empty()) else {
            return Ok(identity);
        };
        let named = self
            .provider
            .update_display_name(&identity, name)
            .await
            .inspect_err(|e| warn!(error = %e, "display name update failed"))?;
        self.establish(named.clone());
        Ok(named)
    }

    /// End the current session. Signing out with no session is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the provider error; the session stays in place.
    pub async fn sign_out(&mut self) -> Result<(), IdentityError> {
        let Some(identity) = self.slot.get().clone() else {
            return Ok(());
        };
        self.provider.sign_out(&identity).await?;
        self.slot.set(None);
        self.publish(None);
        info!(uid = %identity.uid, "signed out");
        Ok(())
    }

    fn establish(&mut self, identity: Identity) {
        info!(uid = %identity.uid, method = ?identity.method, "signed in");
        self.slot.set(Some(identity.clone()));
        self.publish(Some(identity));
    }

    fn publish(&self, user: Option<Identity>) {
        self.state.send_replace(AuthState { user, loading: false });
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
