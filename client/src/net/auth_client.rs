//! Auth collaborator used by pages and the session gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the `/api/auth/*` calls and publishes an [`AuthChange`] on the shared
//! [`AuthEvents`] hub whenever a call changes who is signed in. Mounted
//! dashboard layouts listen on that hub; sign-out anywhere reaches all of them.
//!
//! Expiry is observed the same way: [`AuthClient::recheck_session`] re-queries
//! a lapsed session and publishes `TOKEN_REFRESHED` or `SIGNED_OUT`.

#[cfg(test)]
#[path = "auth_client_test.rs"]
mod auth_client_test;

use std::sync::Arc;

use access::session::{RecoverRequest, ResetPasswordRequest, SignInRequest, SignUpRequest, SignUpResponse};
use access::{AuthEvent, Session};

use super::api::AuthError;
use super::auth_events::{AuthChange, AuthEvents, Subscription};
use super::transport::{AuthTransport, HttpTransport};

/// Provided once at the app root via context. Cheap to clone.
#[derive(Clone)]
pub struct AuthClient {
    events: AuthEvents,
    transport: Arc<dyn AuthTransport>,
}

impl Default for AuthClient {
    fn default() -> Self {
        Self::new(AuthEvents::default(), Arc::new(HttpTransport))
    }
}

impl AuthClient {
    #[must_use]
    pub fn new(events: AuthEvents, transport: Arc<dyn AuthTransport>) -> Self {
        Self { events, transport }
    }

    #[must_use]
    pub fn events(&self) -> &AuthEvents {
        &self.events
    }

    /// Current session as the server sees it.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the server cannot be reached.
    pub async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        self.transport.fetch_session().await
    }

    /// Re-query the session once its access token has lapsed.
    ///
    /// A session that is still there (usually rotated by the server)
    /// publishes `TOKEN_REFRESHED`; a missing one publishes `SIGNED_OUT`. A
    /// failed query counts as missing, the same as the initial query.
    pub async fn recheck_session(&self) -> Option<Session> {
        let session = match self.transport.fetch_session().await {
            Ok(session) => session,
            Err(e) => {
                #[cfg(feature = "hydrate")]
                log::warn!("session re-check failed: {e}");
                #[cfg(not(feature = "hydrate"))]
                let _ = e;
                None
            }
        };
        match &session {
            Some(current) => self.publish(AuthEvent::TokenRefreshed, Some(current.clone())),
            None => self.publish(AuthEvent::SignedOut, None),
        }
        session
    }

    /// Listen for auth-state changes until the subscription is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn on_auth_state_change<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&AuthChange) + Send + Sync + 'static,
    {
        self.events.subscribe(handler)
    }

    /// # Errors
    ///
    /// Returns [`AuthError`] for rejected credentials or transport failures.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let request = SignInRequest { email: email.to_owned(), password: password.to_owned() };
        let session = self.transport.sign_in(&request).await?;
        self.publish(AuthEvent::SignedIn, Some(session.clone()));
        Ok(session)
    }

    /// # Errors
    ///
    /// Returns [`AuthError`] if the registration is rejected or the call fails.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: Option<String>,
    ) -> Result<SignUpResponse, AuthError> {
        let request = SignUpRequest { email: email.to_owned(), password: password.to_owned(), full_name };
        let response = self.transport.sign_up(&request).await?;
        if let Some(session) = &response.session {
            self.publish(AuthEvent::SignedIn, Some(session.clone()));
        }
        Ok(response)
    }

    /// # Errors
    ///
    /// Returns [`AuthError`] if the server could not clear the session.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.transport.sign_out().await?;
        self.publish(AuthEvent::SignedOut, None);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`AuthError`] if the request fails.
    pub async fn recover(&self, email: &str) -> Result<(), AuthError> {
        self.transport.recover(&RecoverRequest { email: email.to_owned() }).await
    }

    /// # Errors
    ///
    /// Returns [`AuthError`] if the token is rejected or the call fails.
    pub async fn reset_password(&self, password: &str, access_token: Option<String>) -> Result<(), AuthError> {
        let request = ResetPasswordRequest { password: password.to_owned(), access_token };
        self.transport.reset_password(&request).await?;
        self.publish(AuthEvent::UserUpdated, None);
        Ok(())
    }

    fn publish(&self, event: AuthEvent, session: Option<Session>) {
        self.events.emit(&AuthChange { event, session });
    }
}
