//! External auth-service contract.
//!
//! ARCHITECTURE
//! ============
//! The hosted auth service owns users, passwords and token issuance. This
//! module describes the subset of its API the server consumes as the
//! [`AuthProvider`] trait; [`super::gotrue`] implements it over HTTP and tests
//! substitute an in-memory mock.

use access::{Session, SessionUser};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The service could not be reached or timed out.
    #[error("auth service unreachable: {0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("auth service rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// The service answered with a body this client does not understand.
    #[error("unexpected auth service response: {0}")]
    Parse(String),
}

/// Token pair issued by a password sign-in or a refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGrant {
    pub access_token: String,
    pub refresh_token: String,
    /// Access-token lifetime in seconds.
    pub expires_in: Option<i64>,
    /// Access-token expiry as unix seconds.
    pub expires_at: Option<i64>,
    pub user: SessionUser,
}

impl TokenGrant {
    /// Client-visible view of the grant: the user and expiry, no tokens.
    #[must_use]
    pub fn session(&self) -> Session {
        let expires_at = self.expires_at.or_else(|| {
            self.expires_in
                .map(|secs| time::OffsetDateTime::now_utc().unix_timestamp() + secs)
        });
        Session { user: self.user.clone(), expires_at }
    }
}

/// Outcome of a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The account is active and signed in immediately.
    SignedIn(TokenGrant),
    /// The account exists but must confirm its email before signing in.
    ConfirmationRequired(SessionUser),
}

/// Operations the server needs from the external auth service.
#[async_trait::async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolve the user owning `access_token`. `Ok(None)` when the token is
    /// expired or invalid.
    async fn get_user(&self, access_token: &str) -> Result<Option<SessionUser>, AuthError>;

    /// Exchange a refresh token for a new token pair. `Ok(None)` when the
    /// refresh token is revoked or already used.
    async fn refresh_session(&self, refresh_token: &str) -> Result<Option<TokenGrant>, AuthError>;

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<TokenGrant, AuthError>;

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: Option<&str>,
    ) -> Result<SignUpOutcome, AuthError>;

    /// Revoke the session behind `access_token`.
    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;

    /// Send a password-recovery email whose link lands on `redirect_to`.
    async fn recover(&self, email: &str, redirect_to: &str) -> Result<(), AuthError>;

    async fn update_password(&self, access_token: &str, password: &str) -> Result<(), AuthError>;
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
