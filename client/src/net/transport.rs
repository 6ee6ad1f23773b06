//! Seam between [`super::auth_client::AuthClient`] and the wire.
//!
//! [`HttpTransport`] forwards to the `api` functions; tests substitute
//! [`test_helpers::MockTransport`]. Futures are not `Send`: in the browser
//! they hold `gloo-net` handles and run on `spawn_local`.

use access::Session;
use access::session::{RecoverRequest, ResetPasswordRequest, SignInRequest, SignUpRequest, SignUpResponse};

use super::api::{self, AuthError};

/// The `/api/auth/*` surface the client talks to.
#[async_trait::async_trait(?Send)]
pub trait AuthTransport: Send + Sync {
    async fn fetch_session(&self) -> Result<Option<Session>, AuthError>;

    async fn sign_in(&self, request: &SignInRequest) -> Result<Session, AuthError>;

    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    async fn recover(&self, request: &RecoverRequest) -> Result<(), AuthError>;

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), AuthError>;
}

/// Same-origin REST calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

#[async_trait::async_trait(?Send)]
impl AuthTransport for HttpTransport {
    async fn fetch_session(&self) -> Result<Option<Session>, AuthError> {
        api::fetch_session().await
    }

    async fn sign_in(&self, request: &SignInRequest) -> Result<Session, AuthError> {
        api::sign_in(request).await
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, AuthError> {
        api::sign_up(request).await
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        api::sign_out().await
    }

    async fn recover(&self, request: &RecoverRequest) -> Result<(), AuthError> {
        api::recover(request).await
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), AuthError> {
        api::reset_password(request).await
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
