//! Session and auth-event types exchanged between the server API and the client.

use serde::{Deserialize, Serialize};

/// Minimum password length accepted at registration and reset.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Identity attached to a session by the external auth service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Auth-service user identifier (opaque, usually a UUID string).
    pub id: String,
    pub email: Option<String>,
    /// Display name captured at registration, if any.
    #[serde(default)]
    pub full_name: Option<String>,
}

impl SessionUser {
    /// Best label for greeting the user: full name, then email, then id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// An authenticated session. Tokens never leave the server; clients only see
/// the user and expiry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    /// Expiry as unix seconds, when the auth service reported one.
    #[serde(default)]
    pub expires_at: Option<i64>,
}

/// Auth-state-change notification tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
    PasswordRecovery,
}

// =============================================================================
// API BODIES
// =============================================================================

/// `GET /api/auth/session` and `POST /api/auth/sign-in` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session: Option<Session>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// `POST /api/auth/sign-up` response. `session` is `None` when the auth
/// service requires email confirmation first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub session: Option<Session>,
    pub confirmation_required: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoverRequest {
    pub email: String,
}

/// `POST /api/auth/reset-password` body. `access_token` comes from the
/// recovery link fragment; without it the session cookie is used.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub password: String,
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Error body returned by every `/api/auth/*` failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
