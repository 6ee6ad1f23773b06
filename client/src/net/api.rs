//! REST calls to the server's `/api/auth/*` endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Session cookies are
//! `HttpOnly` and ride along automatically on same-origin requests.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `Result`s instead of panics so auth failures degrade the
//! UI (an error message, a gate left unauthenticated) without crashing
//! hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use access::Session;
use access::session::{RecoverRequest, ResetPasswordRequest, SignInRequest, SignUpRequest, SignUpResponse};
#[cfg(any(test, feature = "hydrate"))]
use access::session::ApiError;
#[cfg(feature = "hydrate")]
use access::session::SessionResponse;

pub const SESSION_ENDPOINT: &str = "/api/auth/session";
pub const SIGN_IN_ENDPOINT: &str = "/api/auth/sign-in";
pub const SIGN_UP_ENDPOINT: &str = "/api/auth/sign-up";
pub const SIGN_OUT_ENDPOINT: &str = "/api/auth/sign-out";
pub const RECOVER_ENDPOINT: &str = "/api/auth/recover";
pub const RESET_PASSWORD_ENDPOINT: &str = "/api/auth/reset-password";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("malformed response: {0}")]
    Parse(String),
}

impl AuthError {
    /// HTTP status for [`AuthError::Status`].
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Build the error for a non-2xx response from its status and raw body.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> AuthError {
    let message = serde_json::from_str::<ApiError>(body)
        .map(|e| e.error)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP {status}"));
    AuthError::Status { status, message }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> Result<T, AuthError> {
    Err(AuthError::Network("not available on server".to_owned()))
}

#[cfg(feature = "hydrate")]
async fn check(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, AuthError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(status_error(status, &body))
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(url: &str, body: &B) -> Result<gloo_net::http::Response, AuthError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| AuthError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))?;
    check(resp).await
}

#[cfg(feature = "hydrate")]
async fn parse<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, AuthError> {
    resp.json::<T>().await.map_err(|e| AuthError::Parse(e.to_string()))
}

/// `GET /api/auth/session`. `Ok(None)` means anonymous.
///
/// # Errors
///
/// Returns [`AuthError`] if the request fails or the body is malformed.
pub async fn fetch_session() -> Result<Option<Session>, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let body: SessionResponse = parse(check(resp).await?).await?;
        Ok(body.session)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// `POST /api/auth/sign-in`.
///
/// # Errors
///
/// Returns [`AuthError::Status`] for rejected credentials, or a transport error.
pub async fn sign_in(request: &SignInRequest) -> Result<Session, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let body: SessionResponse = parse(post_json(SIGN_IN_ENDPOINT, request).await?).await?;
        body.session
            .ok_or_else(|| AuthError::Parse("sign-in response without session".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        unavailable()
    }
}

/// `POST /api/auth/sign-up`.
///
/// # Errors
///
/// Returns [`AuthError`] if the server rejects the registration or the call fails.
pub async fn sign_up(request: &SignUpRequest) -> Result<SignUpResponse, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        parse(post_json(SIGN_UP_ENDPOINT, request).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        unavailable()
    }
}

/// `POST /api/auth/sign-out`.
///
/// # Errors
///
/// Returns [`AuthError`] if the call fails.
pub async fn sign_out() -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SIGN_OUT_ENDPOINT)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        check(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// `POST /api/auth/recover`.
///
/// # Errors
///
/// Returns [`AuthError`] if the call fails.
pub async fn recover(request: &RecoverRequest) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(RECOVER_ENDPOINT, request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        unavailable()
    }
}

/// `POST /api/auth/reset-password`.
///
/// # Errors
///
/// Returns [`AuthError::Status`] with 401 when the recovery token is missing or expired.
pub async fn reset_password(request: &ResetPasswordRequest) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(RESET_PASSWORD_ENDPOINT, request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        unavailable()
    }
}
