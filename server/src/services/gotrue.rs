//! HTTP client for a GoTrue-compatible auth service (`{AUTH_URL}/auth/v1`).
//!
//! ERROR HANDLING
//! ==============
//! "Token no longer valid" answers (401/403 on `/user`, 400/401 on refresh)
//! are `Ok(None)`, not errors, so callers can tell an anonymous visitor from
//! an outage. Everything else non-2xx becomes [`AuthError::Rejected`] with the
//! service's own message.

use reqwest::{Method, RequestBuilder};
use serde::Deserialize;
use serde_json::{Value, json};

use super::auth::{AuthError, AuthProvider, SignUpOutcome, TokenGrant};
use crate::config::ServerConfig;
use access::SessionUser;

pub struct GoTrueClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl GoTrueClient {
    /// Build a client from server config.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &ServerConfig) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request)
            .connect_timeout(config.timeouts.connect)
            .build()
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: format!("{}/auth/v1", config.auth_url),
            anon_key: config.auth_anon_key.clone(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{path}", self.base_url))
            .header("apikey", &self.anon_key)
    }

    async fn send(builder: RequestBuilder) -> Result<(u16, String), AuthError> {
        let resp = builder
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        Ok((status, body))
    }
}

#[async_trait::async_trait]
impl AuthProvider for GoTrueClient {
    async fn get_user(&self, access_token: &str) -> Result<Option<SessionUser>, AuthError> {
        let (status, body) = Self::send(self.request(Method::GET, "/user").bearer_auth(access_token)).await?;
        match status {
            200..=299 => parse_user(&body).map(Some),
            401 | 403 => Ok(None),
            _ => Err(rejected(status, &body)),
        }
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<Option<TokenGrant>, AuthError> {
        let builder = self
            .request(Method::POST, "/token")
            .query(&[("grant_type", "refresh_token")])
            .json(&json!({ "refresh_token": refresh_token }));
        let (status, body) = Self::send(builder).await?;
        match status {
            200..=299 => parse_grant(&body).map(Some),
            400 | 401 => Ok(None),
            _ => Err(rejected(status, &body)),
        }
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<TokenGrant, AuthError> {
        let builder = self
            .request(Method::POST, "/token")
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password }));
        let (status, body) = Self::send(builder).await?;
        match status {
            200..=299 => parse_grant(&body),
            _ => Err(rejected(status, &body)),
        }
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: Option<&str>,
    ) -> Result<SignUpOutcome, AuthError> {
        let builder = self.request(Method::POST, "/signup").json(&json!({
            "email": email,
            "password": password,
            "data": { "full_name": full_name },
        }));
        let (status, body) = Self::send(builder).await?;
        match status {
            200..=299 => parse_sign_up(&body),
            _ => Err(rejected(status, &body)),
        }
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let (status, body) = Self::send(self.request(Method::POST, "/logout").bearer_auth(access_token)).await?;
        match status {
            // An already-invalid token has nothing left to revoke.
            200..=299 | 401 => Ok(()),
            _ => Err(rejected(status, &body)),
        }
    }

    async fn recover(&self, email: &str, redirect_to: &str) -> Result<(), AuthError> {
        let builder = self
            .request(Method::POST, "/recover")
            .query(&[("redirect_to", redirect_to)])
            .json(&json!({ "email": email }));
        let (status, body) = Self::send(builder).await?;
        match status {
            200..=299 => Ok(()),
            _ => Err(rejected(status, &body)),
        }
    }

    async fn update_password(&self, access_token: &str, password: &str) -> Result<(), AuthError> {
        let builder = self
            .request(Method::PUT, "/user")
            .bearer_auth(access_token)
            .json(&json!({ "password": password }));
        let (status, body) = Self::send(builder).await?;
        match status {
            200..=299 => Ok(()),
            _ => Err(rejected(status, &body)),
        }
    }
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

#[derive(Debug, Deserialize)]
struct WireUser {
    id: String,
    email: Option<String>,
    #[serde(default)]
    user_metadata: WireMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct WireMetadata {
    full_name: Option<String>,
}

impl From<WireUser> for SessionUser {
    fn from(user: WireUser) -> Self {
        Self { id: user.id, email: user.email, full_name: user.user_metadata.full_name }
    }
}

#[derive(Debug, Deserialize)]
struct WireGrant {
    access_token: String,
    refresh_token: String,
    expires_in: Option<i64>,
    expires_at: Option<i64>,
    user: WireUser,
}

pub(crate) fn parse_user(body: &str) -> Result<SessionUser, AuthError> {
    serde_json::from_str::<WireUser>(body)
        .map(SessionUser::from)
        .map_err(|e| AuthError::Parse(format!("user: {e}")))
}

pub(crate) fn parse_grant(body: &str) -> Result<TokenGrant, AuthError> {
    let grant: WireGrant = serde_json::from_str(body).map_err(|e| AuthError::Parse(format!("token grant: {e}")))?;
    Ok(TokenGrant {
        access_token: grant.access_token,
        refresh_token: grant.refresh_token,
        expires_in: grant.expires_in,
        expires_at: grant.expires_at,
        user: grant.user.into(),
    })
}

/// Sign-up answers with a full grant when the account is auto-confirmed and
/// with a bare user when email confirmation is pending.
pub(crate) fn parse_sign_up(body: &str) -> Result<SignUpOutcome, AuthError> {
    let value: Value = serde_json::from_str(body).map_err(|e| AuthError::Parse(format!("sign-up: {e}")))?;
    if value.get("access_token").is_some_and(|token| !token.is_null()) {
        return parse_grant(body).map(SignUpOutcome::SignedIn);
    }
    let user = value.get("user").cloned().unwrap_or(value);
    serde_json::from_value::<WireUser>(user)
        .map(|user| SignUpOutcome::ConfirmationRequired(user.into()))
        .map_err(|e| AuthError::Parse(format!("sign-up user: {e}")))
}

/// Pull a human-readable message out of an error body. GoTrue versions
/// disagree on the field name.
pub(crate) fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.trim().to_owned();
    };
    ["error_description", "msg", "message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map_or_else(|| body.trim().to_owned(), str::to_owned)
}

fn rejected(status: u16, body: &str) -> AuthError {
    AuthError::Rejected { status, message: error_message(body) }
}

#[cfg(test)]
#[path = "gotrue_test.rs"]
mod tests;
