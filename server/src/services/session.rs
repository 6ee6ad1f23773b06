//! Session cookies and the per-request session check.
//!
//! ARCHITECTURE
//! ============
//! The token pair lives in two `HttpOnly` cookies. A check first validates the
//! access token; if that is missing or rejected it spends the refresh token
//! and rotates both cookies. Rotated or cleared cookies are returned in the
//! jar's delta so the caller can attach them to whatever response proceeds.
//!
//! TRADE-OFFS
//! ==========
//! A refresh is attempted on every request whose access cookie has lapsed, so
//! concurrent requests from one browser may each spend the refresh token. The
//! auth service tolerates reuse within its grace window; outside it the later
//! requests see "no session" and are redirected.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use super::auth::{AuthError, AuthProvider, TokenGrant};
use access::Session;

pub const ACCESS_COOKIE: &str = "sb-access-token";
pub const REFRESH_COOKIE: &str = "sb-refresh-token";

/// Access-cookie lifetime when the grant does not report one.
const DEFAULT_ACCESS_TTL_SECS: i64 = 3600;
const REFRESH_TTL_DAYS: i64 = 30;

/// Attributes shared by every session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieSettings {
    pub secure: bool,
}

impl CookieSettings {
    fn cookie(self, name: &'static str, value: String, max_age: Duration) -> Cookie<'static> {
        Cookie::build((name, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(max_age)
            .build()
    }

    /// Store a freshly issued token pair in `jar`.
    #[must_use]
    pub fn store_grant(self, jar: CookieJar, grant: &TokenGrant) -> CookieJar {
        let access_ttl = grant
            .expires_in
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_ACCESS_TTL_SECS);
        jar.add(self.cookie(ACCESS_COOKIE, grant.access_token.clone(), Duration::seconds(access_ttl)))
            .add(self.cookie(REFRESH_COOKIE, grant.refresh_token.clone(), Duration::days(REFRESH_TTL_DAYS)))
    }

    /// Remove whichever session cookies `jar` currently holds.
    #[must_use]
    pub fn clear(self, mut jar: CookieJar) -> CookieJar {
        for name in [ACCESS_COOKIE, REFRESH_COOKIE] {
            if jar.get(name).is_some() {
                jar = jar.remove(Cookie::build(name).path("/"));
            }
        }
        jar
    }
}

/// Non-empty value of cookie `name`, if present.
pub fn cookie_value(jar: &CookieJar, name: &str) -> Option<String> {
    jar.get(name)
        .map(|cookie| cookie.value().to_owned())
        .filter(|value| !value.is_empty())
}

/// Result of [`check_session`].
#[derive(Debug)]
pub struct SessionCheck {
    /// The verified session, or `None` for an anonymous caller.
    pub session: Option<Session>,
    /// Input jar plus any rotated or removed cookies.
    pub jar: CookieJar,
}

/// Verify the session carried by `jar`.
///
/// # Errors
///
/// Returns [`AuthError`] when the auth service fails; callers treat that the
/// same as "no session".
pub async fn check_session(
    provider: &dyn AuthProvider,
    jar: CookieJar,
    settings: CookieSettings,
) -> Result<SessionCheck, AuthError> {
    if let Some(token) = cookie_value(&jar, ACCESS_COOKIE) {
        if let Some(user) = provider.get_user(&token).await? {
            return Ok(SessionCheck { session: Some(Session { user, expires_at: None }), jar });
        }
    }

    if let Some(refresh_token) = cookie_value(&jar, REFRESH_COOKIE) {
        if let Some(grant) = provider.refresh_session(&refresh_token).await? {
            tracing::debug!(user_id = %grant.user.id, "session refreshed; rotating cookies");
            let session = grant.session();
            return Ok(SessionCheck { session: Some(session), jar: settings.store_grant(jar, &grant) });
        }
    }

    Ok(SessionCheck { session: None, jar: settings.clear(jar) })
}

/// Render the jar's current cookies as a request `Cookie` header value.
#[must_use]
pub fn cookie_header(jar: &CookieJar) -> String {
    jar.iter()
        .map(|cookie| format!("{}={}", cookie.name(), cookie.value()))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
