//! Edge access guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page request passes through [`access_guard`] before routing. Paths
//! under the protected prefix are served only after the external auth
//! service confirms a session; everything else passes untouched. This is the
//! single enforcement point: pages may display the session, never re-check it.
//!
//! ERROR HANDLING
//! ==============
//! All failures (no cookies, revoked tokens, auth-service outage) collapse
//! into the same redirect to the login page. The cause is only logged.

use axum::Router;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use access::{LOGIN_PATH, RouteClass};

use crate::services::session::{self, SessionCheck};
use crate::state::AppState;

/// Wrap `router` so every request goes through [`access_guard`].
pub fn with_access_guard(router: Router, state: AppState) -> Router {
    router.layer(middleware::from_fn_with_state(state, access_guard))
}

/// Pass the request through, or redirect it to [`LOGIN_PATH`].
pub async fn access_guard(State(state): State<AppState>, jar: CookieJar, mut request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    if !access::is_intercepted(&path) || access::classify(&path) == RouteClass::Public {
        return next.run(request).await;
    }

    match session::check_session(state.auth.as_ref(), jar, state.cookies).await {
        Ok(SessionCheck { session: Some(session), jar }) => {
            // Downstream rendering must see the rotated tokens too.
            if let Ok(value) = HeaderValue::from_str(&session::cookie_header(&jar)) {
                request.headers_mut().insert(header::COOKIE, value);
            }
            tracing::debug!(%path, user_id = %session.user.id, "session verified");
            let response = next.run(request).await;
            (jar, response).into_response()
        }
        Ok(SessionCheck { session: None, jar }) => {
            tracing::debug!(%path, "no session; redirecting to login");
            (jar, Redirect::temporary(LOGIN_PATH)).into_response()
        }
        Err(e) => {
            tracing::warn!(%path, error = %e, "session check failed; redirecting to login");
            Redirect::temporary(LOGIN_PATH).into_response()
        }
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
