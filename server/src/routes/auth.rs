//! Auth routes: session lookup and the credential flows proxied to the
//! external auth service.
//!
//! Tokens never reach the browser body. Sign-in and sign-up store the token
//! pair in `HttpOnly` cookies; every response carries only the user and expiry.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::CookieJar;

use access::session::{
    ApiError, RecoverRequest, ResetPasswordRequest, SessionResponse, SignInRequest, SignUpRequest, SignUpResponse,
};
use access::{MIN_PASSWORD_LEN, RESET_PASSWORD_PATH};

use crate::services::auth::{AuthError, SignUpOutcome};
use crate::services::session::{self, ACCESS_COOKIE, SessionCheck};
use crate::state::AppState;

// =============================================================================
// ERRORS
// =============================================================================

/// Map an auth-service failure onto the status returned to the browser.
pub(crate) fn auth_error_to_status(err: &AuthError) -> StatusCode {
    match err {
        AuthError::Transport(_) | AuthError::Parse(_) => StatusCode::BAD_GATEWAY,
        AuthError::Rejected { status, .. } => match status {
            400 => StatusCode::BAD_REQUEST,
            401 | 403 => StatusCode::UNAUTHORIZED,
            422 => StatusCode::UNPROCESSABLE_ENTITY,
            429 => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::BAD_GATEWAY,
        },
    }
}

fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiError { error: message.into() })).into_response()
}

fn error_response(err: &AuthError) -> Response {
    let status = auth_error_to_status(err);
    match err {
        AuthError::Rejected { message, .. } if status != StatusCode::BAD_GATEWAY => error_body(status, message.clone()),
        _ => {
            tracing::warn!(error = %err, "auth service call failed");
            error_body(status, "auth service unavailable")
        }
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<(), Response> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(error_body(StatusCode::BAD_REQUEST, "email and password are required"));
    }
    Ok(())
}

fn validate_new_password(password: &str) -> Result<(), Response> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(error_body(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    Ok(())
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/session`: current session, rotating cookies if needed.
/// An auth-service failure reads as "no session".
pub async fn session(State(state): State<AppState>, jar: CookieJar) -> Response {
    match session::check_session(state.auth.as_ref(), jar, state.cookies).await {
        Ok(SessionCheck { session, jar }) => (jar, Json(SessionResponse { session })).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "session lookup failed");
            Json(SessionResponse { session: None }).into_response()
        }
    }
}

/// `POST /api/auth/sign-in`
pub async fn sign_in(State(state): State<AppState>, jar: CookieJar, Json(body): Json<SignInRequest>) -> Response {
    if let Err(rejection) = validate_credentials(&body.email, &body.password) {
        return rejection;
    }
    let email = body.email.trim();

    match state.auth.sign_in_with_password(email, &body.password).await {
        Ok(grant) => {
            tracing::info!(user_id = %grant.user.id, "signed in");
            let jar = state.cookies.store_grant(jar, &grant);
            (jar, Json(SessionResponse { session: Some(grant.session()) })).into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// `POST /api/auth/sign-up`
pub async fn sign_up(State(state): State<AppState>, jar: CookieJar, Json(body): Json<SignUpRequest>) -> Response {
    if let Err(rejection) = validate_credentials(&body.email, &body.password) {
        return rejection;
    }
    if let Err(rejection) = validate_new_password(&body.password) {
        return rejection;
    }
    let email = body.email.trim();
    let full_name = body.full_name.as_deref().map(str::trim).filter(|name| !name.is_empty());

    match state.auth.sign_up(email, &body.password, full_name).await {
        Ok(SignUpOutcome::SignedIn(grant)) => {
            tracing::info!(user_id = %grant.user.id, "signed up");
            let jar = state.cookies.store_grant(jar, &grant);
            let body = SignUpResponse { session: Some(grant.session()), confirmation_required: false };
            (jar, Json(body)).into_response()
        }
        Ok(SignUpOutcome::ConfirmationRequired(user)) => {
            tracing::info!(user_id = %user.id, "signed up; awaiting email confirmation");
            Json(SignUpResponse { session: None, confirmation_required: true }).into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// `POST /api/auth/sign-out`: revoke upstream (best effort) and clear cookies.
pub async fn sign_out(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(token) = session::cookie_value(&jar, ACCESS_COOKIE) {
        if let Err(e) = state.auth.sign_out(&token).await {
            tracing::warn!(error = %e, "upstream sign-out failed; clearing cookies anyway");
        }
    }
    (state.cookies.clear(jar), StatusCode::NO_CONTENT).into_response()
}

/// `POST /api/auth/recover`: email a recovery link pointing at the reset page.
pub async fn recover(State(state): State<AppState>, Json(body): Json<RecoverRequest>) -> Response {
    let email = body.email.trim();
    if email.is_empty() {
        return error_body(StatusCode::BAD_REQUEST, "email is required");
    }
    let redirect_to = format!("{}{RESET_PASSWORD_PATH}", state.site_url.trim_end_matches('/'));

    match state.auth.recover(email, &redirect_to).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(&e),
    }
}

/// `POST /api/auth/reset-password`: set a new password using the recovery
/// token from the link, or the current session when none is given.
pub async fn reset_password(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<ResetPasswordRequest>,
) -> Response {
    if let Err(rejection) = validate_new_password(&body.password) {
        return rejection;
    }
    let token = body
        .access_token
        .filter(|token| !token.is_empty())
        .or_else(|| session::cookie_value(&jar, ACCESS_COOKIE));
    let Some(token) = token else {
        return error_body(StatusCode::UNAUTHORIZED, "recovery link is missing or expired");
    };

    match state.auth.update_password(&token, &body.password).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
