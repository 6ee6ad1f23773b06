use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::Body;
use axum::http::{HeaderMap, Request as HttpRequest, StatusCode, header};
use axum::routing::get;
use tower::ServiceExt;

use super::*;
use crate::services::session::{ACCESS_COOKIE, REFRESH_COOKIE};
use crate::state::test_helpers::{
    MockAuth, ROTATED_ACCESS, ROTATED_REFRESH, VALID_ACCESS, VALID_REFRESH, test_app_state,
};

/// Router with a downstream handler on every interesting path. The handler
/// counts invocations and echoes the `Cookie` header it received.
fn guarded_app(auth: Arc<MockAuth>, hits: Arc<AtomicUsize>) -> Router {
    let echo = move |headers: HeaderMap| {
        let hits = hits.clone();
        async move {
            hits.fetch_add(1, Ordering::SeqCst);
            headers
                .get(header::COOKIE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_owned()
        }
    };
    let router = Router::new()
        .route("/", get(echo.clone()))
        .route("/iniciar-sesion", get(echo.clone()))
        .route("/registrarse", get(echo.clone()))
        .route("/olvido-contrasena", get(echo.clone()))
        .route("/restablecer-contrasena", get(echo.clone()))
        .route("/sobre-nosotros", get(echo.clone()))
        .route("/contacto", get(echo.clone()))
        .route("/ayuda", get(echo.clone()))
        .route("/precios", get(echo.clone()))
        .route("/dashboard", get(echo.clone()))
        .route("/dashboard/habitos", get(echo.clone()))
        .route("/api/auth/session", get(echo.clone()))
        .route("/pkg/vivesano.js", get(echo));
    with_access_guard(router, test_app_state(auth))
}

async fn send(app: Router, path: &str, cookies: Option<&str>) -> axum::response::Response {
    let mut builder = HttpRequest::builder().uri(path);
    if let Some(cookies) = cookies {
        builder = builder.header(header::COOKIE, cookies);
    }
    app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &axum::response::Response) -> Option<&str> {
    response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok())
}

fn set_cookies(response: &axum::response::Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_owned())
        .collect()
}

// =============================================================================
// PUBLIC PATHS
// =============================================================================

#[tokio::test]
async fn allow_listed_paths_pass_without_session_check() {
    for path in access::PUBLIC_PATHS {
        let auth = Arc::new(MockAuth::default());
        let hits = Arc::new(AtomicUsize::new(0));
        let app = guarded_app(auth.clone(), hits.clone());

        let response = send(app, path, Some("sb-access-token=whatever")).await;

        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert_eq!(hits.load(Ordering::SeqCst), 1, "{path}");
        assert!(auth.calls().is_empty(), "{path} must not consult the auth service");
    }
}

#[tokio::test]
async fn unlisted_non_dashboard_paths_pass_by_permissive_default() {
    let auth = Arc::new(MockAuth::default());
    let hits = Arc::new(AtomicUsize::new(0));

    let response = send(guarded_app(auth.clone(), hits.clone()), "/precios", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(auth.calls().is_empty());
}

#[tokio::test]
async fn query_string_does_not_change_classification() {
    let auth = Arc::new(MockAuth::default());
    let hits = Arc::new(AtomicUsize::new(0));

    let response = send(guarded_app(auth.clone(), hits.clone()), "/ayuda?tema=dashboard", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(auth.calls().is_empty());
}

#[tokio::test]
async fn api_and_asset_paths_are_never_intercepted() {
    for path in ["/api/auth/session", "/pkg/vivesano.js"] {
        let auth = Arc::new(MockAuth::unreachable());
        let hits = Arc::new(AtomicUsize::new(0));

        let response = send(guarded_app(auth.clone(), hits.clone()), path, None).await;

        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert!(auth.calls().is_empty(), "{path}");
    }
}

// =============================================================================
// PROTECTED PATHS
// =============================================================================

#[tokio::test]
async fn dashboard_without_session_redirects_to_login() {
    for path in ["/dashboard", "/dashboard/habitos", "/dashboard/habitos?dia=hoy"] {
        let auth = Arc::new(MockAuth::default());
        let hits = Arc::new(AtomicUsize::new(0));

        let response = send(guarded_app(auth, hits.clone()), path, None).await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert_eq!(location(&response), Some(LOGIN_PATH), "{path}");
        assert_eq!(hits.load(Ordering::SeqCst), 0, "{path} must not render");
    }
}

#[tokio::test]
async fn redirect_carries_no_return_path() {
    let response = send(
        guarded_app(Arc::new(MockAuth::default()), Arc::new(AtomicUsize::new(0))),
        "/dashboard/habitos?x=1",
        None,
    )
    .await;
    assert_eq!(location(&response), Some("/iniciar-sesion"));
}

#[tokio::test]
async fn dashboard_with_revoked_tokens_redirects_and_clears_cookies() {
    let hits = Arc::new(AtomicUsize::new(0));
    let cookies = format!("{ACCESS_COOKIE}=stale; {REFRESH_COOKIE}=revoked");

    let response = send(guarded_app(Arc::new(MockAuth::default()), hits.clone()), "/dashboard", Some(&cookies)).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert!(set_cookies(&response).iter().all(|c| c.contains("Max-Age=0")));
}

#[tokio::test]
async fn dashboard_fails_closed_when_auth_service_is_down() {
    let auth = Arc::new(MockAuth::unreachable());
    let hits = Arc::new(AtomicUsize::new(0));
    let cookies = format!("{ACCESS_COOKIE}={VALID_ACCESS}");

    let response = send(guarded_app(auth.clone(), hits.clone()), "/dashboard", Some(&cookies)).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some(LOGIN_PATH));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert_eq!(auth.calls().len(), 1);
}

#[tokio::test]
async fn dashboard_with_valid_session_passes_through() {
    let hits = Arc::new(AtomicUsize::new(0));
    let cookies = format!("{ACCESS_COOKIE}={VALID_ACCESS}");

    let response = send(guarded_app(Arc::new(MockAuth::default()), hits.clone()), "/dashboard", Some(&cookies)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(set_cookies(&response).is_empty());
}

#[tokio::test]
async fn rotated_cookies_reach_both_response_and_downstream_request() {
    let hits = Arc::new(AtomicUsize::new(0));
    let cookies = format!("theme=dark; {ACCESS_COOKIE}=stale; {REFRESH_COOKIE}={VALID_REFRESH}");

    let response = send(guarded_app(Arc::new(MockAuth::default()), hits.clone()), "/dashboard/habitos", Some(&cookies)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    let emitted = set_cookies(&response);
    assert!(emitted.iter().any(|c| c.starts_with(&format!("{ACCESS_COOKIE}={ROTATED_ACCESS}"))));
    assert!(emitted.iter().any(|c| c.starts_with(&format!("{REFRESH_COOKIE}={ROTATED_REFRESH}"))));

    let forwarded = body_text(response).await;
    assert!(forwarded.contains(&format!("{ACCESS_COOKIE}={ROTATED_ACCESS}")), "{forwarded}");
    assert!(forwarded.contains(&format!("{REFRESH_COOKIE}={ROTATED_REFRESH}")), "{forwarded}");
    assert!(forwarded.contains("theme=dark"), "{forwarded}");
    assert!(!forwarded.contains("stale"), "{forwarded}");
}
