//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the `/api/auth/*` endpoints and Leptos SSR rendering
//! under a single Axum router. The access guard wraps the whole router; it
//! skips API and asset paths itself, so layering order does not widen access.

pub mod auth;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::guard::with_access_guard;
use crate::state::AppState;

/// JSON API used by the hydrated client.
pub(crate) fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/session", get(auth::session))
        .route("/api/auth/sign-in", post(auth::sign_in))
        .route("/api/auth/sign-up", post(auth::sign_up))
        .route("/api/auth/sign-out", post(auth::sign_out))
        .route("/api/auth/recover", post(auth::recover))
        .route("/api/auth/reset-password", post(auth::reset_password))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// API routes + Leptos SSR pages + static assets, behind the access guard.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS and CSS bundles built into the site root.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let app = api_routes(state.clone())
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .nest_service("/assets", ServeDir::new(site_root_path.join("assets")))
        .route_service("/favicon.ico", ServeFile::new(site_root_path.join("favicon.ico")));

    Ok(with_access_guard(app, state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
