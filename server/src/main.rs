mod config;
mod guard;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::gotrue::GoTrueClient;
use services::session::CookieSettings;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let auth = match GoTrueClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "auth client init failed");
            std::process::exit(1);
        }
    };
    tracing::info!(auth_url = %config.auth_url, cookie_secure = config.cookie_secure, "auth service configured");

    let state = state::AppState::new(
        Arc::new(auth),
        CookieSettings { secure: config.cookie_secure },
        config.site_url.clone(),
    );

    let app = match routes::leptos_app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "leptos setup failed");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "vivesano listening");
    axum::serve(listener, app).await.expect("server failed");
}
