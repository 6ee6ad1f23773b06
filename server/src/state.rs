//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers and the access guard via the
//! `State` extractor. It carries no mutable data of its own: the external
//! auth service is the sole source of truth for sessions.

use std::sync::Arc;

use crate::services::auth::AuthProvider;
use crate::services::session::CookieSettings;

/// Clone is required by Axum; the provider is `Arc`-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthProvider>,
    pub cookies: CookieSettings,
    /// Public origin, used to build password-recovery links.
    pub site_url: String,
}

impl AppState {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthProvider>, cookies: CookieSettings, site_url: String) -> Self {
        Self { auth, cookies, site_url }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
