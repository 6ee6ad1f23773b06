//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every dashboard route renders inside `DashboardLayout`, which calls
//! [`use_session_gate`] once. Pages read the resulting signal for display;
//! they never decide access themselves.

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::auth_client::AuthClient;
use crate::state::auth::AuthState;
use crate::util::browser::BrowserNavigator;
use crate::util::session_gate::SessionGate;

/// Mount a [`SessionGate`] for the current component's lifetime.
///
/// The returned signal starts in `Loading`. In the browser the session query
/// runs in the background and is repeated whenever the session expires;
/// during SSR it never runs, so the server-rendered page always shows the
/// loading placeholder.
pub fn use_session_gate() -> RwSignal<AuthState> {
    let client = expect_context::<AuthClient>();
    let state = RwSignal::new(AuthState::default().mounted());

    let gate = SessionGate::mount(client.events(), Arc::new(BrowserNavigator), move |next: &AuthState| {
        let _ = state.try_set(next.clone());
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::util::browser::unix_now;
        use crate::util::session_gate::watch_session;

        let resolver = gate.resolver();
        leptos::task::spawn_local(async move {
            watch_session(&client, &resolver, unix_now, gloo_timers::future::sleep).await;
        });
    }

    on_cleanup(move || gate.unmount());
    state
}
