//! Shell for every `/dashboard` route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounts the session gate once per layout instance and provides its state
//! to nested pages. Protected content renders only once the gate reports
//! `Authenticated`; while loading a placeholder shows, and an unauthenticated
//! gate renders nothing (the server guard has already redirected).

use leptos::prelude::*;
use leptos_router::components::Outlet;

use access::LOGIN_PATH;

use crate::components::sidebar::Sidebar;
use crate::i18n::{Msg, use_i18n};
use crate::net::auth_client::AuthClient;
use crate::util::auth::use_session_gate;
use crate::util::presentation::use_presentation;
#[cfg(feature = "hydrate")]
use crate::util::browser::BrowserNavigator;
#[cfg(feature = "hydrate")]
use crate::util::session_gate::Navigator;

/// Sign-out action shared by the sidebar and the settings page.
#[derive(Clone, Copy)]
pub struct SignOutAction(pub Callback<()>);

#[component]
pub fn DashboardLayout() -> impl IntoView {
    use_presentation();
    let auth = use_session_gate();
    provide_context(auth);
    let client = expect_context::<AuthClient>();
    let t = use_i18n();

    // A successful sign-out publishes SIGNED_OUT and the gate navigates.
    let on_sign_out = Callback::new(move |()| {
        let client = client.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = client.sign_out().await {
                log::warn!("sign-out failed: {e}");
                BrowserNavigator.navigate(LOGIN_PATH);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (client, LOGIN_PATH);
    });
    provide_context(SignOutAction(on_sign_out));

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <Show when=move || auth.get().is_loading()>
                        <div class="dashboard-loading" role="status">{move || t(Msg::Loading)}</div>
                    </Show>
                }
            }
        >
            <div class="dashboard">
                <Sidebar on_sign_out=on_sign_out/>
                <main class="dashboard__content">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}
