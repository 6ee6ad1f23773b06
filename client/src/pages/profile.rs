//! Read-only view of the signed-in account.

use leptos::prelude::*;

use crate::i18n::{Msg, use_i18n};
use crate::state::auth::AuthState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let t = use_i18n();

    let full_name = move || {
        auth.get()
            .user
            .and_then(|user| user.full_name)
            .unwrap_or_else(|| "-".to_owned())
    };
    let email = move || auth.get().user.and_then(|user| user.email).unwrap_or_default();

    view! {
        <section class="dashboard-page">
            <h1>{move || t(Msg::ProfileTitle)}</h1>
            <dl class="profile">
                <dt>{move || t(Msg::ProfileName)}</dt>
                <dd>{full_name}</dd>
                <dt>{move || t(Msg::ProfileEmail)}</dt>
                <dd>{email}</dd>
            </dl>
        </section>
    }
}
