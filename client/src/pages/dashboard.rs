//! Dashboard overview.

use leptos::prelude::*;

use crate::i18n::{Msg, use_i18n};
use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let t = use_i18n();
    let name = move || auth.get().user.map(|user| user.display_name().to_owned()).unwrap_or_default();

    view! {
        <section class="dashboard-page">
            <h1>{move || t(Msg::Greeting)} " " {name}</h1>
            <p class="dashboard-page__empty">{move || t(Msg::DashboardEmpty)}</p>
        </section>
    }
}
