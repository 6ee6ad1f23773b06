use leptos::prelude::*;

use crate::i18n::{Msg, use_i18n};

#[component]
pub fn HabitsPage() -> impl IntoView {
    let t = use_i18n();

    view! {
        <section class="dashboard-page">
            <h1>{move || t(Msg::HabitsTitle)}</h1>
            <p class="dashboard-page__empty">{move || t(Msg::HabitsEmpty)}</p>
        </section>
    }
}
