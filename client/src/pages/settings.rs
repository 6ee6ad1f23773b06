//! Presentation preferences and sign-out.

use leptos::prelude::*;

use crate::components::dashboard_layout::SignOutAction;
use crate::components::preference_toggles::PreferenceToggles;
use crate::i18n::{Msg, use_i18n};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let SignOutAction(sign_out) = expect_context::<SignOutAction>();
    let t = use_i18n();

    view! {
        <section class="dashboard-page">
            <h1>{move || t(Msg::SettingsTitle)}</h1>
            <div class="settings__row">
                <span>{move || t(Msg::SettingsTheme)} " / " {move || t(Msg::SettingsLanguage)}</span>
                <PreferenceToggles/>
            </div>
            <button class="settings__sign-out" type="button" on:click=move |_| sign_out.run(())>
                {move || t(Msg::SignOut)}
            </button>
        </section>
    }
}
