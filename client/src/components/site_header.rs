//! Public site header with navigation and preference toggles.

use leptos::prelude::*;

use access::{ABOUT_PATH, CONTACT_PATH, DASHBOARD_PATH, HELP_PATH, HOME_PATH, LOGIN_PATH, REGISTER_PATH};

use crate::components::preference_toggles::PreferenceToggles;
use crate::i18n::{Msg, use_i18n};

#[component]
pub fn SiteHeader() -> impl IntoView {
    let t = use_i18n();

    view! {
        <header class="site-header">
            <a class="site-header__brand" href=HOME_PATH>{move || t(Msg::Brand)}</a>
            <nav class="site-header__nav">
                <a href=ABOUT_PATH>{move || t(Msg::NavAbout)}</a>
                <a href=CONTACT_PATH>{move || t(Msg::NavContact)}</a>
                <a href=HELP_PATH>{move || t(Msg::NavHelp)}</a>
            </nav>
            <div class="site-header__actions">
                // The guard sends anonymous visitors on to the login page.
                <a href=DASHBOARD_PATH rel="external">{move || t(Msg::NavDashboard)}</a>
                <a href=LOGIN_PATH>{move || t(Msg::NavLogin)}</a>
                <a class="site-header__cta" href=REGISTER_PATH>{move || t(Msg::NavRegister)}</a>
                <PreferenceToggles/>
            </div>
        </header>
    }
}
