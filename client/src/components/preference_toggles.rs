//! Theme and language toggle buttons.

use leptos::prelude::*;
use prefs::{ClientPreferences, Theme};

use crate::i18n::{Msg, use_i18n};
use crate::util::presentation::{toggle_locale, toggle_theme};

/// Button pair shown in the site header and on the settings page.
#[component]
pub fn PreferenceToggles() -> impl IntoView {
    let preferences = expect_context::<RwSignal<ClientPreferences>>();
    let t = use_i18n();

    // Each button names the state it switches to.
    let theme_label = move || match preferences.get().theme {
        Theme::Light => t(Msg::ThemeDark),
        Theme::Dark => t(Msg::ThemeLight),
    };
    let locale_label = move || Msg::LanguageName.text(preferences.get().locale.toggled());

    view! {
        <div class="preference-toggles">
            <button
                class="preference-toggles__button"
                type="button"
                aria-pressed=move || (preferences.get().theme == Theme::Dark).to_string()
                on:click=move |_| toggle_theme(preferences)
            >
                {theme_label}
            </button>
            <button
                class="preference-toggles__button"
                type="button"
                on:click=move |_| toggle_locale(preferences)
            >
                {locale_label}
            </button>
        </div>
    }
}
