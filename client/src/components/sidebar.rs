//! Dashboard sidebar: section links, signed-in identity, sign-out.
//!
//! Section links use `rel="external"` so every dashboard navigation is a real
//! request and passes the server's access guard, not just the first one.

use leptos::prelude::*;

use access::{DASHBOARD_PATH, HABITS_PATH, PROFILE_PATH, PROGRESS_PATH, SETTINGS_PATH};

use crate::i18n::{Msg, use_i18n};
use crate::state::auth::AuthState;

const SECTIONS: [(&str, Msg); 5] = [
    (DASHBOARD_PATH, Msg::SidebarOverview),
    (HABITS_PATH, Msg::SidebarHabits),
    (PROGRESS_PATH, Msg::SidebarProgress),
    (PROFILE_PATH, Msg::SidebarProfile),
    (SETTINGS_PATH, Msg::SidebarSettings),
];

#[component]
pub fn Sidebar(on_sign_out: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let t = use_i18n();
    let identity = move || auth.get().user.map(|user| user.display_name().to_owned()).unwrap_or_default();

    view! {
        <aside class="sidebar">
            <a class="sidebar__brand" href="/">{move || t(Msg::Brand)}</a>
            <p class="sidebar__identity">{identity}</p>
            <nav class="sidebar__nav">
                {SECTIONS
                    .into_iter()
                    .map(|(path, label)| {
                        view! {
                            <a class="sidebar__link" href=path rel="external">
                                {move || t(label)}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <button class="sidebar__sign-out" type="button" on:click=move |_| on_sign_out.run(())>
                {move || t(Msg::SignOut)}
            </button>
        </aside>
    }
}
