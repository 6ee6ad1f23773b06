//! Static informational pages: about, contact, help.

use leptos::prelude::*;

use crate::components::site_header::SiteHeader;
use crate::i18n::{Msg, use_i18n};
use crate::util::presentation::use_presentation;

#[component]
fn InfoPage(title: Msg, body: Msg) -> impl IntoView {
    use_presentation();
    let t = use_i18n();

    view! {
        <SiteHeader/>
        <main class="info-page">
            <h1>{move || t(title)}</h1>
            <p>{move || t(body)}</p>
        </main>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! { <InfoPage title=Msg::AboutTitle body=Msg::AboutBody/> }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! { <InfoPage title=Msg::ContactTitle body=Msg::ContactBody/> }
}

#[component]
pub fn HelpPage() -> impl IntoView {
    view! { <InfoPage title=Msg::HelpTitle body=Msg::HelpBody/> }
}
