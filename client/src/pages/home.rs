//! Landing page.

use leptos::prelude::*;

use access::REGISTER_PATH;

use crate::components::site_header::SiteHeader;
use crate::i18n::{Msg, use_i18n};
use crate::util::presentation::use_presentation;

#[component]
pub fn HomePage() -> impl IntoView {
    use_presentation();
    let t = use_i18n();

    view! {
        <SiteHeader/>
        <main class="home">
            <section class="hero">
                <p class="hero__tagline">{move || t(Msg::Tagline)}</p>
                <h1 class="hero__title">{move || t(Msg::HeroTitle)}</h1>
                <p class="hero__body">{move || t(Msg::HeroBody)}</p>
                <a class="hero__cta" href=REGISTER_PATH>{move || t(Msg::HeroCta)}</a>
            </section>
        </main>
    }
}
