//! Email + password sign-in.

use leptos::prelude::*;

use access::{FORGOT_PASSWORD_PATH, REGISTER_PATH};

use crate::components::form_field::{FormField, FormStatus};
use crate::components::site_header::SiteHeader;
use crate::i18n::{Msg, use_i18n};
use crate::net::auth_client::AuthClient;
use crate::util::forms::validate_login;
use crate::util::presentation::use_presentation;

#[component]
pub fn LoginPage() -> impl IntoView {
    use_presentation();
    let client = expect_context::<AuthClient>();
    let t = use_i18n();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<Msg>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(e) = validate_login(&email_value, &password_value) {
            error.set(Some(e.msg()));
            return;
        }
        error.set(None);
        busy.set(true);

        let client = client.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::util::browser::BrowserNavigator;
            use crate::util::forms::auth_error_msg;
            use crate::util::session_gate::Navigator;

            match client.sign_in(&email_value, &password_value).await {
                // Full navigation so the access guard sees the new cookies.
                Ok(_) => BrowserNavigator.navigate(access::DASHBOARD_PATH),
                Err(e) => {
                    error.set(Some(auth_error_msg(&e, Msg::ErrInvalidCredentials)));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (client, email_value, password_value);
    };

    view! {
        <SiteHeader/>
        <main class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>{move || t(Msg::LoginTitle)}</h1>
                <FormField label=Msg::EmailLabel value=email input_type="email" autocomplete="email"/>
                <FormField
                    label=Msg::PasswordLabel
                    value=password
                    input_type="password"
                    autocomplete="current-password"
                />
                <FormStatus error=error/>
                <button class="auth-card__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { t(Msg::Busy) } else { t(Msg::SubmitLogin) }}
                </button>
                <a class="auth-card__link" href=FORGOT_PASSWORD_PATH>{move || t(Msg::ForgotLink)}</a>
                <a class="auth-card__link" href=REGISTER_PATH>{move || t(Msg::NoAccount)}</a>
            </form>
        </main>
    }
}
