//! Password-recovery request: emails a link to the reset page.

use leptos::prelude::*;

use access::LOGIN_PATH;

use crate::components::form_field::{FormField, FormStatus};
use crate::components::site_header::SiteHeader;
use crate::i18n::{Msg, use_i18n};
use crate::net::api::AuthError;
use crate::net::auth_client::AuthClient;
use crate::util::forms::validate_email;
use crate::util::presentation::use_presentation;

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

/// Outcome shown after a recovery request: `Ok` is an info notice, `Err` an error.
///
/// Rejections of the address itself read the same as success, so the form
/// does not reveal which emails have accounts.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn recovery_notice(result: &Result<(), AuthError>) -> Result<Msg, Msg> {
    match result {
        Ok(()) => Ok(Msg::InfoRecoverySent),
        Err(e) if e.status().is_some_and(|s| s != 429 && s < 500) => Ok(Msg::InfoRecoverySent),
        Err(_) => Err(Msg::ErrService),
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    use_presentation();
    let client = expect_context::<AuthClient>();
    let t = use_i18n();

    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<Msg>);
    let info = RwSignal::new(None::<Msg>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        if let Err(e) = validate_email(&email_value) {
            error.set(Some(e.msg()));
            return;
        }
        error.set(None);
        busy.set(true);

        let client = client.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match recovery_notice(&client.recover(&email_value).await) {
                Ok(notice) => info.set(Some(notice)),
                Err(notice) => error.set(Some(notice)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (client, email_value);
    };

    view! {
        <SiteHeader/>
        <main class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>{move || t(Msg::ForgotTitle)}</h1>
                <p class="auth-card__hint">{move || t(Msg::ForgotBody)}</p>
                <FormField label=Msg::EmailLabel value=email input_type="email" autocomplete="email"/>
                <FormStatus error=error info=info/>
                <button class="auth-card__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { t(Msg::Busy) } else { t(Msg::SubmitForgot) }}
                </button>
                <a class="auth-card__link" href=LOGIN_PATH>{move || t(Msg::NavLogin)}</a>
            </form>
        </main>
    }
}
