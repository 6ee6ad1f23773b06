//! Account registration.

use leptos::prelude::*;

use access::LOGIN_PATH;

use crate::components::form_field::{FormField, FormStatus};
use crate::components::site_header::SiteHeader;
use crate::i18n::{Msg, use_i18n};
use crate::net::auth_client::AuthClient;
use crate::util::forms::validate_registration;
use crate::util::presentation::use_presentation;

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

/// Trimmed display name; blank input registers without one.
fn normalize_full_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    use_presentation();
    let client = expect_context::<AuthClient>();
    let t = use_i18n();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<Msg>);
    let info = RwSignal::new(None::<Msg>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(e) = validate_registration(&email_value, &password_value, &confirm.get()) {
            error.set(Some(e.msg()));
            return;
        }
        let name = normalize_full_name(&full_name.get());
        error.set(None);
        info.set(None);
        busy.set(true);

        let client = client.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::util::browser::BrowserNavigator;
            use crate::util::forms::auth_error_msg;
            use crate::util::session_gate::Navigator;

            match client.sign_up(&email_value, &password_value, name).await {
                Ok(response) if response.session.is_some() => BrowserNavigator.navigate(access::DASHBOARD_PATH),
                Ok(_) => {
                    info.set(Some(Msg::InfoConfirmEmail));
                    busy.set(false);
                }
                Err(e) => {
                    error.set(Some(auth_error_msg(&e, Msg::ErrService)));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (client, email_value, password_value, name);
    };

    view! {
        <SiteHeader/>
        <main class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>{move || t(Msg::RegisterTitle)}</h1>
                <FormField label=Msg::FullNameLabel value=full_name autocomplete="name"/>
                <FormField label=Msg::EmailLabel value=email input_type="email" autocomplete="email"/>
                <FormField label=Msg::PasswordLabel value=password input_type="password" autocomplete="new-password"/>
                <FormField
                    label=Msg::ConfirmPasswordLabel
                    value=confirm
                    input_type="password"
                    autocomplete="new-password"
                />
                <FormStatus error=error info=info/>
                <button class="auth-card__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { t(Msg::Busy) } else { t(Msg::SubmitRegister) }}
                </button>
                <a class="auth-card__link" href=LOGIN_PATH>{move || t(Msg::HaveAccount)}</a>
            </form>
        </main>
    }
}
