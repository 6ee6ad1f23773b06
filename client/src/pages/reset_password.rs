//! Password-recovery completion. Recovery links land here with the token in
//! the URL fragment, which never reaches the server on page load.

use leptos::prelude::*;

use access::LOGIN_PATH;

use crate::components::form_field::{FormField, FormStatus};
use crate::components::site_header::SiteHeader;
use crate::i18n::{Msg, use_i18n};
use crate::net::auth_client::AuthClient;
use crate::util::browser::location_hash;
use crate::util::forms::{RecoveryLink, parse_recovery_fragment, validate_new_password};
use crate::util::presentation::use_presentation;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    use_presentation();
    let client = expect_context::<AuthClient>();
    let t = use_i18n();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<Msg>);
    let info = RwSignal::new(None::<Msg>);
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);
    let link = RwSignal::new(RecoveryLink::Missing);

    // The fragment is only visible in the browser.
    Effect::new(move || {
        let parsed = parse_recovery_fragment(&location_hash());
        if parsed == RecoveryLink::Invalid {
            error.set(Some(Msg::ErrRecoveryLink));
        }
        link.set(parsed);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || done.get() {
            return;
        }
        let token = match link.get() {
            RecoveryLink::Token(token) => Some(token),
            RecoveryLink::Missing => None,
            RecoveryLink::Invalid => {
                error.set(Some(Msg::ErrRecoveryLink));
                return;
            }
        };
        let password_value = password.get();
        if let Err(e) = validate_new_password(&password_value, &confirm.get()) {
            error.set(Some(e.msg()));
            return;
        }
        error.set(None);
        busy.set(true);

        let client = client.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::util::forms::auth_error_msg;

            match client.reset_password(&password_value, token).await {
                Ok(()) => {
                    done.set(true);
                    info.set(Some(Msg::InfoPasswordUpdated));
                }
                Err(e) => error.set(Some(auth_error_msg(&e, Msg::ErrRecoveryLink))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (client, password_value, token);
    };

    view! {
        <SiteHeader/>
        <main class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>{move || t(Msg::ResetTitle)}</h1>
                <FormField label=Msg::PasswordLabel value=password input_type="password" autocomplete="new-password"/>
                <FormField
                    label=Msg::ConfirmPasswordLabel
                    value=confirm
                    input_type="password"
                    autocomplete="new-password"
                />
                <FormStatus error=error info=info/>
                <button
                    class="auth-card__submit"
                    type="submit"
                    disabled=move || busy.get() || done.get() || link.get() == RecoveryLink::Invalid
                >
                    {move || if busy.get() { t(Msg::Busy) } else { t(Msg::SubmitReset) }}
                </button>
                <a class="auth-card__link" href=LOGIN_PATH>{move || t(Msg::NavLogin)}</a>
            </form>
        </main>
    }
}
