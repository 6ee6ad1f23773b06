//! Labeled input bound to a string signal, plus the status line under auth forms.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::i18n::{Msg, use_i18n};

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

#[component]
pub fn FormField(
    label: Msg,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "off")] autocomplete: &'static str,
) -> impl IntoView {
    let t = use_i18n();

    view! {
        <label class="form-field">
            <span class="form-field__label">{move || t(label)}</span>
            <input
                class="form-field__input"
                type=input_type
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Which message the status line shows: errors take precedence over info.
/// The flag is `true` for an error.
fn status_line(error: Option<Msg>, info: Option<Msg>) -> Option<(Msg, bool)> {
    error.map(|msg| (msg, true)).or(info.map(|msg| (msg, false)))
}

/// Error or info line. Forms that never report progress omit `info`.
#[component]
pub fn FormStatus(
    error: RwSignal<Option<Msg>>,
    #[prop(optional)] info: Option<RwSignal<Option<Msg>>>,
) -> impl IntoView {
    let t = use_i18n();

    view! {
        {move || match status_line(error.get(), info.and_then(|info| info.get())) {
            Some((msg, true)) => Some(view! { <p class="form-status form-status--error" role="alert">{t(msg)}</p> }.into_any()),
            Some((msg, false)) => Some(view! { <p class="form-status" role="status">{t(msg)}</p> }.into_any()),
            None => None,
        }}
    }
}
