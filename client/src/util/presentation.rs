//! Theme and locale presentation hooks.
//!
//! Persisted preferences are authoritative. Every page mount re-reads them,
//! re-applies them to `<html>`, and syncs the in-memory preferences signal
//! that drives the message catalog, so a change made in another tab shows up
//! on the next client-side navigation. User toggles go through
//! `prefs::toggle_theme` / `prefs::select_locale`, which persist and apply in
//! one step.
//!
//! The generic functions take any store/document pair; the `use_*` and
//! `toggle_*` wrappers bind them to the browser.

#[cfg(test)]
#[path = "presentation_test.rs"]
mod presentation_test;

use leptos::prelude::*;
use prefs::{ClientPreferences, DocumentRoot, PreferenceStore};

use super::browser::{BrowserDocument, BrowserStorage};

/// Re-apply persisted preferences and return what the app should now hold.
pub fn reconcile(store: &impl PreferenceStore, doc: &impl DocumentRoot, active: ClientPreferences) -> ClientPreferences {
    let boot = prefs::bootstrap(store, doc, active.locale);
    #[cfg(feature = "hydrate")]
    if let Some(locale) = boot.switch_locale {
        log::info!("switching active locale to {}", locale.as_str());
    }
    boot.preferences
}

/// Switch to the other supported language.
pub fn flip_locale(store: &impl PreferenceStore, doc: &impl DocumentRoot, active: ClientPreferences) -> ClientPreferences {
    prefs::select_locale(store, doc, active, active.locale.toggled())
}

/// Run the presentation bootstrap for the page being mounted.
///
/// Called at the top of every route's page (or layout). Effects only run in
/// the browser; the SSR shell's boot script has already applied the same
/// state before first paint, so this pass is idempotent.
pub fn use_presentation() {
    let preferences = expect_context::<RwSignal<ClientPreferences>>();
    Effect::new(move || {
        let active = preferences.get_untracked();
        let next = reconcile(&BrowserStorage, &BrowserDocument, active);
        if next != active {
            preferences.set(next);
        }
    });
}

pub fn toggle_theme(preferences: RwSignal<ClientPreferences>) {
    let next = prefs::toggle_theme(&BrowserStorage, &BrowserDocument, preferences.get_untracked());
    preferences.set(next);
}

pub fn toggle_locale(preferences: RwSignal<ClientPreferences>) {
    let next = flip_locale(&BrowserStorage, &BrowserDocument, preferences.get_untracked());
    preferences.set(next);
}
