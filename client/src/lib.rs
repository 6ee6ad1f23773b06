//! # client
//!
//! Leptos + WASM frontend for ViveSano.
//!
//! Pages, layout components, the dashboard session gate, the auth client and
//! its event hub, presentation (theme/locale) hooks, and the message catalog.
//! The same crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`); browser-only glue compiles to no-ops without `hydrate`.

pub mod app;
pub mod components;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered [`app::App`].
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
