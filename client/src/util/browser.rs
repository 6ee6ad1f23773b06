//! Browser-backed implementations of the presentation and navigation seams.
//!
//! TRADE-OFFS
//! ==========
//! Everything here is best-effort: a missing window, blocked storage, or a
//! detached document silently no-ops. Without `hydrate` every method is a
//! no-op so server rendering stays deterministic.

use prefs::{DocumentRoot, PreferenceStore};

use super::session_gate::Navigator;

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

/// `document.documentElement`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDocument;

/// Full-page navigation via `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(feature = "hydrate")]
fn root_element() -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;
    web_sys::window()?
        .document()?
        .document_element()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("could not persist preference {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

impl DocumentRoot for BrowserDocument {
    fn set_class(&self, class: &str, present: bool) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(root) = root_element() {
                let _ = root.class_list().toggle_with_force(class, present);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (class, present);
        }
    }

    fn set_color_scheme(&self, scheme: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(root) = root_element() {
                let _ = root.style().set_property("color-scheme", scheme);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = scheme;
        }
    }

    fn set_lang(&self, lang: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(root) = root_element() {
                root.set_lang(lang);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = lang;
        }
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}

/// Current `window.location.hash`, including the leading `#`; empty without a browser.
pub fn location_hash() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Wall-clock unix seconds.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation)]
pub fn unix_now() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}
