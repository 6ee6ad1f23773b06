//! Client presentation preferences (theme + locale) and the rules that turn
//! them into document state.
//!
//! DESIGN
//! ======
//! Persisted preferences are read into a [`ClientPreferences`] value, mapped
//! by a pure conversion into a [`Presentation`], and only then written to the
//! document by [`apply`]. Storage and the document root sit behind the
//! [`PreferenceStore`] and [`DocumentRoot`] traits so the browser glue lives
//! in the client crate and tests run against [`memory`] doubles.
//!
//! Applying is history-independent: every call removes conflicting markers
//! and forces `color-scheme`, so re-running converges on the same document
//! regardless of what an earlier script or the OS left behind.

pub mod memory;

use serde::{Deserialize, Serialize};

/// Storage key holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";
/// Storage key holding the preferred locale.
pub const LOCALE_KEY: &str = "vivesano_lang";
/// Locale key written by older builds; read only when [`LOCALE_KEY`] is absent.
pub const LEGACY_LOCALE_KEY: &str = "i18nextLng";

/// Root class marking dark presentation.
pub const DARK_CLASS: &str = "dark";
/// Conflicting marker some scripts add for light mode; always removed.
pub const LIGHT_CLASS: &str = "light";

// =============================================================================
// PREFERENCES
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored value. Only the exact string `"dark"` selects dark.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        if raw == Some("dark") { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Parse a language tag by its primary subtag (`"en-US"` → `En`).
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Es => Self::En,
            Self::En => Self::Es,
        }
    }
}

/// Persisted client preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientPreferences {
    pub theme: Theme,
    pub locale: Locale,
}

impl ClientPreferences {
    /// Read preferences from `store`, defaulting anything missing.
    ///
    /// The locale comes from the first non-empty value among [`LOCALE_KEY`]
    /// and [`LEGACY_LOCALE_KEY`]; a language other than `es`/`en` yields the
    /// default rather than consulting the next key.
    #[must_use]
    pub fn load(store: &impl PreferenceStore) -> Self {
        let theme = Theme::from_stored(store.get(THEME_KEY).as_deref());
        let locale = [LOCALE_KEY, LEGACY_LOCALE_KEY]
            .into_iter()
            .find_map(|key| store.get(key).filter(|raw| !raw.trim().is_empty()))
            .and_then(|raw| Locale::from_tag(&raw))
            .unwrap_or_default();
        Self { theme, locale }
    }
}

// =============================================================================
// PRESENTATION
// =============================================================================

/// Target document-root state for a set of preferences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Presentation {
    /// Whether the [`DARK_CLASS`] marker is present.
    pub dark: bool,
    /// Forced `color-scheme`; a single keyword so the OS preference cannot apply.
    pub color_scheme: &'static str,
    /// Value of the root `lang` attribute.
    pub lang: &'static str,
}

impl From<ClientPreferences> for Presentation {
    fn from(prefs: ClientPreferences) -> Self {
        Self {
            dark: prefs.theme == Theme::Dark,
            color_scheme: prefs.theme.as_str(),
            lang: prefs.locale.as_str(),
        }
    }
}

/// Key-value storage holding persisted preferences (`localStorage` in the browser).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// The mutable bits of the document root the presentation touches.
pub trait DocumentRoot {
    /// Add (`present = true`) or remove a class on the root element.
    fn set_class(&self, class: &str, present: bool);
    /// Set the root element's inline `color-scheme`.
    fn set_color_scheme(&self, scheme: &str);
    /// Set the root element's `lang` attribute.
    fn set_lang(&self, lang: &str);
}

/// Write `presentation` to the document root. The only side-effecting step.
pub fn apply(doc: &impl DocumentRoot, presentation: &Presentation) {
    doc.set_class(LIGHT_CLASS, false);
    doc.set_class(DARK_CLASS, presentation.dark);
    doc.set_color_scheme(presentation.color_scheme);
    doc.set_lang(presentation.lang);
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Result of reconciling persisted preferences with the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bootstrap {
    pub preferences: ClientPreferences,
    /// Locale the caller must switch its in-memory catalog to, if it differs.
    pub switch_locale: Option<Locale>,
}

/// Load preferences, apply them, and report whether `active_locale` is stale.
pub fn bootstrap(store: &impl PreferenceStore, doc: &impl DocumentRoot, active_locale: Locale) -> Bootstrap {
    let preferences = ClientPreferences::load(store);
    apply(doc, &Presentation::from(preferences));
    let switch_locale = (preferences.locale != active_locale).then_some(preferences.locale);
    Bootstrap { preferences, switch_locale }
}

/// Flip the theme, persist it, and re-apply the presentation.
///
/// Storage is written before the document so a reload mid-call still lands on
/// the new value.
pub fn toggle_theme(
    store: &impl PreferenceStore,
    doc: &impl DocumentRoot,
    current: ClientPreferences,
) -> ClientPreferences {
    let next = ClientPreferences { theme: current.theme.toggled(), ..current };
    store.set(THEME_KEY, next.theme.as_str());
    apply(doc, &Presentation::from(next));
    next
}

/// Persist `locale` and re-apply the presentation.
pub fn select_locale(
    store: &impl PreferenceStore,
    doc: &impl DocumentRoot,
    current: ClientPreferences,
    locale: Locale,
) -> ClientPreferences {
    let next = ClientPreferences { locale, ..current };
    store.set(LOCALE_KEY, locale.as_str());
    apply(doc, &Presentation::from(next));
    next
}

/// Inline script for the SSR `<head>` that applies persisted preferences
/// before first paint. Mirrors [`ClientPreferences::load`] and [`apply`].
#[must_use]
pub fn boot_script() -> String {
    format!(
        "(function(){{try{{\
var s=window.localStorage,r=document.documentElement;\
var d=s.getItem('{THEME_KEY}')==='{dark}';\
r.classList.remove('{LIGHT_CLASS}');\
if(d){{r.classList.add('{DARK_CLASS}')}}else{{r.classList.remove('{DARK_CLASS}')}}\
r.style.colorScheme=d?'{dark}':'{light}';\
var l=[s.getItem('{LOCALE_KEY}'),s.getItem('{LEGACY_LOCALE_KEY}')]\
.filter(function(v){{return v&&v.trim()}})[0]||'{es}';\
r.lang=l.trim().toLowerCase().split(/[-_]/)[0]==='{en}'?'{en}':'{es}';\
}}catch(e){{}}}})();",
        dark = Theme::Dark.as_str(),
        light = Theme::Light.as_str(),
        es = Locale::Es.as_str(),
        en = Locale::En.as_str(),
    )
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
