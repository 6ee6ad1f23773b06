//! In-memory [`PreferenceStore`] and [`DocumentRoot`] implementations.
//!
//! Used by tests on both sides and by non-browser builds that still want to
//! exercise the reconciliation rules.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{DocumentRoot, PreferenceStore, Theme};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Map-backed preference store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `(key, value)` pairs.
    #[must_use]
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store.set(key, value);
        }
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.entries).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        lock(&self.entries).insert(key.to_owned(), value.to_owned());
    }
}

/// Observable document-root state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub classes: BTreeSet<String>,
    pub color_scheme: Option<String>,
    pub lang: Option<String>,
}

/// Document root double with a simulated OS color-scheme preference.
///
/// The OS preference only shows through while `color-scheme` is unset or
/// left automatic (`"light dark"`), matching browser behavior.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    state: Mutex<DocumentSnapshot>,
    os_theme: Theme,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document as an OS-driven script would leave it: the OS theme's class
    /// marker set and `color-scheme` automatic.
    #[must_use]
    pub fn with_os_theme(os_theme: Theme) -> Self {
        let mut classes = BTreeSet::new();
        classes.insert(os_theme.as_str().to_owned());
        Self {
            state: Mutex::new(DocumentSnapshot {
                classes,
                color_scheme: Some("light dark".to_owned()),
                lang: None,
            }),
            os_theme,
        }
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        lock(&self.state).classes.contains(class)
    }

    #[must_use]
    pub fn color_scheme(&self) -> Option<String> {
        lock(&self.state).color_scheme.clone()
    }

    #[must_use]
    pub fn lang(&self) -> Option<String> {
        lock(&self.state).lang.clone()
    }

    /// Theme the browser would actually render the UA-level scheme with.
    #[must_use]
    pub fn effective_theme(&self) -> Theme {
        match lock(&self.state).color_scheme.as_deref() {
            Some("dark") => Theme::Dark,
            Some("light") => Theme::Light,
            _ => self.os_theme,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> DocumentSnapshot {
        lock(&self.state).clone()
    }
}

impl DocumentRoot for MemoryDocument {
    fn set_class(&self, class: &str, present: bool) {
        let mut state = lock(&self.state);
        if present {
            state.classes.insert(class.to_owned());
        } else {
            state.classes.remove(class);
        }
    }

    fn set_color_scheme(&self, scheme: &str) {
        lock(&self.state).color_scheme = Some(scheme.to_owned());
    }

    fn set_lang(&self, lang: &str) {
        lock(&self.state).lang = Some(lang.to_owned());
    }
}
