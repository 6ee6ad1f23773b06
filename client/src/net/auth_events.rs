//! In-process auth-state-change channel.
//!
//! DESIGN
//! ======
//! Listeners register a handler and receive a [`Subscription`]. Dropping the
//! subscription removes the handler, so a mounted component that stores it in
//! `on_cleanup` cannot leak a listener across remounts.
//!
//! The registry is `Arc<Mutex<..>>` so handles can live in Leptos contexts and
//! cleanup closures, which require `Send + Sync`. Handlers run outside the
//! lock; a handler may subscribe or unsubscribe without deadlocking.

#[cfg(test)]
#[path = "auth_events_test.rs"]
mod auth_events_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use access::{AuthEvent, Session};

/// One notification: what happened plus the session after it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthChange {
    pub event: AuthEvent,
    pub session: Option<Session>,
}

type Handler = Arc<dyn Fn(&AuthChange) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Broadcast hub for [`AuthChange`] notifications. Cheap to clone.
#[derive(Clone, Default)]
pub struct AuthEvents {
    registry: Arc<Mutex<Registry>>,
}

impl AuthEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` until the returned [`Subscription`] is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&AuthChange) + Send + Sync + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, Arc::new(handler)));
        Subscription { id, registry: Arc::downgrade(&self.registry) }
    }

    /// Deliver `change` to every current listener, in subscription order.
    pub fn emit(&self, change: &AuthChange) {
        let handlers: Vec<Handler> = lock(&self.registry)
            .handlers
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(change);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        lock(&self.registry).handlers.len()
    }
}

/// Live registration on an [`AuthEvents`] hub. Unsubscribes on drop.
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Unsubscribe now. Equivalent to dropping.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).handlers.retain(|(id, _)| *id != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
