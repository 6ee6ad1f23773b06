//! Per-mount session gate controller for dashboard pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard layout mounts one gate. The gate moves to `Loading`,
//! subscribes to auth-state changes, and waits for the session query's answer
//! through a [`GateResolver`]. Every state change is handed to a `publish`
//! callback (the layout's signal). A `SIGNED_OUT` notification navigates to
//! the login page exactly once.
//!
//! LIFECYCLE
//! =========
//! Unmounting (or dropping) the gate marks it dead and drops its
//! [`Subscription`]. A query answer that arrives later is discarded, and a
//! remount starts a fresh gate with a fresh subscription, so sequential mounts
//! never stack listeners.
//!
//! EXPIRY
//! ======
//! [`watch_session`] drives a mount's whole session lifecycle: the initial
//! query, then a re-check after each reported expiry through
//! [`AuthClient::recheck_session`]. The re-check publishes on the shared hub,
//! so a lapsed session reaches the gate as `SIGNED_OUT` like any other. The
//! loop ends when the gate unmounts or stops being `Authenticated`.

#[cfg(test)]
#[path = "session_gate_test.rs"]
mod session_gate_test;

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use access::{LOGIN_PATH, Session};

use crate::net::api::AuthError;
use crate::net::auth_client::AuthClient;
use crate::net::auth_events::{AuthEvents, Subscription};
use crate::state::auth::{AuthState, GateEffect};

/// Where a departed gate sends the browser.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

type Publish = Box<dyn Fn(&AuthState) + Send + Sync>;

struct Shared {
    state: Mutex<AuthState>,
    alive: AtomicBool,
    navigator: Arc<dyn Navigator>,
    publish: Publish,
}

impl Shared {
    fn update(&self, transition: impl FnOnce(AuthState) -> (AuthState, GateEffect)) {
        if !self.alive.load(Ordering::SeqCst) {
            return;
        }
        let (next, effect) = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            let (next, effect) = transition(state.clone());
            if *state == next && effect == GateEffect::None {
                return;
            }
            *state = next.clone();
            (next, effect)
        };
        (self.publish)(&next);
        if effect == GateEffect::GoToLogin {
            self.navigator.navigate(LOGIN_PATH);
        }
    }
}

/// One mounted gate. Dropping it is the same as [`SessionGate::unmount`].
pub struct SessionGate {
    shared: Arc<Shared>,
    subscription: Option<Subscription>,
}

impl SessionGate {
    /// Enter `Loading` and start listening on `events`.
    pub fn mount<F>(events: &AuthEvents, navigator: Arc<dyn Navigator>, publish: F) -> Self
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        let shared = Arc::new(Shared {
            state: Mutex::new(AuthState::default()),
            alive: AtomicBool::new(true),
            navigator,
            publish: Box::new(publish),
        });
        shared.update(|state| (state.mounted(), GateEffect::None));

        let listener = shared.clone();
        let subscription = events.subscribe(move |change| {
            listener.update(|state| state.on_event(change.event, change.session.clone()));
        });

        Self { shared, subscription: Some(subscription) }
    }

    /// Handle for delivering the session query's answer from an async task.
    #[must_use]
    pub fn resolver(&self) -> GateResolver {
        GateResolver { shared: self.shared.clone() }
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        self.shared.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Stop reacting: later answers are discarded and the listener is released.
    pub fn unmount(self) {}
}

impl Drop for SessionGate {
    fn drop(&mut self) {
        self.shared.alive.store(false, Ordering::SeqCst);
        self.subscription.take();
    }
}

/// Delivers the initial session query's answer to its gate, if still mounted.
#[derive(Clone)]
pub struct GateResolver {
    shared: Arc<Shared>,
}

impl GateResolver {
    /// A query error reads as "no session".
    ///
    /// Returns the session's expiry when this answer left the gate
    /// authenticated, i.e. when there is something to re-check later.
    pub fn resolve(&self, result: Result<Option<Session>, AuthError>) -> Option<i64> {
        let session = match result {
            Ok(session) => session,
            Err(e) => {
                #[cfg(feature = "hydrate")]
                log::warn!("session query failed: {e}");
                #[cfg(not(feature = "hydrate"))]
                let _ = e;
                None
            }
        };
        let expires_at = session.as_ref().and_then(|s| s.expires_at);
        self.shared.update(|state| (state.resolved(session), GateEffect::None));
        expires_at.filter(|_| self.is_watching())
    }

    /// Still mounted and showing an authenticated session.
    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.shared.alive.load(Ordering::SeqCst)
            && self.shared.state.lock().unwrap_or_else(PoisonError::into_inner).is_authenticated()
    }
}

/// Wait past expiry before re-checking, so the server sees a lapsed token.
pub const EXPIRY_GRACE_SECS: i64 = 5;
/// Floor between re-checks; a session reported as already expired cannot spin.
pub const MIN_RECHECK_SECS: i64 = 5;
/// Ceiling on a single wait; browser timers overflow past ~24 days.
pub const MAX_RECHECK_SECS: i64 = 24 * 60 * 60;

/// How long to wait before re-checking a session expiring at `expires_at`
/// (unix seconds), given the current time `now`.
#[must_use]
pub fn recheck_delay(expires_at: i64, now: i64) -> Duration {
    let secs = expires_at
        .saturating_sub(now)
        .saturating_add(EXPIRY_GRACE_SECS)
        .clamp(MIN_RECHECK_SECS, MAX_RECHECK_SECS);
    Duration::from_secs(secs.unsigned_abs())
}

/// Resolve the gate from `client`, then re-check at every reported expiry.
///
/// `now` reports unix seconds and `sleep` waits; the browser passes the wall
/// clock and a timer, tests pass fakes.
pub async fn watch_session<N, S, F>(client: &AuthClient, resolver: &GateResolver, now: N, sleep: S)
where
    N: Fn() -> i64,
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
{
    let mut expiry = resolver.resolve(client.get_session().await);
    while let Some(expires_at) = expiry {
        sleep(recheck_delay(expires_at, now())).await;
        if !resolver.is_watching() {
            return;
        }
        expiry = client.recheck_session().await.and_then(|s| s.expires_at);
    }
}
