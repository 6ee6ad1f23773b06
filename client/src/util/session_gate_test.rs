use futures::executor::block_on;
use futures::future::{Ready, ready};

use super::*;
use crate::net::auth_events::AuthChange;
use crate::net::transport::test_helpers::{MockTransport, session as expiring};
use crate::state::auth::GatePhase;
use access::{AuthEvent, SessionUser};

#[derive(Default)]
struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_owned());
    }
}

struct Harness {
    events: AuthEvents,
    navigator: Arc<RecordingNavigator>,
    published: Arc<Mutex<Vec<AuthState>>>,
}

impl Harness {
    fn new() -> Self {
        Self {
            events: AuthEvents::new(),
            navigator: Arc::new(RecordingNavigator::default()),
            published: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn mount(&self) -> SessionGate {
        let sink = self.published.clone();
        SessionGate::mount(&self.events, self.navigator.clone(), move |state| {
            sink.lock().unwrap().push(state.clone());
        })
    }

    fn client(&self, transport: Arc<MockTransport>) -> AuthClient {
        AuthClient::new(self.events.clone(), transport)
    }

    fn emit(&self, event: AuthEvent, session: Option<Session>) {
        self.events.emit(&AuthChange { event, session });
    }

    fn phases(&self) -> Vec<GatePhase> {
        self.published.lock().unwrap().iter().map(|s| s.phase).collect()
    }
}

fn session() -> Session {
    Session {
        user: SessionUser { id: "u-1".into(), email: Some("ana@example.com".into()), full_name: None },
        expires_at: None,
    }
}

// =============================================================================
// resolution
// =============================================================================

#[test]
fn mount_publishes_loading_and_subscribes() {
    let h = Harness::new();
    let gate = h.mount();

    assert_eq!(gate.state().phase, GatePhase::Loading);
    assert_eq!(h.phases(), vec![GatePhase::Loading]);
    assert_eq!(h.events.listener_count(), 1);
}

#[test]
fn session_answer_authenticates() {
    let h = Harness::new();
    let gate = h.mount();

    gate.resolver().resolve(Ok(Some(session())));

    assert!(gate.state().is_authenticated());
    assert_eq!(h.phases(), vec![GatePhase::Loading, GatePhase::Authenticated]);
    assert!(h.navigator.paths().is_empty());
}

#[test]
fn missing_session_renders_nothing_without_navigating() {
    let h = Harness::new();
    let gate = h.mount();

    gate.resolver().resolve(Ok(None));

    assert_eq!(gate.state().phase, GatePhase::Unauthenticated);
    assert!(h.navigator.paths().is_empty());
}

#[test]
fn query_error_reads_as_no_session() {
    let h = Harness::new();
    let gate = h.mount();

    gate.resolver().resolve(Err(AuthError::Network("offline".into())));

    assert_eq!(gate.state().phase, GatePhase::Unauthenticated);
}

// =============================================================================
// notifications
// =============================================================================

#[test]
fn signed_out_navigates_to_login_exactly_once() {
    let h = Harness::new();
    let gate = h.mount();
    gate.resolver().resolve(Ok(Some(session())));

    h.emit(AuthEvent::SignedOut, None);
    h.emit(AuthEvent::SignedOut, None);

    assert_eq!(h.navigator.paths(), vec![LOGIN_PATH.to_owned()]);
    assert_eq!(gate.state().phase, GatePhase::Departed);
}

#[test]
fn signed_in_while_loading_authenticates_and_wins_over_late_answer() {
    let h = Harness::new();
    let gate = h.mount();

    h.emit(AuthEvent::SignedIn, Some(session()));
    gate.resolver().resolve(Ok(None));

    assert!(gate.state().is_authenticated());
}

#[test]
fn repeated_notifications_publish_once() {
    let h = Harness::new();
    let gate = h.mount();
    gate.resolver().resolve(Ok(Some(session())));

    h.emit(AuthEvent::TokenRefreshed, Some(session()));

    assert_eq!(h.phases(), vec![GatePhase::Loading, GatePhase::Authenticated]);
    drop(gate);
}

// =============================================================================
// lifecycle
// =============================================================================

#[test]
fn unmount_while_pending_discards_answer_and_releases_listener() {
    let h = Harness::new();
    let gate = h.mount();
    let resolver = gate.resolver();

    gate.unmount();
    resolver.resolve(Ok(Some(session())));

    assert_eq!(h.phases(), vec![GatePhase::Loading]);
    assert_eq!(h.events.listener_count(), 0);
}

#[test]
fn unmounted_gate_ignores_sign_out() {
    let h = Harness::new();
    let gate = h.mount();
    gate.unmount();

    h.emit(AuthEvent::SignedOut, None);

    assert!(h.navigator.paths().is_empty());
}

#[test]
fn sequential_remounts_redirect_once_per_sign_out() {
    let h = Harness::new();

    let first = h.mount();
    first.resolver().resolve(Ok(Some(session())));
    first.unmount();

    let second = h.mount();
    second.resolver().resolve(Ok(Some(session())));
    assert_eq!(h.events.listener_count(), 1);

    h.emit(AuthEvent::SignedOut, None);

    assert_eq!(h.navigator.paths(), vec![LOGIN_PATH.to_owned()]);
    drop(second);
}

#[test]
fn successful_sign_out_navigates_mounted_gate_once() {
    let h = Harness::new();
    let transport = MockTransport::with_session(session());
    let client = h.client(transport);
    let gate = h.mount();
    gate.resolver().resolve(block_on(client.get_session()));

    block_on(client.sign_out()).expect("sign out");

    assert_eq!(h.navigator.paths(), vec![LOGIN_PATH.to_owned()]);
    assert_eq!(gate.state().phase, GatePhase::Departed);
}

#[test]
fn sign_out_after_remount_reaches_only_the_live_gate() {
    let h = Harness::new();
    let client = h.client(MockTransport::with_session(session()));

    let first = h.mount();
    first.resolver().resolve(block_on(client.get_session()));
    first.unmount();
    let second = h.mount();
    second.resolver().resolve(block_on(client.get_session()));

    block_on(client.sign_out()).expect("sign out");

    assert_eq!(h.navigator.paths(), vec![LOGIN_PATH.to_owned()]);
    drop(second);
}

// =============================================================================
// expiry
// =============================================================================

#[test]
fn resolve_reports_expiry_only_when_authenticated() {
    let h = Harness::new();

    let gate = h.mount();
    assert_eq!(gate.resolver().resolve(Ok(Some(expiring(Some(42))))), Some(42));

    let anonymous = h.mount();
    assert_eq!(anonymous.resolver().resolve(Ok(None)), None);

    let without_expiry = h.mount();
    assert_eq!(without_expiry.resolver().resolve(Ok(Some(expiring(None)))), None);

    let unmounted = h.mount();
    let resolver = unmounted.resolver();
    unmounted.unmount();
    assert_eq!(resolver.resolve(Ok(Some(expiring(Some(42))))), None);
}

#[test]
fn recheck_waits_until_just_past_expiry() {
    assert_eq!(recheck_delay(1_000, 900), Duration::from_secs(100 + EXPIRY_GRACE_SECS.unsigned_abs()));
}

#[test]
fn recheck_of_lapsed_session_waits_the_minimum() {
    assert_eq!(recheck_delay(0, 1_700_000_000), Duration::from_secs(MIN_RECHECK_SECS.unsigned_abs()));
}

#[test]
fn recheck_of_distant_expiry_is_capped() {
    assert_eq!(recheck_delay(i64::MAX, 0), Duration::from_secs(MAX_RECHECK_SECS.unsigned_abs()));
}

#[test]
fn lapsed_session_signs_out_and_navigates_once() {
    let h = Harness::new();
    let transport = MockTransport::with_session(expiring(Some(0)));
    let client = h.client(transport.clone());
    let gate = h.mount();

    // The session lapses server-side while the gate waits.
    let sleep = |_: Duration| -> Ready<()> {
        transport.set_session(None);
        ready(())
    };
    block_on(watch_session(&client, &gate.resolver(), || 1_700_000_000, sleep));

    assert_eq!(h.navigator.paths(), vec![LOGIN_PATH.to_owned()]);
    assert_eq!(gate.state().phase, GatePhase::Departed);
    assert_eq!(transport.calls(), vec!["fetch_session", "fetch_session"]);
}

#[test]
fn refreshed_session_stays_authenticated_and_is_watched_again() {
    let h = Harness::new();
    let transport = MockTransport::with_session(expiring(Some(1_000)));
    let client = h.client(transport.clone());
    let gate = h.mount();
    let waits = Mutex::new(Vec::new());

    let sleep = |wait: Duration| -> Ready<()> {
        let mut waits = waits.lock().unwrap();
        waits.push(wait);
        // First wake-up finds a rotated session, the second finds none.
        transport.set_session((waits.len() == 1).then(|| expiring(Some(5_000))));
        ready(())
    };
    block_on(watch_session(&client, &gate.resolver(), || 900, sleep));

    assert_eq!(*waits.lock().unwrap(), vec![recheck_delay(1_000, 900), recheck_delay(5_000, 900)]);
    assert_eq!(h.phases(), vec![GatePhase::Loading, GatePhase::Authenticated, GatePhase::Departed]);
    assert_eq!(h.navigator.paths(), vec![LOGIN_PATH.to_owned()]);
}

#[test]
fn session_without_expiry_is_not_rechecked() {
    let h = Harness::new();
    let transport = MockTransport::with_session(expiring(None));
    let client = h.client(transport.clone());
    let gate = h.mount();

    let sleep = |_: Duration| -> Ready<()> { panic!("nothing to wait for") };
    block_on(watch_session(&client, &gate.resolver(), || 0, sleep));

    assert!(gate.state().is_authenticated());
    assert_eq!(transport.calls(), vec!["fetch_session"]);
}

#[test]
fn unmount_while_waiting_skips_the_recheck() {
    let h = Harness::new();
    let transport = MockTransport::with_session(expiring(Some(0)));
    let client = h.client(transport.clone());
    let slot = Mutex::new(Some(h.mount()));
    let resolver = slot.lock().unwrap().as_ref().expect("mounted").resolver();

    let sleep = |_: Duration| -> Ready<()> {
        if let Some(gate) = slot.lock().unwrap().take() {
            gate.unmount();
        }
        transport.set_session(None);
        ready(())
    };
    block_on(watch_session(&client, &resolver, || 1_700_000_000, sleep));

    assert_eq!(transport.calls(), vec!["fetch_session"]);
    assert!(h.navigator.paths().is_empty());
    assert_eq!(h.events.listener_count(), 0);
}

#[test]
fn sign_out_while_waiting_ends_the_watch() {
    let h = Harness::new();
    let transport = MockTransport::with_session(expiring(Some(0)));
    let client = h.client(transport.clone());
    let gate = h.mount();

    let sleep = |_: Duration| -> Ready<()> {
        h.emit(AuthEvent::SignedOut, None);
        ready(())
    };
    block_on(watch_session(&client, &gate.resolver(), || 1_700_000_000, sleep));

    assert_eq!(transport.calls(), vec!["fetch_session"]);
    assert_eq!(h.navigator.paths(), vec![LOGIN_PATH.to_owned()]);
}
