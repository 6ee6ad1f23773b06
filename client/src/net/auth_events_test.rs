use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn signed_out() -> AuthChange {
    AuthChange { event: AuthEvent::SignedOut, session: None }
}

fn counter(events: &AuthEvents) -> (Arc<AtomicUsize>, Subscription) {
    let hits = Arc::new(AtomicUsize::new(0));
    let seen = hits.clone();
    let sub = events.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    (hits, sub)
}

#[test]
fn emit_reaches_every_listener() {
    let events = AuthEvents::new();
    let (a, _sub_a) = counter(&events);
    let (b, _sub_b) = counter(&events);

    events.emit(&signed_out());

    assert_eq!(a.load(Ordering::SeqCst), 1);
    assert_eq!(b.load(Ordering::SeqCst), 1);
}

#[test]
fn dropping_subscription_unsubscribes() {
    let events = AuthEvents::new();
    let (hits, sub) = counter(&events);
    assert_eq!(events.listener_count(), 1);

    drop(sub);
    events.emit(&signed_out());

    assert_eq!(events.listener_count(), 0);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn unsubscribe_removes_only_its_own_handler() {
    let events = AuthEvents::new();
    let (first, sub_first) = counter(&events);
    let (second, _sub_second) = counter(&events);

    sub_first.unsubscribe();
    events.emit(&signed_out());

    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[test]
fn clones_share_one_registry() {
    let events = AuthEvents::new();
    let (hits, _sub) = counter(&events.clone());

    events.clone().emit(&signed_out());

    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn subscription_outliving_hub_drops_cleanly() {
    let events = AuthEvents::new();
    let (_, sub) = counter(&events);
    drop(events);
    drop(sub);
}

#[test]
fn handler_may_subscribe_during_emit() {
    let events = AuthEvents::new();
    let hub = events.clone();
    let spawned = Arc::new(Mutex::new(Vec::new()));
    let sink = spawned.clone();
    let _sub = events.subscribe(move |_| {
        let sub = hub.subscribe(|_| {});
        sink.lock().unwrap().push(sub);
    });

    events.emit(&signed_out());

    assert_eq!(events.listener_count(), 2);
}

#[test]
fn change_carries_session() {
    let events = AuthEvents::new();
    let received = Arc::new(Mutex::new(None));
    let sink = received.clone();
    let _sub = events.subscribe(move |change| {
        *sink.lock().unwrap() = Some(change.clone());
    });
    let change = AuthChange {
        event: AuthEvent::SignedIn,
        session: Some(Session {
            user: access::SessionUser { id: "u-1".into(), email: None, full_name: None },
            expires_at: Some(1),
        }),
    };

    events.emit(&change);

    assert_eq!(received.lock().unwrap().as_ref(), Some(&change));
}
