use super::*;

fn session(name: &str) -> Session {
    Session {
        user: SessionUser { id: format!("id-{name}"), email: Some(format!("{name}@example.com")), full_name: None },
        expires_at: None,
    }
}

fn loading() -> AuthState {
    AuthState::default().mounted()
}

fn authenticated() -> AuthState {
    loading().resolved(Some(session("ana")))
}

#[test]
fn default_is_initializing_and_shows_loading() {
    let state = AuthState::default();
    assert_eq!(state.phase, GatePhase::Initializing);
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
}

#[test]
fn mount_moves_to_loading_once() {
    let state = loading();
    assert_eq!(state.phase, GatePhase::Loading);
    assert_eq!(authenticated().mounted().phase, GatePhase::Authenticated);
}

#[test]
fn session_resolves_to_authenticated() {
    let state = authenticated();
    assert!(state.is_authenticated());
    assert_eq!(state.user.unwrap().id, "id-ana");
}

#[test]
fn missing_session_resolves_to_unauthenticated() {
    let state = loading().resolved(None);
    assert_eq!(state.phase, GatePhase::Unauthenticated);
    assert!(!state.is_loading());
    assert!(!state.is_authenticated());
}

#[test]
fn unauthenticated_is_terminal_for_late_answers() {
    let state = loading().resolved(None).resolved(Some(session("ana")));
    assert_eq!(state.phase, GatePhase::Unauthenticated);
}

#[test]
fn resolve_before_mount_is_ignored() {
    assert_eq!(AuthState::default().resolved(Some(session("ana"))).phase, GatePhase::Initializing);
}

#[test]
fn signed_in_notification_settles_loading_gate() {
    let (state, effect) = loading().on_event(AuthEvent::SignedIn, Some(session("luis")));
    assert_eq!(state.phase, GatePhase::Authenticated);
    assert_eq!(effect, GateEffect::None);
    // The stale query answer arriving afterwards does not overwrite it.
    let state = state.resolved(None);
    assert!(state.is_authenticated());
    assert_eq!(state.user.unwrap().id, "id-luis");
}

#[test]
fn signed_in_notification_recovers_unauthenticated_gate() {
    let (state, _) = loading().resolved(None).on_event(AuthEvent::SignedIn, Some(session("ana")));
    assert!(state.is_authenticated());
}

#[test]
fn signed_out_departs_and_requests_login() {
    let (state, effect) = authenticated().on_event(AuthEvent::SignedOut, None);
    assert_eq!(state.phase, GatePhase::Departed);
    assert!(state.user.is_none());
    assert_eq!(effect, GateEffect::GoToLogin);
}

#[test]
fn departed_ignores_every_later_event() {
    let (departed, _) = authenticated().on_event(AuthEvent::SignedOut, None);
    for event in [AuthEvent::SignedOut, AuthEvent::SignedIn, AuthEvent::TokenRefreshed] {
        let (state, effect) = departed.clone().on_event(event, Some(session("ana")));
        assert_eq!(state.phase, GatePhase::Departed, "{event:?}");
        assert_eq!(effect, GateEffect::None, "{event:?}");
    }
}

#[test]
fn user_updated_refreshes_display_identity() {
    let mut renamed = session("ana");
    renamed.user.full_name = Some("Ana María".to_owned());
    let (state, _) = authenticated().on_event(AuthEvent::UserUpdated, Some(renamed));
    assert_eq!(state.user.unwrap().display_name(), "Ana María");
}

#[test]
fn token_refresh_does_not_authenticate_a_loading_gate() {
    let (state, _) = loading().on_event(AuthEvent::TokenRefreshed, Some(session("ana")));
    assert_eq!(state.phase, GatePhase::Loading);
}

#[test]
fn password_recovery_is_ignored() {
    let (state, effect) = authenticated().on_event(AuthEvent::PasswordRecovery, None);
    assert!(state.is_authenticated());
    assert_eq!(effect, GateEffect::None);
}
