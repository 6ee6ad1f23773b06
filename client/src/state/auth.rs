//! Session-gate state for a mounted dashboard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server's access guard already decided whether this page may render.
//! This state only drives what the dashboard layout shows while the client
//! re-reads the session for display: a loading placeholder, the protected
//! content, or nothing.
//!
//! Transitions are pure functions so the gate controller and tests share them.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use access::{AuthEvent, Session, SessionUser};

/// Lifecycle of one mounted gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GatePhase {
    /// Constructed, not yet mounted.
    #[default]
    Initializing,
    /// Session query in flight.
    Loading,
    Authenticated,
    /// No session found. Terminal for this mount: no retry.
    Unauthenticated,
    /// Signed out while mounted; navigation to the login page was issued.
    Departed,
}

/// What a dashboard page knows about the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub phase: GatePhase,
    pub user: Option<SessionUser>,
}

/// Side effect a transition asks the caller to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateEffect {
    None,
    /// Navigate to the login page.
    GoToLogin,
}

impl AuthState {
    /// Whether protected content may render.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase == GatePhase::Authenticated
    }

    /// Whether the loading placeholder should render.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, GatePhase::Initializing | GatePhase::Loading)
    }

    /// `Initializing -> Loading`. Any other phase is left alone.
    #[must_use]
    pub fn mounted(self) -> Self {
        match self.phase {
            GatePhase::Initializing => Self { phase: GatePhase::Loading, ..self },
            _ => self,
        }
    }

    /// Apply the answer to the initial session query.
    ///
    /// Only a `Loading` gate takes the answer; a notification may already have
    /// settled the phase, and that newer information wins.
    #[must_use]
    pub fn resolved(self, session: Option<Session>) -> Self {
        if self.phase != GatePhase::Loading {
            return self;
        }
        match session {
            Some(session) => Self { phase: GatePhase::Authenticated, user: Some(session.user) },
            None => Self { phase: GatePhase::Unauthenticated, user: None },
        }
    }

    /// Apply an auth-state-change notification.
    #[must_use]
    pub fn on_event(self, event: AuthEvent, session: Option<Session>) -> (Self, GateEffect) {
        if self.phase == GatePhase::Departed {
            return (self, GateEffect::None);
        }
        match event {
            AuthEvent::SignedOut => (Self { phase: GatePhase::Departed, user: None }, GateEffect::GoToLogin),
            AuthEvent::SignedIn => {
                let user = session.map(|s| s.user).or(self.user);
                (Self { phase: GatePhase::Authenticated, user }, GateEffect::None)
            }
            AuthEvent::TokenRefreshed | AuthEvent::UserUpdated if self.is_authenticated() => {
                let user = session.map(|s| s.user).or(self.user);
                (Self { user, ..self }, GateEffect::None)
            }
            _ => (self, GateEffect::None),
        }
    }
}
