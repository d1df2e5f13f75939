//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the coordinator's state into a signal so route guards and
//! user-aware components can react to it. The coordinator itself is provided
//! separately through context as [`Coordinator`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::redirect::guard_target;
use session::{AuthPhase, Profile, Redirect, SessionCoordinator, SessionState, SupabaseClient};

/// Coordinator type the browser client runs with.
pub type Coordinator = SessionCoordinator<SupabaseClient, SupabaseClient>;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: SessionState,
    /// Set when no backend could be configured; the login page shows it.
    pub config_error: Option<String>,
}

impl AuthState {
    /// Settled, signed-out state used when the backend is unavailable.
    pub fn misconfigured(reason: String) -> Self {
        Self {
            session: SessionState { phase: AuthPhase::Unauthenticated, is_loading: false },
            config_error: Some(reason),
        }
    }

    pub fn user(&self) -> Option<&Profile> {
        self.session.current_user()
    }

    pub fn loading(&self) -> bool {
        self.session.is_loading
    }

    /// Where a page at `path` should send the user, if anywhere.
    pub fn guard(&self, path: &str) -> Option<Redirect> {
        guard_target(&self.session, path)
    }
}
