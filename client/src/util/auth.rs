//! Shared auth navigation helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two effects keep the router in line with the session: one reacts to phase
//! transitions anywhere in the app, the other guards a page against being
//! shown to the wrong audience once loading settles.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use session::{AuthPhase, Redirect, redirect_target};

use crate::state::auth::AuthState;

/// Redirect for a phase change observed by the app. The first observation
/// has no previous phase and never navigates.
pub fn transition_target(previous: Option<&AuthPhase>, current: &AuthPhase, path: &str) -> Option<Redirect> {
    previous.and_then(|previous| redirect_target(previous, current, path))
}

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Navigate on sign-in / sign-out transitions. Must run inside the router.
pub fn install_session_redirects(auth: RwSignal<AuthState>) {
    let navigate = use_navigate();
    let location = use_location();
    Effect::new(move |previous: Option<AuthPhase>| {
        let current = auth.with(|s| s.session.phase.clone());
        let path = location.pathname.get_untracked();
        if let Some(target) = transition_target(previous.as_ref(), &current, &path) {
            leptos::logging::log!("session redirect {path} -> {}", target.path());
            navigate(target.path(), replace());
        }
        current
    });
}

/// Keep the current page consistent with the settled session state.
pub fn install_route_guard(auth: RwSignal<AuthState>) {
    let navigate = use_navigate();
    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        if let Some(target) = auth.with(|s| s.guard(&path)) {
            navigate(target.path(), replace());
        }
    });
}
