//! Root component: wires the session coordinator into the Leptos app.
//!
//! SYSTEM CONTEXT
//! ==============
//! One coordinator lives for the lifetime of the root component. It is built
//! from build-time configuration, started on mount and disposed on cleanup.
//! Its updates are bridged into two context signals: `RwSignal<AuthState>`
//! for route guards and pages, `RwSignal<ToastState>` for notices.
//!
//! ERROR HANDLING
//! ==============
//! Missing configuration does not stop the app from rendering: the auth
//! state settles as signed out and the login page shows the reason.

use std::sync::Arc;

use futures::StreamExt;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use session::{ConfigError, Notice, SessionCoordinator, SessionUpdate, SupabaseClient, SupabaseConfig};

use crate::components::toast_stack::ToastStack;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::state::auth::{AuthState, Coordinator};
use crate::state::toasts::ToastState;
use crate::util::auth::install_session_redirects;
use crate::util::storage::LocalStorageTokenStore;

#[cfg(feature = "csr")]
const TOAST_TTL: std::time::Duration = std::time::Duration::from_secs(5);

fn build_coordinator() -> Result<Coordinator, ConfigError> {
    let config = SupabaseConfig::from_build_env()?;
    let client = Arc::new(SupabaseClient::with_token_store(config, Box::new(LocalStorageTokenStore::new()))?);
    Ok(SessionCoordinator::new(Arc::clone(&client), client))
}

fn push_toast(toasts: RwSignal<ToastState>, notice: Notice) {
    let mut id = 0;
    toasts.update(|t| id = t.push(notice));
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_TTL).await;
        let _ = toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = id;
}

/// Start the coordinator and mirror its updates into the context signals.
fn bridge(coordinator: &Coordinator, auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>) {
    auth.update(|s| s.session = coordinator.state());
    let mut updates = coordinator.subscribe();

    match coordinator.start() {
        Ok(driver) => leptos::task::spawn_local(driver),
        Err(err) => leptos::logging::error!("session coordinator failed to start: {err}"),
    }

    leptos::task::spawn_local(async move {
        while let Some(update) = updates.next().await {
            match update {
                SessionUpdate::Changed { current, .. } => {
                    let _ = auth.try_update(|s| s.session = current);
                }
                SessionUpdate::Notice(notice) => push_toast(toasts, notice),
            }
        }
    });

    let coordinator = coordinator.clone();
    on_cleanup(move || coordinator.dispose());
}

#[component]
fn SessionRedirects() -> impl IntoView {
    install_session_redirects(expect_context::<RwSignal<AuthState>>());
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    match build_coordinator() {
        Ok(coordinator) => {
            bridge(&coordinator, auth, toasts);
            provide_context(coordinator);
        }
        Err(err) => {
            leptos::logging::error!("session backend unavailable: {err}");
            auth.set(AuthState::misconfigured(err.to_string()));
        }
    }

    view! {
        <Title text="Workspace"/>
        <Router>
            <SessionRedirects/>
            <main>
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                </Routes>
            </main>
            <ToastStack/>
        </Router>
    }
}
