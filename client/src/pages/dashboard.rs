//! Dashboard page for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It shows the current profile and
//! offers sign-out; the route guard sends signed-out visitors to `/login`.

use leptos::prelude::*;

use crate::components::user_summary::UserSummary;
use crate::state::auth::{AuthState, Coordinator};
use crate::util::auth::install_route_guard;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let coordinator = use_context::<Coordinator>();
    install_route_guard(auth);

    let busy = RwSignal::new(false);
    let on_sign_out = move |_| {
        if busy.get() {
            return;
        }
        let Some(coordinator) = coordinator.clone() else {
            return;
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            coordinator.sign_out().await;
            busy.set(false);
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"Dashboard"</h1>
                <button
                    class="dashboard-signout"
                    on:click=on_sign_out
                    disabled=move || busy.get() || auth.with(AuthState::loading)
                >
                    "Sign out"
                </button>
            </header>
            {move || match auth.with(|s| s.user().cloned()) {
                Some(profile) => view! { <UserSummary profile=profile/> }.into_any(),
                None => view! { <p class="dashboard-loading">"Loading..."</p> }.into_any(),
            }}
        </div>
    }
}
