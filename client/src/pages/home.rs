//! Public landing page; signed-in visitors are sent to the dashboard.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;
use crate::util::auth::install_route_guard;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth);

    view! {
        <div class="home-page">
            <h1>"Workspace"</h1>
            <p>"Projects, people and payments in one place."</p>
            <A href="/login">"Sign in"</A>
        </div>
    }
}
