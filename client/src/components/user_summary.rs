//! Signed-in user card: avatar initial, name, email and role.

#[cfg(test)]
#[path = "user_summary_test.rs"]
mod user_summary_test;

use leptos::prelude::*;
use session::{Profile, Role};

/// Label shown under the user's name.
pub fn role_label(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Manager) => "Manager",
        Some(Role::Freelancer) => "Freelancer",
        Some(Role::Finance) => "Finance",
        None => "No role assigned",
    }
}

#[component]
pub fn UserSummary(profile: Profile) -> impl IntoView {
    let initial = profile.initial().to_string();
    let name = profile.display_name().to_owned();
    let avatar = profile.avatar_url.clone();
    let alt = name.clone();

    view! {
        <div class="user-summary">
            {match avatar {
                Some(url) => view! { <img class="user-summary__avatar" src=url alt=alt/> }.into_any(),
                None => view! { <span class="user-summary__avatar">{initial}</span> }.into_any(),
            }}
            <div class="user-summary__text">
                <p class="user-summary__name">{name}</p>
                <p class="user-summary__email">{profile.email}</p>
                <p class="user-summary__role">{role_label(profile.role)}</p>
            </div>
        </div>
    }
}
