//! Login page with email/password sign-in and sign-up.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page only validates input and calls the coordinator. Outcomes reach
//! the user as toasts, and the session redirect moves a signed-in user on to
//! the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::auth::{AuthState, Coordinator};
use crate::util::auth::install_route_guard;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FormMode {
    SignIn,
    SignUp,
}

fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn validate_sign_up_input(
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<(String, String, String), &'static str> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err("Enter your full name.");
    }
    let (email, password) = validate_sign_in_input(email, password)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok((email, password, full_name.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let coordinator = use_context::<Coordinator>();
    install_route_guard(auth);

    let mode = RwSignal::new(FormMode::SignIn);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(coordinator) = coordinator.clone() else {
            info.set("Sign-in is unavailable right now.".to_owned());
            return;
        };
        info.set(String::new());
        match mode.get() {
            FormMode::SignIn => match validate_sign_in_input(&email.get(), &password.get()) {
                Ok((email_value, password_value)) => {
                    busy.set(true);
                    leptos::task::spawn_local(async move {
                        // Failures arrive as toasts.
                        let _ = coordinator.sign_in(&email_value, &password_value).await;
                        busy.set(false);
                    });
                }
                Err(msg) => info.set(msg.to_owned()),
            },
            FormMode::SignUp => match validate_sign_up_input(&email.get(), &password.get(), &full_name.get()) {
                Ok((email_value, password_value, name_value)) => {
                    busy.set(true);
                    leptos::task::spawn_local(async move {
                        if let Ok(None) = coordinator.sign_up(&email_value, &password_value, &name_value).await {
                            mode.set(FormMode::SignIn);
                            password.set(String::new());
                        }
                        busy.set(false);
                    });
                }
                Err(msg) => info.set(msg.to_owned()),
            },
        }
    };

    let toggle_mode = move |_| {
        info.set(String::new());
        mode.update(|m| {
            *m = match m {
                FormMode::SignIn => FormMode::SignUp,
                FormMode::SignUp => FormMode::SignIn,
            };
        });
    };

    let disabled = move || busy.get() || auth.with(|s| s.loading() || s.config_error.is_some());

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome"</h1>
                <p class="login-card__subtitle">
                    {move || match mode.get() {
                        FormMode::SignIn => "Sign in to your account",
                        FormMode::SignUp => "Create an account",
                    }}
                </p>
                <Show when=move || auth.with(|s| s.config_error.is_some())>
                    <p class="login-message login-message--error">
                        {move || auth.with(|s| s.config_error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || mode.get() == FormMode::SignUp>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Full name"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=disabled>
                        {move || match (mode.get(), busy.get()) {
                            (FormMode::SignIn, false) => "Sign in",
                            (FormMode::SignIn, true) => "Signing in...",
                            (FormMode::SignUp, false) => "Sign up",
                            (FormMode::SignUp, true) => "Creating account...",
                        }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <button class="login-link" type="button" on:click=toggle_mode>
                    {move || match mode.get() {
                        FormMode::SignIn => "Need an account? Sign up",
                        FormMode::SignUp => "Already have an account? Sign in",
                    }}
                </button>
            </div>
        </div>
    }
}
