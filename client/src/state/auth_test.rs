use super::*;

fn user() -> Profile {
    Profile {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        full_name: "Alice".to_owned(),
        avatar_url: None,
        role: None,
    }
}

#[test]
fn default_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading());
    assert!(state.user().is_none());
    assert_eq!(state.guard("/dashboard"), None);
}

#[test]
fn misconfigured_is_settled_and_signed_out() {
    let state = AuthState::misconfigured("SUPABASE_URL is not set".to_owned());
    assert!(!state.loading());
    assert_eq!(state.config_error.as_deref(), Some("SUPABASE_URL is not set"));
    assert_eq!(state.guard("/dashboard"), Some(Redirect::Login));
    assert_eq!(state.guard("/login"), None);
}

#[test]
fn authenticated_user_leaves_login() {
    let state = AuthState {
        session: SessionState { phase: AuthPhase::Authenticated(user()), is_loading: false },
        config_error: None,
    };
    assert_eq!(state.user().map(|u| u.id.as_str()), Some("u1"));
    assert_eq!(state.guard("/login"), Some(Redirect::Dashboard));
    assert_eq!(state.guard("/dashboard"), None);
}
