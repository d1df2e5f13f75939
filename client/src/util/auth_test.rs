use super::*;
use session::Profile;

fn signed_in() -> AuthPhase {
    AuthPhase::Authenticated(Profile {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        full_name: "Alice".to_owned(),
        avatar_url: None,
        role: None,
    })
}

#[test]
fn first_observation_never_redirects() {
    assert_eq!(transition_target(None, &signed_in(), "/login"), None);
}

#[test]
fn sign_in_on_login_goes_to_dashboard() {
    let previous = AuthPhase::Unauthenticated;
    assert_eq!(transition_target(Some(&previous), &signed_in(), "/login"), Some(Redirect::Dashboard));
}

#[test]
fn sign_out_on_dashboard_goes_to_login() {
    let previous = signed_in();
    assert_eq!(
        transition_target(Some(&previous), &AuthPhase::Unauthenticated, "/dashboard"),
        Some(Redirect::Login)
    );
}

#[test]
fn settling_unauthenticated_on_login_stays() {
    let previous = AuthPhase::Initializing;
    assert_eq!(transition_target(Some(&previous), &AuthPhase::Unauthenticated, "/login"), None);
}
