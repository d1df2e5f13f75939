use super::*;

#[test]
fn validate_sign_in_input_trims_email() {
    assert_eq!(
        validate_sign_in_input("  user@example.com  ", "pw"),
        Ok(("user@example.com".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_sign_in_input_requires_both_fields() {
    assert_eq!(validate_sign_in_input("   ", "pw"), Err("Enter your email and password."));
    assert_eq!(validate_sign_in_input("a@b.com", ""), Err("Enter your email and password."));
}

#[test]
fn validate_sign_in_input_keeps_password_whitespace() {
    assert_eq!(
        validate_sign_in_input("a@b.com", " pw "),
        Ok(("a@b.com".to_owned(), " pw ".to_owned()))
    );
}

#[test]
fn validate_sign_up_input_requires_name() {
    assert_eq!(validate_sign_up_input("a@b.com", "secret1", "  "), Err("Enter your full name."));
}

#[test]
fn validate_sign_up_input_requires_password_length() {
    assert_eq!(
        validate_sign_up_input("a@b.com", "short", "Ada"),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn validate_sign_up_input_trims_name_and_email() {
    assert_eq!(
        validate_sign_up_input(" a@b.com ", "secret1", " Ada Lovelace "),
        Ok(("a@b.com".to_owned(), "secret1".to_owned(), "Ada Lovelace".to_owned()))
    );
}
