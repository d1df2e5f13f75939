use super::*;

#[test]
fn role_label_names_each_role() {
    assert_eq!(role_label(Some(Role::Manager)), "Manager");
    assert_eq!(role_label(Some(Role::Freelancer)), "Freelancer");
    assert_eq!(role_label(Some(Role::Finance)), "Finance");
}

#[test]
fn role_label_without_role() {
    assert_eq!(role_label(None), "No role assigned");
}
