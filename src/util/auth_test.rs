use super::*;

fn user_with_role(role: Role) -> User {
    User {
        id: 1,
        name: "Alice".to_owned(),
        email: "a@x.com".to_owned(),
        role,
        is_active: true,
        created_at: 0,
    }
}

// =============================================================
// evaluate_access
// =============================================================

#[test]
fn unauthenticated_denies_regardless_of_role() {
    let admin = user_with_role(Role::Admin);
    assert_eq!(evaluate_access(false, Some(&admin), Some(Role::Admin)), AccessDecision::Unauthenticated);
    assert_eq!(evaluate_access(false, None, None), AccessDecision::Unauthenticated);
}

#[test]
fn authenticated_without_user_is_unauthenticated() {
    assert_eq!(evaluate_access(true, None, None), AccessDecision::Unauthenticated);
}

#[test]
fn wrong_role_is_insufficient() {
    let user = user_with_role(Role::User);
    assert_eq!(
        evaluate_access(true, Some(&user), Some(Role::Admin)),
        AccessDecision::InsufficientRole { required: Role::Admin, actual: Role::User }
    );
}

#[test]
fn admin_does_not_satisfy_moderator_requirement() {
    let admin = user_with_role(Role::Admin);
    assert_eq!(
        evaluate_access(true, Some(&admin), Some(Role::Moderator)),
        AccessDecision::InsufficientRole { required: Role::Moderator, actual: Role::Admin }
    );
}

#[test]
fn matching_role_is_allowed() {
    let admin = user_with_role(Role::Admin);
    assert_eq!(evaluate_access(true, Some(&admin), Some(Role::Admin)), AccessDecision::Allow);
}

#[test]
fn no_requirement_allows_any_signed_in_user() {
    let user = user_with_role(Role::User);
    assert_eq!(evaluate_access(true, Some(&user), None), AccessDecision::Allow);
}

// =============================================================
// failure_text
// =============================================================

#[test]
fn failure_text_prefixes_action() {
    let err = ApiError::Http { status: 409, message: "email taken".to_owned() };
    assert_eq!(failure_text("Registration failed", &err), Some("Registration failed: email taken".to_owned()));
}

#[test]
fn failure_text_suppresses_session_expiry() {
    assert_eq!(failure_text("Loading users failed", &ApiError::SessionExpired), None);
}
