use super::*;

#[test]
fn login_requires_email_and_password() {
    assert_eq!(
        validate_credentials(AuthMode::Login, "", "", ""),
        Err(ApiError::MissingFields(vec!["email", "password"]))
    );
    assert_eq!(
        validate_credentials(AuthMode::Login, "", "a@x.com", ""),
        Err(ApiError::MissingFields(vec!["password"]))
    );
}

#[test]
fn login_ignores_name() {
    let creds = validate_credentials(AuthMode::Login, "", " a@x.com ", "secret1").unwrap();
    assert_eq!(creds.email, "a@x.com");
    assert_eq!(creds.password, "secret1");
    assert_eq!(creds.name, "");
}

#[test]
fn register_requires_name() {
    assert_eq!(
        validate_credentials(AuthMode::Register, "   ", "a@x.com", "secret1"),
        Err(ApiError::MissingFields(vec!["name"]))
    );
}

#[test]
fn register_trims_name_and_email_but_not_password() {
    let creds = validate_credentials(AuthMode::Register, " Alice ", " a@x.com", " pass word ").unwrap();
    assert_eq!(
        creds,
        Credentials { name: "Alice".to_owned(), email: "a@x.com".to_owned(), password: " pass word ".to_owned() }
    );
}

#[test]
fn whitespace_email_counts_as_missing() {
    assert_eq!(
        validate_credentials(AuthMode::Login, "", "  ", "secret1"),
        Err(ApiError::MissingFields(vec!["email"]))
    );
}

#[test]
fn mode_toggle_and_failure_labels() {
    assert_eq!(AuthMode::Login.toggled(), AuthMode::Register);
    assert_eq!(AuthMode::Register.toggled(), AuthMode::Login);
    assert_eq!(AuthMode::Login.failure_action(), "Login failed");
    assert_eq!(AuthMode::Register.failure_action(), "Registration failed");
}
