use super::*;

#[test]
fn http_error_prefers_body_message() {
    let err = http_error(409, r#"{"message":"email already registered"}"#);
    assert_eq!(err, ApiError::Http { status: 409, message: "email already registered".to_owned() });
    assert_eq!(err.to_string(), "email already registered");
}

#[test]
fn http_error_falls_back_for_non_json_body() {
    let err = http_error(502, "<html>Bad Gateway</html>");
    assert_eq!(err.to_string(), "HTTP error: 502");
    assert_eq!(err.status(), Some(502));
}

#[test]
fn http_error_falls_back_for_empty_message() {
    assert_eq!(http_error(500, r#"{"message":""}"#).to_string(), "HTTP error: 500");
    assert_eq!(http_error(500, r#"{"message":null}"#).to_string(), "HTTP error: 500");
}

#[test]
fn missing_fields_lists_names() {
    let err = ApiError::MissingFields(vec!["email", "password"]);
    assert_eq!(err.to_string(), "required fields missing: email, password");
    assert_eq!(err.status(), None);
}

#[test]
fn session_expired_is_flagged() {
    assert!(ApiError::SessionExpired.is_session_expired());
    assert!(!ApiError::Network("offline".to_owned()).is_session_expired());
}
