use super::*;

fn encode_segment(json: &str) -> String {
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

fn token_with_payload(json: &str) -> String {
    format!("{}.{}.signature", encode_segment(r#"{"alg":"HS256","typ":"JWT"}"#), encode_segment(json))
}

fn token_expiring_at(exp: i64) -> String {
    token_with_payload(&format!(r#"{{"exp":{exp},"user_id":7,"email":"a@x.com","iat":1}}"#))
}

// =============================================================
// decode
// =============================================================

#[test]
fn decode_reads_claims_and_ignores_extra_fields() {
    let claims = decode(&token_expiring_at(1_900_000_000)).unwrap();
    assert_eq!(claims, TokenClaims { exp: 1_900_000_000, user_id: 7, email: "a@x.com".to_owned() });
}

#[test]
fn decode_accepts_padded_payload() {
    let token = token_expiring_at(1_900_000_000);
    let mut parts: Vec<String> = token.split('.').map(str::to_owned).collect();
    parts[1].push_str("==");
    let padded = parts.join(".");
    assert_eq!(decode(&padded).unwrap().user_id, 7);
}

#[test]
fn decode_accepts_url_safe_alphabet() {
    // "email" value chosen so the encoding contains '-' or '_' characters.
    let token = token_with_payload(r#"{"exp":1900000000,"user_id":1,"email":"??>>??@x.com"}"#);
    let payload = token.split('.').nth(1).unwrap();
    assert!(payload.contains('-') || payload.contains('_'));
    assert_eq!(decode(&token).unwrap().email, "??>>??@x.com");
}

#[test]
fn decode_rejects_empty_token() {
    assert_eq!(decode("   "), Err(TokenError::Empty));
}

#[test]
fn decode_rejects_wrong_segment_count() {
    assert_eq!(decode("only.two"), Err(TokenError::Segments(2)));
    assert_eq!(decode("a.b.c.d"), Err(TokenError::Segments(4)));
}

#[test]
fn decode_rejects_non_base64_payload() {
    assert!(matches!(decode("head.%%%.sig"), Err(TokenError::Encoding(_))));
}

#[test]
fn decode_rejects_payload_missing_claims() {
    let token = token_with_payload(r#"{"exp":1900000000}"#);
    assert!(matches!(decode(&token), Err(TokenError::Claims(_))));
}

// =============================================================
// is_expired
// =============================================================

#[test]
fn past_exp_is_expired() {
    assert!(is_expired_at(Some(&token_expiring_at(999)), 1000));
    assert!(is_expired(Some(&token_expiring_at(1))));
}

#[test]
fn future_exp_is_not_expired() {
    assert!(!is_expired_at(Some(&token_expiring_at(1001)), 1000));
    assert!(!is_expired(Some(&token_expiring_at(now_secs() + 3600))));
}

#[test]
fn exp_equal_to_now_is_not_expired() {
    assert!(!is_expired_at(Some(&token_expiring_at(1000)), 1000));
}

#[test]
fn malformed_or_missing_token_is_expired() {
    assert!(is_expired_at(Some("not-a-token"), 0));
    assert!(is_expired_at(Some(""), 0));
    assert!(is_expired_at(None, 0));
}
