use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::net::types::User;
use crate::util::storage::MemoryStore;
use crate::util::time;

fn token_expiring_at(exp: i64) -> String {
    let payload = format!(r#"{{"exp":{exp},"user_id":1,"email":"a@x.com"}}"#);
    format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload))
}

fn user_with_role(role: Role) -> User {
    User { id: 1, name: "Alice".to_owned(), email: "a@x.com".to_owned(), role, is_active: true, created_at: 0 }
}

#[test]
fn empty_store_is_unauthenticated() {
    let store = SessionStore::new(MemoryStore::new());
    assert_eq!(session_access(&store, None), AccessDecision::Unauthenticated);
}

#[test]
fn live_admin_session_is_allowed_for_admin() {
    let store = SessionStore::new(MemoryStore::new());
    store.save(&token_expiring_at(time::now_secs() + 600), &user_with_role(Role::Admin));
    assert_eq!(session_access(&store, Some(Role::Admin)), AccessDecision::Allow);
}

#[test]
fn live_user_session_lacks_admin_role() {
    let store = SessionStore::new(MemoryStore::new());
    store.save(&token_expiring_at(time::now_secs() + 600), &user_with_role(Role::User));
    assert_eq!(
        session_access(&store, Some(Role::Admin)),
        AccessDecision::InsufficientRole { required: Role::Admin, actual: Role::User }
    );
}

#[test]
fn expired_session_is_cleared_and_unauthenticated() {
    let store = SessionStore::new(MemoryStore::new());
    store.save(&token_expiring_at(1), &user_with_role(Role::Admin));
    assert_eq!(session_access(&store, Some(Role::Admin)), AccessDecision::Unauthenticated);
    assert!(store.storage().is_empty());
}
