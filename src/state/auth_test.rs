use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::net::types::Role;
use crate::util::storage::MemoryStore;
use crate::util::time;

fn token_expiring_at(exp: i64) -> String {
    let payload = format!(r#"{{"exp":{exp},"user_id":2,"email":"b@x.com"}}"#);
    format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload))
}

fn bob() -> User {
    User {
        id: 2,
        name: "Bob".to_owned(),
        email: "b@x.com".to_owned(),
        role: Role::User,
        is_active: true,
        created_at: 1,
    }
}

#[test]
fn default_state_is_signed_out() {
    let state = AuthState::default();
    assert!(!state.is_signed_in());
    assert_eq!(state.login_time_ms, None);
}

#[test]
fn load_reads_live_session() {
    let store = SessionStore::new(MemoryStore::new());
    let exp = time::now_secs() + 600;
    store.save(&token_expiring_at(exp), &bob());

    let state = AuthState::load(&store);
    assert_eq!(state.user, Some(bob()));
    assert_eq!(state.token_expiry, Some(exp));
    assert!(state.login_time_ms.is_some());
}

#[test]
fn load_clears_expired_session() {
    let store = SessionStore::new(MemoryStore::new());
    store.save(&token_expiring_at(10), &bob());

    assert_eq!(AuthState::load(&store), AuthState::default());
    assert!(store.storage().is_empty());
}
