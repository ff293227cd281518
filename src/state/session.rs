//! Persistent session bookkeeping.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is three storage keys: the raw bearer token, the JSON user
//! record, and the login time. Token and user are written and removed
//! together; the login time is only meaningful while a token exists.
//!
//! Reads are self-healing: `read_session` clears storage when the token has
//! expired, so every observer of session state also performs expiry cleanup.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::storage::KeyValueStore;
use crate::util::{time, token};

pub const TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "currentUser";
pub const LOGIN_TIME_KEY: &str = "loginTime";

/// A live, non-expired session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
    /// Login time, milliseconds since the Unix epoch, if recorded.
    pub login_time_ms: Option<i64>,
}

/// Session lifecycle over an injected key/value store.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Persist a fresh session, replacing any previous one.
    pub fn save(&self, token: &str, user: &User) -> Session {
        let login_time_ms = time::now_ms();
        match serde_json::to_string(user) {
            Ok(raw) => {
                self.storage.set(TOKEN_KEY, token);
                self.storage.set(USER_KEY, &raw);
                self.storage.set(LOGIN_TIME_KEY, &login_time_ms.to_string());
                leptos::logging::log!("session saved for user {}", user.id);
            }
            Err(e) => {
                // Never leave a token behind without its user.
                self.clear();
                leptos::logging::warn!("session not saved, user record unserializable: {e}");
            }
        }
        Session { token: token.to_owned(), user: user.clone(), login_time_ms: Some(login_time_ms) }
    }

    /// Remove every session key. Safe to call with no session present.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.storage.remove(LOGIN_TIME_KEY);
    }

    /// Read the stored session, clearing it when expired or corrupt.
    pub fn read_session(&self) -> Option<Session> {
        self.read_session_at(time::now_secs())
    }

    /// `read_session` against an explicit clock, seconds since the epoch.
    pub fn read_session_at(&self, now_secs: i64) -> Option<Session> {
        let raw_token = self.storage.get(TOKEN_KEY);
        if token::is_expired_at(raw_token.as_deref(), now_secs) {
            if raw_token.is_some() {
                leptos::logging::log!("stored token expired, clearing session");
            }
            self.clear();
            return None;
        }
        let token = raw_token?;
        let Some(user) = self.storage.get(USER_KEY).and_then(|raw| serde_json::from_str::<User>(&raw).ok()) else {
            leptos::logging::warn!("stored user record missing or unreadable, clearing session");
            self.clear();
            return None;
        };
        Some(Session { token, user, login_time_ms: self.login_time() })
    }

    /// The signed-in user, if the session is still valid.
    pub fn current_user(&self) -> Option<User> {
        self.read_session().map(|session| session.user)
    }

    /// The bearer token, if the session is still valid.
    pub fn token(&self) -> Option<String> {
        self.read_session().map(|session| session.token)
    }

    /// True only for a present, unexpired token. Expired sessions are cleared.
    pub fn is_authenticated(&self) -> bool {
        let raw_token = self.storage.get(TOKEN_KEY);
        if raw_token.is_none() {
            return false;
        }
        if token::is_expired(raw_token.as_deref()) {
            leptos::logging::log!("stored token expired, clearing session");
            self.clear();
            return false;
        }
        true
    }

    /// Stored login time in epoch milliseconds.
    pub fn login_time(&self) -> Option<i64> {
        self.storage.get(LOGIN_TIME_KEY)?.trim().parse().ok()
    }

    /// `exp` claim of the stored token in epoch seconds. Does not clear.
    pub fn token_expiry(&self) -> Option<i64> {
        let raw = self.storage.get(TOKEN_KEY)?;
        token::decode(&raw).ok().map(|claims| claims.exp)
    }
}
