//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context. Pages refresh it from the session
//! store after login, logout, and expiry so identity-dependent views re-render.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;
use crate::state::session::{Session, SessionStore};
use crate::util::storage::KeyValueStore;

/// Snapshot of the signed-in user and session timing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// Login time, epoch milliseconds.
    pub login_time_ms: Option<i64>,
    /// Token expiry, epoch seconds.
    pub token_expiry: Option<i64>,
}

impl AuthState {
    /// Read the current state from `store`, clearing an expired session.
    pub fn load<S: KeyValueStore>(store: &SessionStore<S>) -> Self {
        match store.read_session() {
            Some(session) => Self::from_session(&session, store.token_expiry()),
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn from_session(session: &Session, token_expiry: Option<i64>) -> Self {
        Self { user: Some(session.user.clone()), login_time_ms: session.login_time_ms, token_expiry }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
