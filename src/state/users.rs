//! User-list state for the users page.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::types::{Role, User};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsersState {
    pub items: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
    /// User fetched via the per-card details action.
    pub details: Option<User>,
}

impl UsersState {
    pub fn begin(&mut self) {
        self.loading = true;
    }

    pub fn loaded(&mut self, items: Vec<User>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Record a failure; `None` means the failure was handled elsewhere
    /// (session expiry reload) and only the loading flag is reset.
    pub fn failed(&mut self, error: Option<String>) {
        self.loading = false;
        if error.is_some() {
            self.error = error;
        }
    }

    pub fn show_details(&mut self, user: User) {
        self.loading = false;
        self.error = None;
        self.details = Some(user);
    }
}

/// Draft of the admin create-user form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewUserDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}
