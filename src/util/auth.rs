//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical access decisions, unauthenticated
//! redirects, and session-expiry handling through these helpers.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::error::ApiError;
use crate::net::types::{Role, User};
use crate::state::auth::AuthState;

/// Outcome of checking a session against an optional role requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Unauthenticated,
    InsufficientRole { required: Role, actual: Role },
    Allow,
}

/// Decide whether protected content may render.
///
/// Roles match by equality only: an admin does not satisfy a moderator
/// requirement.
pub fn evaluate_access(authenticated: bool, user: Option<&User>, required_role: Option<Role>) -> AccessDecision {
    let Some(user) = user.filter(|_| authenticated) else {
        return AccessDecision::Unauthenticated;
    };
    match required_role {
        Some(required) if user.role != required => AccessDecision::InsufficientRole { required, actual: user.role },
        _ => AccessDecision::Allow,
    }
}

/// Redirect to `/login` whenever no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if !auth.get().is_signed_in() {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Reload the page so the app restarts from the login view.
pub fn force_reload() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

/// Inline error text for a failed `action`.
///
/// An expired session is not reported inline: the page reloads instead and
/// `None` is returned.
pub fn failure_text(action: &str, err: &ApiError) -> Option<String> {
    if err.is_session_expired() {
        leptos::logging::warn!("{action}: session expired, reloading");
        force_reload();
        return None;
    }
    Some(format!("{action}: {err}"))
}
