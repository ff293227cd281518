//! Role-gated wrapper for protected sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-reads the session store on every render (tracking the auth signal so
//! login/logout re-render it) and delegates the decision to
//! `util::auth::evaluate_access`.

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

use leptos::prelude::*;

use crate::net::api::browser_client;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::util::auth::{AccessDecision, evaluate_access};
use crate::util::storage::KeyValueStore;

/// Read the session from `store` and decide access for `required_role`.
pub(crate) fn session_access<S: KeyValueStore>(store: &SessionStore<S>, required_role: Option<Role>) -> AccessDecision {
    let authenticated = store.is_authenticated();
    let user = store.current_user();
    evaluate_access(authenticated, user.as_ref(), required_role)
}

/// Render `children` only for a signed-in user holding `required_role`.
#[component]
pub fn Protected(
    children: ChildrenFn,
    #[prop(optional)] required_role: Option<Role>,
    #[prop(optional, into)] fallback: ViewFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || {
        auth.track();
        let client = browser_client();
        match session_access(client.session(), required_role) {
            AccessDecision::Allow => children().into_any(),
            AccessDecision::Unauthenticated => view! {
                <div class="access-denied">
                    <h3>"Access denied"</h3>
                    <p>"Sign in to view this section."</p>
                    {fallback.run()}
                </div>
            }
            .into_any(),
            AccessDecision::InsufficientRole { required, actual } => view! {
                <div class="access-denied">
                    <h3>"Insufficient permissions"</h3>
                    <p>
                        "Required role: " <strong>{required.as_str()}</strong>
                        <br/>
                        "Your role: " <strong>{actual.as_str()}</strong>
                    </p>
                    {fallback.run()}
                </div>
            }
            .into_any(),
        }
    }
}
