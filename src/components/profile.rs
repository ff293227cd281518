//! Signed-in user strip with session timing and logout.
//!
//! Logout only clears state; the page's unauthenticated redirect takes the
//! user back to `/login`.

use leptos::prelude::*;

use crate::net::api::browser_client;
use crate::state::auth::AuthState;
use crate::util::time::{format_utc_ms, format_utc_secs};

#[component]
pub fn UserProfile() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        browser_client().logout();
        auth.set(AuthState::default());
    };

    move || {
        let state = auth.get();
        state.user.map(|user| {
            let role = user.role.as_str();
            let login = state.login_time_ms.map_or_else(|| "—".to_owned(), format_utc_ms);
            let expiry = state.token_expiry.map_or_else(|| "—".to_owned(), format_utc_secs);
            view! {
                <div class="user-profile">
                    <div class="user-profile__identity">
                        <span class="user-profile__name">{user.name}</span>
                        <span class="user-profile__email">{user.email}</span>
                        <span class="user-role-badge" data-role=role>{role}</span>
                    </div>
                    <div class="user-profile__session">
                        <span>"Signed in: " {login}</span>
                        <span>"Session expires: " {expiry}</span>
                    </div>
                    <button class="user-profile__logout" on:click=on_logout>
                        "Log out"
                    </button>
                </div>
            }
        })
    }
}
