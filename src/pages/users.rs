//! Users page: list, details, and the admin-only create form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Loads the user list once on mount and again
//! after every successful create or manual refresh.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::monitoring::MonitoringLinks;
use crate::components::profile::UserProfile;
use crate::components::protected::Protected;
use crate::net::error::ApiError;
use crate::net::types::{Role, User};
use crate::state::auth::AuthState;
use crate::state::users::{NewUserDraft, UsersState};
use crate::util::auth::install_unauth_redirect;
use crate::util::time::format_utc_secs;

/// Check the create form before any request is made. All fields are required.
pub(crate) fn validate_new_user(draft: &NewUserDraft) -> Result<NewUserDraft, ApiError> {
    let name = draft.name.trim();
    let email = draft.email.trim();
    let mut missing = Vec::new();
    if name.is_empty() {
        missing.push("name");
    }
    if email.is_empty() {
        missing.push("email");
    }
    if draft.password.is_empty() {
        missing.push("password");
    }
    if !missing.is_empty() {
        return Err(ApiError::MissingFields(missing));
    }
    Ok(NewUserDraft { name: name.to_owned(), email: email.to_owned(), password: draft.password.clone(), role: draft.role })
}

fn role_badge(role: Role) -> &'static str {
    match role {
        Role::Admin => "👑",
        Role::Moderator => "🛡️",
        Role::User => "👤",
    }
}

fn load_users(users: RwSignal<UsersState>, auth: RwSignal<AuthState>) {
    users.update(UsersState::begin);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::browser_client().list_users().await {
            Ok(items) => users.update(|s| s.loaded(items)),
            Err(e) => {
                if e.is_session_expired() {
                    auth.set(AuthState::default());
                }
                let text = crate::util::auth::failure_text("Loading users failed", &e);
                users.update(|s| s.failed(text));
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = auth;
        users.update(|s| s.failed(None));
    }
}

fn show_user_details(id: i64, users: RwSignal<UsersState>, auth: RwSignal<AuthState>) {
    users.update(UsersState::begin);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::browser_client().get_user(id).await {
            Ok(user) => users.update(|s| s.show_details(user)),
            Err(e) => {
                if e.is_session_expired() {
                    auth.set(AuthState::default());
                }
                let text = crate::util::auth::failure_text("Fetching user failed", &e);
                users.update(|s| s.failed(text));
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, auth);
        users.update(|s| s.failed(None));
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let users = RwSignal::new(UsersState::default());
    install_unauth_redirect(auth, use_navigate());

    if auth.get_untracked().is_signed_in() {
        load_users(users, auth);
    }

    let on_refresh = move |_| load_users(users, auth);

    view! {
        <div class="users-page">
            <header class="users-page__header">
                <h1>"User administration"</h1>
                <UserProfile/>
            </header>
            <main class="main-content">
                <Show when=move || users.get().error.is_some()>
                    <div class="error">{move || users.get().error.unwrap_or_default()}</div>
                </Show>

                <Protected
                    required_role=Role::Admin
                    fallback=|| view! {
                        <div class="info-message">
                            <p>"Creating users is available to administrators only."</p>
                        </div>
                    }
                >
                    <CreateUserForm users=users/>
                </Protected>

                <section class="users-list">
                    <h2>"Users"</h2>
                    <button class="refresh-btn" on:click=on_refresh disabled=move || users.get().loading>
                        {move || if users.get().loading { "Loading..." } else { "Refresh" }}
                    </button>
                    <Show when=move || users.get().details.is_some()>
                        {move || users.get().details.map(|user| view! {
                            <div class="user-details">
                                <strong>{user.name}</strong>
                                " (" {user.email} ")"
                                <button on:click=move |_| users.update(|s| s.details = None)>"Close"</button>
                            </div>
                        })}
                    </Show>
                    <Show
                        when=move || !users.get().items.is_empty()
                        fallback=move || view! { <p>{move || if users.get().loading { "" } else { "No users yet." }}</p> }
                    >
                        <div class="users-grid">
                            {move || users.get().items.into_iter().map(|user| user_card(user, users, auth)).collect_view()}
                        </div>
                    </Show>
                </section>

                <MonitoringLinks/>
            </main>
        </div>
    }
}

fn user_card(user: User, users: RwSignal<UsersState>, auth: RwSignal<AuthState>) -> impl IntoView {
    let id = user.id;
    let role = user.role.as_str();
    let status_class = if user.is_active { "user-status active" } else { "user-status inactive" };
    view! {
        <div class="user-card">
            <div class="user-card-header">
                <span class="user-role-badge" data-role=role>{role_badge(user.role)} " " {role}</span>
                <span class=status_class>{if user.is_active { "active" } else { "inactive" }}</span>
            </div>
            <h3>{user.name}</h3>
            <p>{user.email}</p>
            <p>"ID: " {id}</p>
            <p>"Created: " {format_utc_secs(user.created_at)}</p>
            <button
                class="get-user-btn"
                on:click=move |_| show_user_details(id, users, auth)
                disabled=move || users.get().loading
            >
                "Details"
            </button>
        </div>
    }
}

/// Admin create-user form. Rendered only inside an admin `Protected` block.
#[component]
fn CreateUserForm(users: RwSignal<UsersState>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let draft = RwSignal::new(NewUserDraft::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let valid = match validate_new_user(&draft.get()) {
            Ok(valid) => valid,
            Err(e) => {
                users.update(|s| s.error = Some(e.to_string()));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let client = crate::net::api::browser_client();
            let result = client
                .create_user(&valid.name, &valid.email, Some(&valid.password), Some(valid.role))
                .await;
            match result {
                Ok(user) => {
                    leptos::logging::log!("created user {}", user.id);
                    draft.set(NewUserDraft::default());
                    load_users(users, auth);
                }
                Err(e) => {
                    if e.is_session_expired() {
                        auth.set(AuthState::default());
                    }
                    let text = crate::util::auth::failure_text("Creating user failed", &e);
                    users.update(|s| s.failed(text));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (valid, auth);
            busy.set(false);
        }
    };

    view! {
        <section class="create-user">
            <h2>"Create user"</h2>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || draft.get().name
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    disabled=move || busy.get()
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || draft.get().email
                    on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                    disabled=move || busy.get()
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || draft.get().password
                    on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                    disabled=move || busy.get()
                />
                <select
                    prop:value=move || draft.get().role.as_str().to_owned()
                    on:change=move |ev| {
                        let role = Role::parse(&event_target_value(&ev)).unwrap_or_default();
                        draft.update(|d| d.role = role);
                    }
                    disabled=move || busy.get()
                >
                    {Role::ALL
                        .into_iter()
                        .map(|role| view! { <option value=role.as_str()>{role_badge(role)} " " {role.as_str()}</option> })
                        .collect_view()}
                </select>
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating..." } else { "Create user" }}
                </button>
            </form>
        </section>
    }
}
