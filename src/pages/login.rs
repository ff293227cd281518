//! Login / registration page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::state::auth::AuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    fn failure_action(self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Register => "Registration failed",
        }
    }
}

/// Validated credentials, trimmed where whitespace is never meaningful.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Credentials {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Check the form before any request is made.
///
/// Email and password are always required; name only when registering.
pub(crate) fn validate_credentials(
    mode: AuthMode,
    name: &str,
    email: &str,
    password: &str,
) -> Result<Credentials, ApiError> {
    let name = name.trim();
    let email = email.trim();
    let mut missing = Vec::new();
    if mode == AuthMode::Register && name.is_empty() {
        missing.push("name");
    }
    if email.is_empty() {
        missing.push("email");
    }
    if password.is_empty() {
        missing.push("password");
    }
    if !missing.is_empty() {
        return Err(ApiError::MissingFields(missing));
    }
    Ok(Credentials { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let mode = RwSignal::new(AuthMode::Login);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: skip the form.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if auth.get().is_signed_in() {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let on_toggle = move |_| {
        mode.update(|m| *m = m.toggled());
        name.set(String::new());
        email.set(String::new());
        password.set(String::new());
        error.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current_mode = mode.get();
        let creds = match validate_credentials(current_mode, &name.get(), &email.get(), &password.get()) {
            Ok(creds) => creds,
            Err(e) => {
                error.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let client = crate::net::api::browser_client();
                let result = match current_mode {
                    AuthMode::Login => client.login(&creds.email, &creds.password).await,
                    AuthMode::Register => client.register(&creds.name, &creds.email, &creds.password).await,
                };
                match result {
                    Ok(session) => {
                        auth.set(AuthState::from_session(&session, client.session().token_expiry()));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => {
                        if let Some(text) = crate::util::auth::failure_text(current_mode.failure_action(), &e) {
                            error.set(text);
                        }
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (creds, current_mode.failure_action());
            busy.set(false);
        }
    };

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <h2>{move || if mode.get() == AuthMode::Login { "Sign in" } else { "Create account" }}</h2>
                <Show when=move || !error.get().is_empty()>
                    <div class="error">{move || error.get()}</div>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::Register>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                    </Show>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        minlength="6"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || match (mode.get(), busy.get()) {
                            (AuthMode::Login, false) => "Sign in",
                            (AuthMode::Login, true) => "Signing in...",
                            (AuthMode::Register, false) => "Register",
                            (AuthMode::Register, true) => "Registering...",
                        }}
                    </button>
                </form>
                <p class="auth-toggle">
                    {move || if mode.get() == AuthMode::Login { "No account? " } else { "Already registered? " }}
                    <button class="toggle-button" type="button" on:click=on_toggle disabled=move || busy.get()>
                        {move || if mode.get() == AuthMode::Login { "Register" } else { "Sign in" }}
                    </button>
                </p>
            </div>
        </div>
    }
}
