//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::browser_client;
use crate::pages::{login::LoginPage, users::UsersPage};
use crate::state::auth::AuthState;

/// Root application component.
///
/// Seeds the auth context from persisted storage (clearing an expired
/// session) and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::load(browser_client().session()));
    provide_context(auth);

    view! {
        <Title text="User Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=UsersPage/>
            </Routes>
        </Router>
    }
}
