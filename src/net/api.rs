//! REST client for the user-management API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the session store so every call can check expiry up front, attach the
//! bearer token, and clear the session when the backend answers 401.
//!
//! ERROR HANDLING
//! ==============
//! All responses pass through `handle_response`, which turns 401 into
//! `ApiError::SessionExpired` (after clearing the session) and any other
//! non-2xx into `ApiError::Http`. Nothing is retried.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::{ApiError, http_error};
use super::transport::{FetchTransport, HttpRequest, HttpResponse, Transport};
use super::types::{
    AuthResponse, CreateUserRequest, ListUsersResponse, LoginRequest, RegisterRequest, Role, User, UserResponse,
};
use crate::config::ApiConfig;
use crate::state::session::{Session, SessionStore};
use crate::util::storage::{KeyValueStore, LocalStorage};

/// Password sent by `create_user` when none is given.
pub const DEFAULT_USER_PASSWORD: &str = "defaultpassword123";

const UNAUTHORIZED: u16 = 401;

/// Client wired to browser storage and `fetch`.
pub type BrowserClient = ApiClient<LocalStorage, FetchTransport>;

/// Build a client for the running page.
#[must_use]
pub fn browser_client() -> BrowserClient {
    ApiClient::new(ApiConfig::from_env(), SessionStore::new(LocalStorage), FetchTransport)
}

pub struct ApiClient<S, T> {
    config: ApiConfig,
    session: SessionStore<S>,
    transport: T,
}

impl<S: KeyValueStore, T: Transport> ApiClient<S, T> {
    pub fn new(config: ApiConfig, session: SessionStore<S>, transport: T) -> Self {
        Self { config, session, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Create an account via `POST /auth/register` and persist the session.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or a malformed body.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<Session, ApiError> {
        let payload = RegisterRequest { name, email, password };
        let request = HttpRequest::post_json(self.config.endpoint("/auth/register"), &payload)?;
        self.authenticate(request).await
    }

    /// Sign in via `POST /auth/login` and persist the session.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or a malformed body.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let payload = LoginRequest { email, password };
        let request = HttpRequest::post_json(self.config.endpoint("/auth/login"), &payload)?;
        self.authenticate(request).await
    }

    /// Drop the local session. The backend keeps no session state to revoke.
    pub fn logout(&self) {
        self.session.clear();
        leptos::logging::log!("logged out");
    }

    /// Fetch all users via `GET /users`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SessionExpired` without a network call when the local
    /// token is missing or expired.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let token = self.require_token()?;
        let request = HttpRequest::get(self.config.endpoint("/users")).with_bearer(token);
        let list: ListUsersResponse = self.send(request).await?;
        Ok(list.users)
    }

    /// Fetch one user via `GET /users/{id}`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::list_users`].
    pub async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        let token = self.require_token()?;
        let request = HttpRequest::get(self.config.endpoint(&format!("/users/{id}"))).with_bearer(token);
        let resp: UserResponse = self.send(request).await?;
        Ok(resp.user)
    }

    /// Create a user via `POST /users`.
    ///
    /// An absent or empty `password` becomes [`DEFAULT_USER_PASSWORD`]; an
    /// absent `role` becomes [`Role::User`].
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::list_users`].
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password: Option<&str>,
        role: Option<Role>,
    ) -> Result<User, ApiError> {
        let token = self.require_token()?;
        let payload = CreateUserRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.filter(|p| !p.is_empty()).unwrap_or(DEFAULT_USER_PASSWORD).to_owned(),
            role: role.unwrap_or_default(),
        };
        let request = HttpRequest::post_json(self.config.endpoint("/users"), &payload)?.with_bearer(token);
        let resp: UserResponse = self.send(request).await?;
        Ok(resp.user)
    }

    /// Probe `GET /health` on the unversioned base URL and return the body text.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` on transport failure or `ApiError::Http` for
    /// any non-2xx status. A 401 here does not touch the session.
    pub async fn health_check(&self) -> Result<String, ApiError> {
        let response = self.dispatch(HttpRequest::get(self.config.health_url())).await?;
        if !response.is_success() {
            return Err(ApiError::Http {
                status: response.status,
                message: format!("Health check failed: {}", response.status),
            });
        }
        Ok(response.body)
    }

    fn require_token(&self) -> Result<String, ApiError> {
        self.session.token().ok_or_else(|| {
            self.session.clear();
            ApiError::SessionExpired
        })
    }

    async fn authenticate(&self, request: HttpRequest) -> Result<Session, ApiError> {
        let auth: AuthResponse = self.send(request).await?;
        if auth.token.trim().is_empty() {
            return Err(ApiError::Decode("auth response carried an empty token".to_owned()));
        }
        Ok(self.session.save(&auth.token, &auth.user))
    }

    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = request.url.clone();
        self.transport.send(request).await.map_err(|e| {
            leptos::logging::warn!("request to {url} failed: {e}");
            ApiError::Network(e)
        })
    }

    async fn send<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        let response = self.dispatch(request).await?;
        self.handle_response(response)
    }

    fn handle_response<R: DeserializeOwned>(&self, response: HttpResponse) -> Result<R, ApiError> {
        if response.status == UNAUTHORIZED {
            leptos::logging::warn!("backend rejected credentials, clearing session");
            self.session.clear();
            return Err(ApiError::SessionExpired);
        }
        if !response.is_success() {
            return Err(http_error(response.status, &response.body));
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
