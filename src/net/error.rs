//! Uniform failure shape for API calls and form submission.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Errors surfaced to UI actions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network request failed: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status other than 401.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The local token expired or the backend answered 401. The session has
    /// already been cleared when this is returned.
    #[error("Session expired. Please sign in again.")]
    SessionExpired,

    /// Required form fields were empty; nothing was sent.
    #[error("required fields missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A 2xx body did not match the endpoint's response shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status for `Http` errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

/// Build the `Http` error for a non-2xx `status` and raw `body`.
///
/// Uses the body's `message` field when it is a non-empty string, otherwise
/// `HTTP error: {status}`.
pub(crate) fn http_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP error: {status}"));
    ApiError::Http { status, message }
}
