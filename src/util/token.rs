//! Bearer-token payload inspection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend issues HS256 JWTs. The browser never holds the signing key, so
//! this module only reads the payload to drive UX (expiry, identity). Every
//! request is still re-validated server-side.
//!
//! ERROR HANDLING
//! ==============
//! Decode failures are returned as `TokenError` but callers deciding whether a
//! session is usable collapse them into "expired" via `is_expired`.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use super::time::now_secs;

/// Claims carried in the token payload segment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
    /// Subject user id.
    pub user_id: i64,
    /// Subject email.
    pub email: String,
}

/// Reasons a token payload could not be read.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is empty")]
    Empty,

    #[error("token must have 3 segments, found {0}")]
    Segments(usize),

    #[error("payload is not valid base64url: {0}")]
    Encoding(String),

    #[error("payload is not a claims object: {0}")]
    Claims(String),
}

/// Decode the payload segment of `token` without verifying the signature.
///
/// # Errors
///
/// Returns a `TokenError` when the token is empty, does not have exactly three
/// dot-separated segments, or its payload is not base64url-encoded claims JSON.
pub fn decode(token: &str) -> Result<TokenClaims, TokenError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(TokenError::Empty);
    }
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(TokenError::Segments(segments.len()));
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::Encoding(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Claims(e.to_string()))
}

/// Whether `token` is unusable at `now_secs`.
///
/// Absent and undecodable tokens count as expired. A token whose `exp` equals
/// `now_secs` is still valid for that second.
pub fn is_expired_at(token: Option<&str>, now_secs: i64) -> bool {
    match token.map(decode) {
        Some(Ok(claims)) => claims.exp < now_secs,
        Some(Err(_)) | None => true,
    }
}

/// Whether `token` is unusable right now.
pub fn is_expired(token: Option<&str>) -> bool {
    is_expired_at(token, now_secs())
}
