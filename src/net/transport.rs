//! HTTP transport seam for the API client.
//!
//! Client-side (csr): real `fetch` calls via `gloo-net`.
//! Elsewhere: `FetchTransport` fails every request, and tests substitute an
//! in-memory transport.

#![allow(clippy::unused_async)]

use serde::Serialize;

use super::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A JSON request ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Bearer token for the `Authorization` header, if authenticated.
    pub bearer: Option<String>,
    /// Serialized JSON body.
    pub body: Option<String>,
}

impl HttpRequest {
    #[must_use]
    pub fn get(url: String) -> Self {
        Self { method: Method::Get, url, bearer: None, body: None }
    }

    /// `POST` with `payload` serialized as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if `payload` cannot be serialized.
    pub fn post_json<B: Serialize>(url: String, payload: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Self { method: Method::Post, url, bearer: None, body: Some(body) })
    }

    #[must_use]
    pub fn with_bearer(mut self, token: String) -> Self {
        self.bearer = Some(token);
        self
    }

    /// The `Authorization` header value, if any.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the response, or a transport-level error
/// string when no response was received. Implementations never retry.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            }
            .header("Content-Type", "application/json");
            if let Some(value) = request.authorization() {
                builder = builder.header("Authorization", &value);
            }
            let resp = match request.body {
                Some(body) => builder.body(body).map_err(|e| e.to_string())?.send().await,
                None => builder.send().await,
            }
            .map_err(|e| e.to_string())?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| e.to_string())?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err("not available outside the browser".to_owned())
        }
    }
}
