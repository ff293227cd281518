//! Networking modules for the user-management REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the client, `transport` the HTTP seam it sends through, `error`
//! the failure taxonomy, and `types` the wire schema.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;
