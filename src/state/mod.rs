//! Client application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns persisted session bookkeeping; `auth` and `users` are the
//! reactive snapshots pages render from.

pub mod auth;
pub mod session;
pub mod users;
