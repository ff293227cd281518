//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock,
//! token payloads) from page and component logic to improve reuse and
//! testability.

pub mod auth;
pub mod storage;
pub mod time;
pub mod token;
