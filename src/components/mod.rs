//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared `AuthState` signal from Leptos context and the
//! session store from browser storage.

pub mod monitoring;
pub mod profile;
pub mod protected;
