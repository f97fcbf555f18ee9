//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` holds the router/reactivity glue for the current-user hook;
//! `workspace_key` is pure formatting used by the browse view.

pub mod auth;
pub mod workspace_key;
