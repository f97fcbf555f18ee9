//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` and `current_user` are plain Rust and hold the cross-view
//! state. `auth`, `workspaces` and `apikeys` are the small view-models that
//! pages keep in signals.

pub mod apikeys;
pub mod auth;
pub mod current_user;
pub mod session;
pub mod workspaces;
