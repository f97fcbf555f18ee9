//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (which endpoint to call, when)
//! and delegates rendering details to `components`.

pub mod browse;
pub mod login;
pub mod search;
pub mod token;
pub mod workspaces;
