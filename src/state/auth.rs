//! Auth view-model for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views never touch [`CurrentUser`](super::current_user::CurrentUser)
//! directly. The app root subscribes a signal of `AuthState` to it, and
//! views render from that signal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::current_user::UserLoad;
use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    /// Message of the last failed fetch.
    pub error: Option<String>,
}

impl From<&UserLoad> for AuthState {
    fn from(load: &UserLoad) -> Self {
        match load {
            UserLoad::Unloaded => Self::default(),
            UserLoad::Loading => Self { loading: true, ..Self::default() },
            UserLoad::Loaded(user) => Self { user: Some(User::clone(user)), ..Self::default() },
            UserLoad::Failed(err) => Self { error: Some(err.to_string()), ..Self::default() },
        }
    }
}
