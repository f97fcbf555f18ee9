//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `Session` is created by the app root and handed to the API client and
//! the current-user state machine. Clones share the same record, so a token
//! set by the login page is seen by the very next request.
//!
//! Everything runs on the single browser event loop; `RefCell` borrows never
//! outlive a method call.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::types::User;

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<User>,
}

/// Shared handle to the session record.
#[derive(Clone, Debug, Default)]
pub struct Session {
    inner: Rc<RefCell<SessionState>>,
}

impl Session {
    /// Empty session: no token, no user.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let session = Self::new();
        session.set_token(Some(token.to_owned()));
        session
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner.borrow().token.clone()
    }

    /// Replace the bearer token. Blank tokens clear it.
    pub fn set_token(&self, token: Option<String>) {
        self.inner.borrow_mut().token = token.filter(|t| !t.trim().is_empty());
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.inner.borrow().user.clone()
    }

    /// Replace the cached user wholesale.
    pub fn set_user(&self, user: Option<User>) {
        self.inner.borrow_mut().user = user;
    }
}
