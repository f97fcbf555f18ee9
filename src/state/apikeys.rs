//! API-key list state for the token view.
//!
//! A freshly created key's secret is shown exactly once: it lives in
//! `revealed` until dismissed, and the copy appended to `items` never
//! carries it.

#[cfg(test)]
#[path = "apikeys_test.rs"]
mod apikeys_test;

use crate::net::error::ApiError;
use crate::net::types::ApiKey;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiKeysState {
    pub items: Vec<ApiKey>,
    pub loading: bool,
    pub create_pending: bool,
    pub error: Option<String>,
    /// Key returned by the last create call, secret included.
    pub revealed: Option<ApiKey>,
}

impl ApiKeysState {
    pub fn finish_list(&mut self, result: Result<Vec<ApiKey>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn finish_create(&mut self, result: Result<ApiKey, ApiError>) {
        self.create_pending = false;
        match result {
            Ok(key) => {
                let listed = ApiKey { secret: None, ..key.clone() };
                self.items.push(listed);
                self.revealed = Some(key);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Drop the revealed secret; it cannot be shown again.
    pub fn dismiss_secret(&mut self) {
        self.revealed = None;
    }
}
