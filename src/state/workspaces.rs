//! Workspace-list state for the workspaces, search and browse views.
//!
//! DESIGN
//! ======
//! Each view owns its own list signal; the state only records what the last
//! search returned so stale results are replaced, never merged.

#[cfg(test)]
#[path = "workspaces_test.rs"]
mod workspaces_test;

use crate::net::error::ApiError;
use crate::net::types::Workspace;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkspacesState {
    pub items: Vec<Workspace>,
    pub loading: bool,
    pub error: Option<String>,
    /// Whether at least one search has completed.
    pub searched: bool,
}

impl WorkspacesState {
    /// Mark a search as started, keeping the previous items on screen.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record the outcome of a search.
    pub fn finish(&mut self, result: Result<Vec<Workspace>, ApiError>) {
        self.loading = false;
        self.searched = true;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                self.items.clear();
                self.error = Some(e.to_string());
            }
        }
    }

    /// Searched, succeeded, found nothing.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        self.searched && !self.loading && self.error.is_none() && self.items.is_empty()
    }
}
