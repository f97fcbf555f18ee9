//! Storage prefix of a workspace inside its root bucket.
//!
//! The prefix is `<root.base_path>/<inner>`, where `inner` is the workspace's
//! own `base_path` when set and `<owner.username>/<name>` otherwise. Joining
//! follows POSIX path rules: an absolute `inner` replaces the root prefix.
//! Surrounding slashes are stripped from the result.

#[cfg(test)]
#[path = "workspace_key_test.rs"]
mod workspace_key_test;

use crate::net::types::Workspace;

/// Object-key prefix of `workspace` inside `workspace.root.bucket`.
#[must_use]
pub fn workspace_key(workspace: &Workspace) -> String {
    let default_inner;
    let inner = match workspace.base_path.as_deref() {
        Some(path) => path,
        None => {
            default_inner = format!("{}/{}", workspace.owner.username, workspace.name);
            default_inner.as_str()
        }
    };
    join_path(&workspace.root.base_path, inner).trim_matches('/').to_owned()
}

/// `bucket/prefix` location string shown in the browse view.
#[must_use]
pub fn workspace_location(workspace: &Workspace) -> String {
    join_path(&workspace.root.bucket, &workspace_key(workspace)).trim_matches('/').to_owned()
}

fn join_path(base: &str, path: &str) -> String {
    if path.starts_with('/') || base.is_empty() {
        path.to_owned()
    } else if base.ends_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
