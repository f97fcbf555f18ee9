//! Wire DTOs for the REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror backend response bodies field for field. They are
//! snapshots of backend-owned records: the client never edits them, it only
//! replaces a cached copy wholesale.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/api/users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// ISO 8601 creation timestamp, when the backend sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Contact email address.
    #[serde(default)]
    pub email: String,
    /// Login name, also the first path segment of default workspace keys.
    pub username: String,
    /// Whether the account is enabled.
    #[serde(default)]
    pub is_active: bool,
}

/// Visibility class of a storage root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootType {
    Public,
    Private,
    Unmanaged,
}

impl RootType {
    /// Lowercase label as used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Unmanaged => "unmanaged",
        }
    }
}

/// A storage root: one bucket prefix on one storage node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    pub id: String,
    pub created: String,
    pub root_type: RootType,
    pub bucket: String,
    /// Object-key prefix of the root inside `bucket`.
    pub base_path: String,
    /// Storage node hosting the bucket (UUID string).
    pub node_id: String,
}

/// A named workspace bound to one owner and one root.
///
/// The backend guarantees `owner_id == owner.id` and `root_id == root.id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: String,
    pub created: String,
    pub name: String,
    /// Explicit key prefix inside the root, overriding `<owner>/<name>`.
    #[serde(default)]
    pub base_path: Option<String>,
    pub owner_id: String,
    pub root_id: String,
    pub owner: User,
    pub root: Root,
}

/// An API key credential.
///
/// `secret` is only present in the response to key creation; list responses
/// never carry it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    pub id: String,
    pub created: String,
    /// Public half of the key, safe to display.
    pub key_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Key holder. Absent from the creation response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}
