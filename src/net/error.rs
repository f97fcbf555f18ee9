//! Error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Endpoint functions never recover from these; they bubble to the caller.
//! `ApiError` is `Clone` so the current-user state machine can keep the last
//! failure as its terminal state.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (offline, DNS, CORS...).
    #[error("network request failed: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// No HTTP transport exists in this build (native / non-browser).
    #[error("HTTP transport not available in this build")]
    Unavailable,
}

impl ApiError {
    /// HTTP status of the failed response, if there was a response at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::Unavailable => None,
        }
    }

    /// Whether the backend rejected the session (HTTP 401).
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
