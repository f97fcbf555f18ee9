//! REST API helpers for communicating with the workspaces backend.
//!
//! Each endpoint builds its options through [`request::config`], issues
//! exactly one request through the [`Transport`], and decodes the body into
//! the matching DTO.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here catches. Transport failures, non-2xx statuses and decode
//! failures all come back as [`ApiError`] for the caller to handle; there is
//! no retry.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::request::{self, HttpRequest, Method, QueryParams, RequestConfig};
use super::transport::{BrowserTransport, Transport};
use super::types::{ApiKey, User, Workspace};
use crate::config::ClientConfig;
use crate::state::session::Session;

const USERS_ME: &str = "users/me";
const WORKSPACE: &str = "workspace";
const APIKEY: &str = "apikey";

/// Typed client over the backend REST surface.
#[derive(Clone, Debug)]
pub struct ApiClient<T = BrowserTransport> {
    transport: T,
    session: Session,
    api_base: String,
}

impl<T: Transport> ApiClient<T> {
    #[must_use]
    pub fn new(transport: T, session: Session, config: &ClientConfig) -> Self {
        Self { transport, session, api_base: config.api_base.clone() }
    }

    /// Fetch the authenticated caller from `GET /api/users/me`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with 401 when the session is missing or
    /// expired, and any other [`ApiError`] unchanged.
    pub async fn users_me(&self) -> Result<User, ApiError> {
        self.fetch(Method::Get, USERS_ME, RequestConfig::default()).await
    }

    /// Search workspaces via `GET /api/workspace`.
    ///
    /// Absent filters are left out of the query string. An empty list is a
    /// normal result.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ApiError`] on any failure.
    pub async fn workspaces_search(
        &self,
        name: Option<&str>,
        owner_id: Option<&str>,
    ) -> Result<Vec<Workspace>, ApiError> {
        let params = QueryParams::new().opt("name", name).opt("owner_id", owner_id);
        self.fetch(Method::Get, WORKSPACE, RequestConfig::with_params(params)).await
    }

    /// List the caller's API keys via `GET /api/apikey`. Secrets are never
    /// included.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ApiError`] on any failure.
    pub async fn apikey_list(&self) -> Result<Vec<ApiKey>, ApiError> {
        self.fetch(Method::Get, APIKEY, RequestConfig::default()).await
    }

    /// Issue a new API key via `POST /api/apikey`.
    ///
    /// The returned key carries its `secret`; this is the only response that
    /// ever does.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ApiError`] on any failure.
    pub async fn apikey_create(&self) -> Result<ApiKey, ApiError> {
        self.fetch(Method::Post, APIKEY, RequestConfig::default()).await
    }

    async fn fetch<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        overrides: RequestConfig,
    ) -> Result<R, ApiError> {
        let config = request::config(&self.session, &self.api_base, overrides);
        let req = HttpRequest::new(method, path, config);
        log::debug!("{:?} {}", req.method, req.url);
        let resp = self.transport.send(req).await?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status, body: resp.body });
        }
        serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
