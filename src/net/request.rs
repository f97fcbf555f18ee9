//! Request configuration builder.
//!
//! Every outgoing call goes through [`config`], which pins the API base path
//! and attaches the bearer token. The token is read from the [`Session`] each
//! time `config` runs, so a token set mid-session applies to the next call.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use crate::state::session::Session;

pub const AUTHORIZATION: &str = "Authorization";

/// HTTP verbs used by the endpoint functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Query parameters with optional filters.
///
/// `None` values are dropped instead of being sent as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value` when `value` is present.
    #[must_use]
    pub fn opt(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.0.push((key.to_owned(), value.to_owned()));
        }
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Merged options for one request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestConfig {
    pub base_url: String,
    pub headers: Vec<(String, String)>,
    pub params: QueryParams,
}

impl RequestConfig {
    /// Per-call overrides carrying only query parameters.
    #[must_use]
    pub fn with_params(params: QueryParams) -> Self {
        Self { params, ..Self::default() }
    }

    /// Value of a header, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Merge per-call `overrides` with the fixed base path and the session's
/// bearer token.
///
/// Any caller-supplied `Authorization` header is replaced. Without a token
/// the header is left out entirely.
#[must_use]
pub fn config(session: &Session, api_base: &str, overrides: RequestConfig) -> RequestConfig {
    let mut headers: Vec<(String, String)> = overrides
        .headers
        .into_iter()
        .filter(|(k, _)| !k.eq_ignore_ascii_case(AUTHORIZATION))
        .collect();
    if let Some(token) = session.token() {
        headers.push((AUTHORIZATION.to_owned(), format!("Bearer {token}")));
    }
    RequestConfig { base_url: api_base.to_owned(), headers, params: overrides.params }
}

/// A fully resolved request handed to a [`super::transport::Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute path or URL, base included, without query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub params: QueryParams,
}

impl HttpRequest {
    /// Resolve `path` against the base of `config`.
    #[must_use]
    pub fn new(method: Method, path: &str, config: RequestConfig) -> Self {
        let url = join_url(&config.base_url, path);
        Self { method, url, headers: config.headers, params: config.params }
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response returned by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
