//! HTTP transport seam.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: a stub that fails with [`ApiError::Unavailable`], since
//! there is no browser `fetch` to drive.
//!
//! Tests substitute their own [`Transport`] to script backend responses.

use async_trait::async_trait;

use super::error::ApiError;
use super::request::{HttpRequest, HttpResponse};

/// Sends one resolved request and returns the raw response.
///
/// Implementations report only transport-level failures as errors; any
/// HTTP status, 4xx/5xx included, is a successful `HttpResponse`.
#[async_trait(?Send)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use super::request::Method;

            let mut builder = match request.method {
                Method::Get => gloo_net::http::Request::get(&request.url),
                Method::Post => gloo_net::http::Request::post(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if !request.params.is_empty() {
                builder = builder.query(request.params.iter());
            }
            let resp = builder
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("no transport for {:?} {}", request.method, request.url);
            Err(ApiError::Unavailable)
        }
    }
}
