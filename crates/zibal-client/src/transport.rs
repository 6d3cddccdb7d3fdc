//! HTTP transport used to reach the gateway.
//!
//! The client only needs one capability: POST a JSON body to a URL and get
//! back the status, headers and body bytes. [`Transport`] is that seam;
//! [`ReqwestTransport`] is the production implementation.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use url::Url;

/// Metadata of a gateway HTTP response.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    /// Final URL of the response.
    pub url: Url,
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
}

/// What came back from a POST.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// Response metadata.
    pub meta: ResponseMeta,
    /// Body bytes, or `None` if they could not be read.
    pub body: Option<Vec<u8>>,
}

/// Failure to complete an HTTP exchange.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Other(String),
}

/// Capability to POST a JSON body to a URL.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `body` to `url` with `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns an error if no response was received.
    async fn post(&self, url: &Url, body: Vec<u8>) -> Result<TransportResponse, TransportError>;
}

/// [`Transport`] backed by a `reqwest` client.
///
/// Timeouts and TLS are whatever the wrapped client is configured with.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with a default `reqwest` client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport around an existing `reqwest` client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(&self, url: &Url, body: Vec<u8>) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let meta = ResponseMeta {
            url: response.url().clone(),
            status: response.status(),
            headers: response.headers().clone(),
        };

        let body = response.bytes().await.ok().map(|bytes| bytes.to_vec());

        Ok(TransportResponse { meta, body })
    }
}
