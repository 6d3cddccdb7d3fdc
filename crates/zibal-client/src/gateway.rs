//! A single JSON-over-HTTP exchange with the gateway.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use url::Url;

use crate::config::LogLevel;
use crate::error::ZibalError;
use crate::transport::{ResponseMeta, Transport};

/// Production gateway base URL.
pub const DEFAULT_BASE_URL: &str = "https://gateway.zibal.ir";

/// A decoded gateway response together with its HTTP metadata.
#[derive(Debug, Clone)]
pub struct GatewayResponse<T> {
    /// HTTP metadata of the response.
    pub meta: ResponseMeta,
    /// Decoded body.
    pub body: T,
}

/// Performs exchanges against one gateway base URL.
///
/// Every call issues at most one POST and never retries.
#[derive(Clone, Copy)]
pub struct Gateway<'a> {
    transport: &'a dyn Transport,
    base_url: &'a str,
    log_level: LogLevel,
}

impl<'a> Gateway<'a> {
    /// Create a gateway over `transport`, logging at `log_level`.
    #[must_use]
    pub fn new(transport: &'a dyn Transport, base_url: &'a str, log_level: LogLevel) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/'),
            log_level,
        }
    }

    /// Build the URL for `path` under the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ZibalError::BadUrl`] if the result is not a valid URL.
    pub fn url(&self, path: &str) -> Result<Url, ZibalError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&url).map_err(|_| ZibalError::BadUrl { url })
    }

    /// POST `body` as JSON to `path` and decode the response as `R`.
    ///
    /// The body is serialized before anything is sent; if that fails the
    /// exchange is abandoned without touching the network.
    ///
    /// # Errors
    ///
    /// - [`ZibalError::BadUrl`] if the destination URL cannot be built
    /// - [`ZibalError::BadBody`] if `body` cannot be serialized
    /// - [`ZibalError::BadResponse`] if the request fails, the body cannot be
    ///   read, or it does not decode as `R` (including an unknown status code
    ///   in a typed field)
    pub async fn exchange<B, R>(&self, path: &str, body: &B) -> Result<GatewayResponse<R>, ZibalError>
    where
        B: Serialize + Debug,
        R: DeserializeOwned + Debug,
    {
        let url = self.url(path).map_err(|err| self.failed(err))?;

        let payload = serde_json::to_vec(body).map_err(|_| {
            self.failed(ZibalError::BadBody {
                body: format!("{body:?}"),
            })
        })?;

        if self.log_level.permits(LogLevel::Verbose) {
            tracing::info!(%url, body = ?body, "POST");
        }

        let response = self
            .transport
            .post(&url, payload)
            .await
            .map_err(|err| {
                if self.log_level.permits(LogLevel::Error) {
                    tracing::error!(%url, error = %err, "transport failure");
                }
                self.failed(ZibalError::bad_response(None))
            })?;

        let meta = response.meta;
        if self.log_level.permits(LogLevel::Verbose) {
            tracing::info!(path, status = %meta.status, "response received");
        }

        let Some(bytes) = response.body else {
            return Err(self.failed(ZibalError::bad_response(Some(meta))));
        };

        match serde_json::from_slice::<R>(&bytes) {
            Ok(body) => {
                if self.log_level.permits(LogLevel::Verbose) {
                    tracing::info!(path, body = ?body, "response decoded");
                }
                Ok(GatewayResponse { meta, body })
            }
            Err(err) => {
                if self.log_level.permits(LogLevel::Error) {
                    tracing::error!(path, error = %err, "response did not decode");
                }
                Err(self.failed(ZibalError::bad_response(Some(meta))))
            }
        }
    }

    fn failed(&self, err: ZibalError) -> ZibalError {
        if self.log_level.permits(LogLevel::Error) {
            tracing::error!(code = err.code(), "{err}");
        }
        err
    }
}
