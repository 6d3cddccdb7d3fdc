//! Zibal gateway client implementation.

use std::fmt;
use std::sync::Arc;

use url::Url;
use zibal_core::{RequestInitBody, RequestInitResponse, VerifyBody, VerifyResponse};

use crate::config::{Config, LogLevel};
use crate::error::ZibalError;
use crate::gateway::{Gateway, GatewayResponse, DEFAULT_BASE_URL};
use crate::transport::{ReqwestTransport, Transport};

/// Arguments of a payment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    /// Amount in rials.
    pub amount: i64,
    /// Payer's mobile number.
    pub mobile: Option<String>,
    /// Description shown on the payment page.
    pub description: Option<String>,
    /// Merchant-side order identifier.
    pub order_id: Option<String>,
}

impl PaymentRequest {
    /// Request a payment of `amount` rials.
    #[must_use]
    pub fn new(amount: i64) -> Self {
        Self {
            amount,
            mobile: None,
            description: None,
            order_id: None,
        }
    }

    /// Set the payer's mobile number.
    #[must_use]
    pub fn with_mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = Some(mobile.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the order id.
    #[must_use]
    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }
}

/// Zibal gateway client.
///
/// Holds the merchant configuration and the transport. A client without a
/// configuration (or with an invalid one) fails every call with
/// [`ZibalError::InvalidConfig`] before touching the network.
#[derive(Clone)]
pub struct ZibalClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    config: Option<Config>,
}

impl ZibalClient {
    /// Create an unconfigured client using `reqwest`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new()))
    }

    /// Create an unconfigured client over a custom transport.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: DEFAULT_BASE_URL.to_string(),
            config: None,
        }
    }

    /// Use `config` for all calls.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Point the client at another gateway base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Validate and install a new configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ZibalError::InvalidConfig`] if the settings are invalid; the
    /// previous configuration is kept.
    pub fn initialize(
        &mut self,
        merchant: impl Into<String>,
        callback_url: impl Into<String>,
        log_level: LogLevel,
    ) -> Result<(), ZibalError> {
        let config = Config::new(merchant, callback_url, log_level)?;
        self.config = Some(config);
        Ok(())
    }

    /// The installed configuration, if any.
    #[must_use]
    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    /// Open a new payment.
    ///
    /// On success `body.track_id` identifies the payment for
    /// [`Self::start_url`] and [`Self::verify_payment`].
    ///
    /// # Errors
    ///
    /// Returns [`ZibalError::InvalidConfig`] without any network call if the
    /// client is not configured, otherwise any error of
    /// [`Gateway::exchange`].
    pub async fn request_payment(
        &self,
        request: PaymentRequest,
    ) -> Result<GatewayResponse<RequestInitResponse>, ZibalError> {
        let config = self.valid_config()?;
        let body = RequestInitBody {
            merchant: config.merchant().to_string(),
            callback_url: config.callback_url().to_string(),
            amount: request.amount,
            mobile: request.mobile,
            description: request.description,
            order_id: request.order_id,
        };

        self.gateway(config).exchange("request", &body).await
    }

    /// Verify the payment identified by `track_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ZibalError::InvalidConfig`] without any network call if the
    /// client is not configured, otherwise any error of
    /// [`Gateway::exchange`].
    pub async fn verify_payment(
        &self,
        track_id: i64,
    ) -> Result<GatewayResponse<VerifyResponse>, ZibalError> {
        let config = self.valid_config()?;
        let body = VerifyBody {
            merchant: config.merchant().to_string(),
            track_id,
        };

        self.gateway(config).exchange("verify", &body).await
    }

    /// URL the payer should be sent to in order to pay `track_id`.
    ///
    /// Returns `None` only if the base URL is unusable.
    #[must_use]
    pub fn start_url(&self, track_id: i64) -> Option<Url> {
        Url::parse(&format!("{}/start/{track_id}", self.base_url)).ok()
    }

    fn valid_config(&self) -> Result<&Config, ZibalError> {
        match &self.config {
            Some(config) if config.is_valid() => Ok(config),
            config => {
                let log_level = config.as_ref().map_or(LogLevel::None, Config::log_level);
                if log_level.permits(LogLevel::Error) {
                    tracing::error!(code = ZibalError::InvalidConfig.code(), "Invalid Configuration");
                }
                Err(ZibalError::InvalidConfig)
            }
        }
    }

    fn gateway<'a>(&'a self, config: &Config) -> Gateway<'a> {
        Gateway::new(self.transport.as_ref(), &self.base_url, config.log_level())
    }
}

impl Default for ZibalClient {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ZibalClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZibalClient")
            .field("base_url", &self.base_url)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
