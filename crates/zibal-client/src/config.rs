//! Merchant configuration.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use url::Url;

use crate::error::ZibalError;

/// How much the client logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Log nothing.
    None,
    /// Log failures only.
    Error,
    /// Log failures and every request/response.
    #[default]
    Verbose,
}

impl LogLevel {
    /// Whether an event at `event` level should be emitted under this setting.
    #[must_use]
    pub fn permits(self, event: Self) -> bool {
        event != Self::None && self >= event
    }
}

impl FromStr for LogLevel {
    type Err = ZibalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "error" => Ok(Self::Error),
            "verbose" => Ok(Self::Verbose),
            _ => Err(ZibalError::InvalidConfig),
        }
    }
}

/// Merchant settings required by every gateway call.
///
/// Validity is re-checked on each use via [`Config::is_valid`], since a value
/// obtained through deserialization bypasses [`Config::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    merchant: String,
    callback_url: String,
    #[serde(default)]
    log_level: LogLevel,
}

impl Config {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ZibalError::InvalidConfig`] if `merchant` is empty or
    /// `callback_url` is empty or not a URL.
    pub fn new(
        merchant: impl Into<String>,
        callback_url: impl Into<String>,
        log_level: LogLevel,
    ) -> Result<Self, ZibalError> {
        let config = Self {
            merchant: merchant.into(),
            callback_url: callback_url.into(),
            log_level,
        };

        if config.is_valid() {
            Ok(config)
        } else {
            Err(ZibalError::InvalidConfig)
        }
    }

    /// Load configuration from `ZIBAL_MERCHANT`, `ZIBAL_CALLBACK_URL` and
    /// `ZIBAL_LOG_LEVEL` (default: `verbose`).
    ///
    /// # Errors
    ///
    /// Returns [`ZibalError::InvalidConfig`] if a variable is missing or
    /// invalid.
    pub fn from_env() -> Result<Self, ZibalError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ZibalError> {
        let merchant = var("ZIBAL_MERCHANT").ok_or(ZibalError::InvalidConfig)?;
        let callback_url = var("ZIBAL_CALLBACK_URL").ok_or(ZibalError::InvalidConfig)?;
        let log_level = var("ZIBAL_LOG_LEVEL")
            .map(|level| level.parse::<LogLevel>())
            .transpose()?
            .unwrap_or_default();

        Self::new(merchant, callback_url, log_level)
    }

    /// Merchant identifier.
    #[must_use]
    pub fn merchant(&self) -> &str {
        &self.merchant
    }

    /// Callback URL the payer returns to.
    #[must_use]
    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    /// Logging verbosity.
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Whether the configuration can be used for gateway calls.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.merchant.is_empty()
            && !self.callback_url.is_empty()
            && Url::parse(&self.callback_url).is_ok()
    }
}
