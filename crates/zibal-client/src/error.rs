//! Client error types.

use crate::transport::ResponseMeta;

/// Errors reported by the Zibal client.
///
/// Each kind has a stable negative code. Codes in `-199..=-100` are internal
/// (detected by the client before talking to the gateway); codes at or below
/// `-200` concern the exchange with the gateway.
#[derive(Debug, thiserror::Error)]
pub enum ZibalError {
    /// Configuration is missing or invalid.
    #[error("Invalid Configuration")]
    InvalidConfig,

    /// The destination URL could not be built.
    #[error("Bad URL: {url}")]
    BadUrl {
        /// The URL string that failed to parse.
        url: String,
    },

    /// The outbound body could not be serialized.
    #[error("Bad Body: {body}")]
    BadBody {
        /// Debug rendering of the body that failed to encode.
        body: String,
    },

    /// The exchange failed or its response could not be decoded.
    #[error("Bad Response: {}", describe(.response.as_ref()))]
    BadResponse {
        /// Response metadata, when the gateway answered at all.
        response: Option<ResponseMeta>,
    },

    /// The response bytes were unusable.
    #[error("Bad ResponseData: {} bytes", .data.len())]
    BadResponseData {
        /// The raw response bytes.
        data: Vec<u8>,
    },

    /// A status code outside the known set.
    #[error("Invalid Status Code")]
    InvalidStatusCode,
}

impl ZibalError {
    /// Stable numeric code for this error kind.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::InvalidConfig => -100,
            Self::BadUrl { .. } => -101,
            Self::BadBody { .. } => -102,
            Self::BadResponse { .. } => -200,
            Self::BadResponseData { .. } => -201,
            Self::InvalidStatusCode => -202,
        }
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Whether the error was detected by the client itself.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self.code(), -199..=-100)
    }

    /// Whether the error concerns the network exchange or its payload.
    #[must_use]
    pub const fn is_endpoint(&self) -> bool {
        self.code() <= -200
    }

    pub(crate) fn bad_response(response: Option<ResponseMeta>) -> Self {
        Self::BadResponse { response }
    }
}

fn describe(response: Option<&ResponseMeta>) -> String {
    match response {
        Some(meta) => format!("{} {}", meta.status, meta.url),
        None => "no response".to_string(),
    }
}
