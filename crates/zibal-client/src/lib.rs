//! Zibal payment gateway client SDK.
//!
//! This crate opens payments, builds the redirect URL for the payer and
//! verifies payments against the Zibal gateway.
//!
//! # Example
//!
//! ```no_run
//! use zibal_client::{LogLevel, PaymentRequest, ZibalClient};
//!
//! # async fn example() -> Result<(), zibal_client::ZibalError> {
//! let mut client = ZibalClient::new();
//! client.initialize("zibal", "https://shop.example.com/callback", LogLevel::Error)?;
//!
//! // Open a payment and send the payer to the gateway
//! let response = client.request_payment(PaymentRequest::new(1500)).await?;
//! if let Some(track_id) = response.body.track_id {
//!     println!("Pay at: {:?}", client.start_url(track_id));
//!
//!     // After the callback fires
//!     let verified = client.verify_payment(track_id).await?;
//!     println!("Status: {:?}", verified.body.status);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
mod error;
mod gateway;
mod transport;

pub use client::{PaymentRequest, ZibalClient};
pub use config::{Config, LogLevel};
pub use error::ZibalError;
pub use gateway::{Gateway, GatewayResponse, DEFAULT_BASE_URL};
pub use transport::{ReqwestTransport, ResponseMeta, Transport, TransportError, TransportResponse};
pub use zibal_core::{
    RequestInitBody, RequestInitResponse, Status, UnknownStatusCode, VerifyBody, VerifyResponse,
};
