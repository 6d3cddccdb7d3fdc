//! Core types for the Zibal payment gateway.
//!
//! This crate holds the pure data shared by clients of the gateway:
//!
//! - **Status codes**: [`Status`], the closed mapping between the gateway's
//!   integer result codes and named outcomes
//! - **Wire messages**: [`RequestInitBody`], [`RequestInitResponse`],
//!   [`VerifyBody`], [`VerifyResponse`]
//!
//! # Amounts
//!
//! Amounts are `i64` in the smallest currency unit (rials), as the gateway
//! expects them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod messages;
pub mod status;

pub use messages::{RequestInitBody, RequestInitResponse, VerifyBody, VerifyResponse};
pub use status::{Status, UnknownStatusCode};
