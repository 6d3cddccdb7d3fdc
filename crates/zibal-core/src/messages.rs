//! JSON bodies exchanged with the gateway.
//!
//! Field names follow the gateway's camelCase schema. Optional outbound fields
//! are omitted when unset rather than sent as `null`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::Status;

/// Body of `POST /request`, which opens a new payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestInitBody {
    /// Merchant identifier issued by the gateway.
    pub merchant: String,
    /// Where the payer is sent back to after paying.
    pub callback_url: String,
    /// Amount in the smallest currency unit (rials).
    pub amount: i64,
    /// Payer's mobile number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    /// Free-form description shown on the payment page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Merchant-side order identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

/// Response to `POST /request`.
///
/// `result` is kept as the raw integer so that an unknown code never prevents
/// the rest of the response from being read; [`Self::result_status`] maps it
/// on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestInitResponse {
    /// Raw result code.
    pub result: i32,
    /// Gateway message accompanying the result.
    pub message: String,
    /// Track id of the new payment, present when the request was accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_id: Option<i64>,
}

impl RequestInitResponse {
    /// The result code as a [`Status`], or `None` if the code is unknown.
    #[must_use]
    pub fn result_status(&self) -> Option<Status> {
        Status::from_code(self.result)
    }
}

/// Body of `POST /verify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyBody {
    /// Merchant identifier issued by the gateway.
    pub merchant: String,
    /// Track id returned by the payment request.
    pub track_id: i64,
}

/// Response to `POST /verify`.
///
/// Unlike `result`, the `status` field is typed: a code outside the known set
/// fails deserialization of the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    /// Raw result code of the verify call.
    pub result: i32,
    /// Gateway message accompanying the result.
    pub message: String,
    /// When the payment was made, in the gateway's local time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,
    /// Paid amount in rials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Payment status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl VerifyResponse {
    /// The result code as a [`Status`], or `None` if the code is unknown.
    #[must_use]
    pub fn result_status(&self) -> Option<Status> {
        Status::from_code(self.result)
    }

    /// `paid_at` parsed as a timestamp.
    ///
    /// Returns `None` when the field is absent or not an ISO-8601 local
    /// date-time.
    #[must_use]
    pub fn paid_at_time(&self) -> Option<NaiveDateTime> {
        self.paid_at.as_deref()?.parse().ok()
    }
}
