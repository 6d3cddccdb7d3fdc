//! Gateway result codes.
//!
//! Every response from the gateway carries an integer code. [`Status`] is the
//! closed set of outcomes those codes stand for. The mapping is fixed: every
//! variant has exactly one wire code, and [`Status::from_code`] is its inverse
//! over the 23 known codes.
//!
//! On the wire a status is a bare JSON integer, so the type serializes through
//! `i32` and refuses to deserialize an unknown code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer the gateway returned that does not name any [`Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid status code: {0}")]
pub struct UnknownStatusCode(pub i32);

/// Outcome of a gateway call, as identified by its wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Status {
    // Payment state, reported by verification.
    /// Awaiting payment (`-1`).
    Waiting,
    /// Gateway-side internal error (`-2`).
    InternalError,
    /// Paid; `verified` tells whether the payment has been confirmed (`1`) or
    /// not yet (`2`).
    Paid {
        /// Whether the payment was verified.
        verified: bool,
    },
    /// Cancelled by the payer (`3`).
    CancelledByUser,
    /// Card number is invalid (`4`).
    InvalidCardNumber,
    /// Insufficient account balance (`5`).
    InsufficientCredit,
    /// Wrong card password (`6`).
    WrongPassword,
    /// Too many requests (`7`).
    ExceededRequestLimit,
    /// Daily online payment count exceeded (`8`).
    ExceededPaymentLimit,
    /// Daily online payment amount exceeded (`9`).
    ExceededPaymentAmount,
    /// Card issuer is invalid (`10`).
    InvalidCardIssuer,
    /// Switch failure (`11`).
    SwitchFailure,
    /// Card is not accessible (`12`).
    InaccessibleCard,

    // Call result.
    /// Request accepted / payment confirmed (`100`).
    Confirmed,
    /// Merchant not found (`102`).
    MerchantNotFound,
    /// Merchant is inactive (`103`).
    MerchantInactive,
    /// Merchant is invalid (`104`).
    MerchantInvalid,
    /// Amount is below the gateway minimum (`105`).
    InvalidAmountValue,
    /// Callback URL is invalid (`106`).
    InvalidCallbackUrl,
    /// Payment was already confirmed (`201`).
    AlreadyConfirmed,
    /// Order is unpaid or the payment failed (`202`).
    IncompletePayment,
    /// Track id is invalid (`203`).
    InvalidTrackId,
}

impl Status {
    /// Every status, in wire-code order.
    pub const ALL: [Self; 23] = [
        Self::Waiting,
        Self::InternalError,
        Self::Paid { verified: true },
        Self::Paid { verified: false },
        Self::CancelledByUser,
        Self::InvalidCardNumber,
        Self::InsufficientCredit,
        Self::WrongPassword,
        Self::ExceededRequestLimit,
        Self::ExceededPaymentLimit,
        Self::ExceededPaymentAmount,
        Self::InvalidCardIssuer,
        Self::SwitchFailure,
        Self::InaccessibleCard,
        Self::Confirmed,
        Self::MerchantNotFound,
        Self::MerchantInactive,
        Self::MerchantInvalid,
        Self::InvalidAmountValue,
        Self::InvalidCallbackUrl,
        Self::AlreadyConfirmed,
        Self::IncompletePayment,
        Self::InvalidTrackId,
    ];

    /// Look up the status for a wire code, or `None` if the code is unknown.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    /// The wire code for this status.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Waiting => -1,
            Self::InternalError => -2,
            Self::Paid { verified: true } => 1,
            Self::Paid { verified: false } => 2,
            Self::CancelledByUser => 3,
            Self::InvalidCardNumber => 4,
            Self::InsufficientCredit => 5,
            Self::WrongPassword => 6,
            Self::ExceededRequestLimit => 7,
            Self::ExceededPaymentLimit => 8,
            Self::ExceededPaymentAmount => 9,
            Self::InvalidCardIssuer => 10,
            Self::SwitchFailure => 11,
            Self::InaccessibleCard => 12,
            Self::Confirmed => 100,
            Self::MerchantNotFound => 102,
            Self::MerchantInactive => 103,
            Self::MerchantInvalid => 104,
            Self::InvalidAmountValue => 105,
            Self::InvalidCallbackUrl => 106,
            Self::AlreadyConfirmed => 201,
            Self::IncompletePayment => 202,
            Self::InvalidTrackId => 203,
        }
    }

    /// Human-readable (Persian) description, as shown to payers by the gateway.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Waiting => "در انتظار پرداخت",
            Self::InternalError => "خطای داخلی",
            Self::Paid { verified: true } => "پرداخت شده - تاییدشده",
            Self::Paid { verified: false } => "پرداخت شده - تاییدنشده",
            Self::CancelledByUser => "لغوشده توسط کاربر",
            Self::InvalidCardNumber => "شماره کارت نامعتبر می‌باشد",
            Self::InsufficientCredit => "موجودی حساب کافی نمی‌باشد",
            Self::WrongPassword => "رمز واردشده اشتباه می‌باشد",
            Self::ExceededRequestLimit => "تعداد درخواست‌ها بیش از حد مجاز می‌باشد",
            Self::ExceededPaymentLimit => "تعداد پرداخت اینترنتی روزانه بیش از حد مجاز می‌باشد",
            Self::ExceededPaymentAmount => "مبلغ پرداخت اینترنتی روزانه بیش از حد مجاز می‌باشد",
            Self::InvalidCardIssuer => "صادرکننده‌ی کارت نامعتبر می‌باشد",
            Self::SwitchFailure => "خطای سوییچ",
            Self::InaccessibleCard => "کارت قابل دسترسی نمی‌باشد",
            Self::Confirmed => "با موفقیت تایید شد",
            Self::MerchantNotFound => "{merchant} یافت نشد",
            Self::MerchantInactive => "{merchant} غیرفعال",
            Self::MerchantInvalid => "{merchant} نامعتبر",
            Self::InvalidAmountValue => "{amount} بایستی بزرگتر از 1,000 ریال باشد",
            Self::InvalidCallbackUrl => "{callbackUrl} نامعتبر می‌باشد (شروع با http و یا https)",
            Self::AlreadyConfirmed => "قبلا تایید شده",
            Self::IncompletePayment => "سفارش پرداخت نشده یا ناموفق بوده است",
            Self::InvalidTrackId => "{trackId} نامعتبر می‌باشد",
        }
    }
}

impl TryFrom<i32> for Status {
    type Error = UnknownStatusCode;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(UnknownStatusCode(code))
    }
}

impl From<Status> for i32 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
