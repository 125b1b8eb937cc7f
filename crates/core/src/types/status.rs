//! Status enums reported on orders.
//!
//! Values arrive in SCREAMING_SNAKE_CASE. Shopify adds enum values over API
//! versions, so each enum carries an `Other` catch-all rather than failing
//! to decode a whole page over one unfamiliar status.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Order financial status (`displayFinancialStatus`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinancialStatus {
    #[default]
    Pending,
    Authorized,
    PartiallyPaid,
    Paid,
    PartiallyRefunded,
    Refunded,
    Voided,
    Expired,
    /// A status introduced after this crate was written.
    #[serde(other)]
    Other,
}

impl fmt::Display for FinancialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Authorized => write!(f, "Authorized"),
            Self::PartiallyPaid => write!(f, "Partially paid"),
            Self::Paid => write!(f, "Paid"),
            Self::PartiallyRefunded => write!(f, "Partially refunded"),
            Self::Refunded => write!(f, "Refunded"),
            Self::Voided => write!(f, "Voided"),
            Self::Expired => write!(f, "Expired"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// Order fulfillment status (`displayFulfillmentStatus`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentStatus {
    #[default]
    Unfulfilled,
    PartiallyFulfilled,
    Fulfilled,
    Restocked,
    PendingFulfillment,
    Open,
    InProgress,
    OnHold,
    Scheduled,
    RequestDeclined,
    /// A status introduced after this crate was written.
    #[serde(other)]
    Other,
}

impl fmt::Display for FulfillmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unfulfilled => write!(f, "Unfulfilled"),
            Self::PartiallyFulfilled => write!(f, "Partially fulfilled"),
            Self::Fulfilled => write!(f, "Fulfilled"),
            Self::Restocked => write!(f, "Restocked"),
            Self::PendingFulfillment => write!(f, "Pending fulfillment"),
            Self::Open => write!(f, "Open"),
            Self::InProgress => write!(f, "In progress"),
            Self::OnHold => write!(f, "On hold"),
            Self::Scheduled => write!(f, "Scheduled"),
            Self::RequestDeclined => write!(f, "Request declined"),
            Self::Other => write!(f, "Other"),
        }
    }
}
