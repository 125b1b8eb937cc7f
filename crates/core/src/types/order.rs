//! Order domain types.
//!
//! An [`Order`] is decoded once from a response and never mutated locally:
//! changes go to the server through [`OrderInput`](super::OrderInput) and a
//! fresh read is needed to observe them.
//!
//! Two field profiles exist. Single-order and bulk reads use the full
//! profile (addresses, statuses, transactions, priced line items); cursor
//! pages use the light profile (summary fields, fulfillment-oriented line
//! items). Fields only one profile requests are `Option`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{CustomerId, LegacyResourceId, LineItemId, OrderId};
use super::price::Money;
use super::status::{FinancialStatus, FulfillmentStatus};

/// A Shopify order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Global ID (`gid://shopify/Order/...`).
    pub id: OrderId,
    /// Numeric ID shown in the admin UI.
    pub legacy_resource_id: LegacyResourceId,
    /// Display name (e.g., `#1001`).
    pub name: String,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
    /// When the order was processed. Full profile only.
    pub processed_at: Option<DateTime<Utc>>,
    /// Contact email. Full profile only.
    pub email: Option<String>,
    /// Payment state. Full profile only.
    pub financial_status: Option<FinancialStatus>,
    /// Fulfillment state. Full profile only.
    pub fulfillment_status: Option<FulfillmentStatus>,
    /// The customer who placed the order, if any.
    pub customer: Option<CustomerRef>,
    /// Billing address. Full profile only.
    pub billing_address: Option<Address>,
    /// Shipping address.
    pub shipping_address: Option<Address>,
    /// Shipping method title. Light profile only.
    pub shipping_line: Option<String>,
    /// Total received in shop currency. Light profile only.
    pub total_received: Option<Decimal>,
    /// Payment transactions. Empty for the light profile.
    pub transactions: Vec<Transaction>,
    /// Line items in server order.
    pub line_items: Vec<LineItem>,
    /// Free-text tags.
    pub tags: Vec<String>,
    /// Staff note. Light profile only.
    pub note: Option<String>,
}

/// Weak reference to the ordering customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRef {
    /// Global ID. Light profile only.
    pub id: Option<CustomerId>,
    /// Numeric customer ID.
    pub legacy_resource_id: Option<LegacyResourceId>,
    /// First name. Light profile only.
    pub first_name: Option<String>,
    /// Display name. Light profile only.
    pub display_name: Option<String>,
    /// Email. Light profile only.
    pub email: Option<String>,
}

/// Mailing address value record.
///
/// The full profile asks for codes (`provinceCode`, `countryCodeV2`), the
/// light profile for names (`province`, `country`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub name: Option<String>,
    pub company: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub province: Option<String>,
    pub province_code: Option<String>,
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2 code.
    #[serde(alias = "countryCodeV2")]
    pub country_code: Option<String>,
    pub phone: Option<String>,
}

/// A payment transaction on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Payment gateway name.
    pub gateway: Option<String>,
    /// Gateway-side payment ID.
    pub payment_id: Option<String>,
}

/// A line item on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: LineItemId,
    pub sku: Option<String>,
    pub quantity: i64,
    /// Profile-specific fields.
    pub detail: LineItemDetail,
}

/// The profile-specific half of a [`LineItem`].
///
/// A response populates exactly one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "profile", rename_all = "snake_case")]
pub enum LineItemDetail {
    /// Pricing detail, from single-order and bulk reads.
    #[serde(rename_all = "camelCase")]
    Full {
        /// Numeric ID of the product, if it still exists.
        product: Option<LegacyResourceId>,
        name: String,
        original_unit_price: Money,
        discounted_unit_price: Money,
    },
    /// Fulfillment detail, from cursor pages.
    #[serde(rename_all = "camelCase")]
    Light {
        fulfillable_quantity: i64,
        /// Raw fulfillment status string (e.g., `fulfilled`).
        fulfillment_status: String,
        vendor: Option<String>,
        title: String,
        variant_title: Option<String>,
    },
}
