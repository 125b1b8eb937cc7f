//! Monetary amounts using decimal arithmetic.
//!
//! Shopify serializes every amount as a decimal string (`"19.99"`) to keep
//! precision; these types deserialize straight into [`Decimal`].

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount with its ISO 4217 currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency_code)
    }
}

/// An amount without a currency tag.
///
/// The light order profile only asks for `totalReceivedSet.shopMoney.amount`;
/// the shop currency is implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyAmount {
    /// Amount in the shop currency.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

/// Shopify's `MoneyBag`: the same amount in shop and presentment currencies.
///
/// Only the shop currency is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyBag<M = Money> {
    /// Amount in the shop's currency.
    pub shop_money: M,
}

/// ISO 4217 currency codes.
///
/// Common codes get their own variant; anything else the server sends is
/// kept verbatim in [`CurrencyCode::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
    NZD,
    JPY,
    /// Any other ISO 4217 code.
    Other(String),
}

impl CurrencyCode {
    /// The three-letter code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
            Self::NZD => "NZD",
            Self::JPY => "JPY",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "USD" => Self::USD,
            "EUR" => Self::EUR,
            "GBP" => Self::GBP,
            "CAD" => Self::CAD,
            "AUD" => Self::AUD,
            "NZD" => Self::NZD,
            "JPY" => Self::JPY,
            _ => Self::Other(code),
        }
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        match code {
            CurrencyCode::Other(code) => code,
            known => known.code().to_owned(),
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
