//! Mutation inputs and server-reported validation errors.

use serde::{Deserialize, Serialize};

use super::id::OrderId;

/// Changes to apply to an existing order (`OrderInput`).
///
/// Only `id` is required; `None` fields are left out of the request and so
/// left unchanged on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    /// The order to update.
    pub id: OrderId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Replaces every existing tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<MailingAddressInput>,
    /// Replaces every existing custom attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<Vec<Attribute>>,
}

impl OrderInput {
    /// An input that changes nothing yet.
    #[must_use]
    pub fn new(id: impl Into<OrderId>) -> Self {
        Self {
            id: id.into(),
            note: None,
            tags: None,
            email: None,
            phone: None,
            po_number: None,
            shipping_address: None,
            custom_attributes: None,
        }
    }
}

/// Shipping address replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailingAddressInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A key/value custom attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

/// A field-level validation failure reported in a mutation payload.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}", format_user_error(.field.as_deref(), .message))]
pub struct UserError {
    /// Path to the offending input field (e.g., `["input", "email"]`).
    #[serde(default)]
    pub field: Option<Vec<String>>,
    /// Human-readable message.
    pub message: String,
}

/// `input.email: message`, or just the message when no field is named.
fn format_user_error(field: Option<&[String]>, message: &str) -> String {
    match field {
        Some(path) if !path.is_empty() => format!("{}: {message}", path.join(".")),
        _ => message.to_owned(),
    }
}

/// Every user error from one mutation call.
///
/// Displayed as `field.path: message` pairs joined by `"; "` so the caller
/// sees all problems at once.
#[derive(thiserror::Error, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[error("{}", join_user_errors(.0))]
pub struct UserErrors(Vec<UserError>);

impl UserErrors {
    /// Wrap a list of user errors.
    #[must_use]
    pub const fn new(errors: Vec<UserError>) -> Self {
        Self(errors)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<UserError>> for UserErrors {
    fn from(errors: Vec<UserError>) -> Self {
        Self(errors)
    }
}

fn join_user_errors(errors: &[UserError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
