//! Mutation payload handling.

use serde::Deserialize;
use serde_json::Value;
use shopify_orders_core::{OrderInput, UserError, UserErrors};

use crate::executor::Variables;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderUpdateData {
    order_update: Option<OrderUpdatePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderUpdatePayload {
    #[serde(default)]
    user_errors: Vec<UserError>,
}

/// The mutation's single variable: `{"input": <OrderInput>}`.
pub(crate) fn update_variables(input: &OrderInput) -> Result<Variables, serde_json::Error> {
    let mut vars = Variables::new();
    vars.insert("input".to_owned(), serde_json::to_value(input)?);
    Ok(vars)
}

/// Outcome of an `orderUpdate` response.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum UpdateOutcome {
    Applied,
    /// The server returned a null payload; nothing to report.
    NoPayload,
    Rejected(UserErrors),
}

/// Collect every user error from an `orderUpdate` response.
pub(crate) fn update_outcome(data: Value) -> Result<UpdateOutcome, serde_json::Error> {
    let OrderUpdateData { order_update } = serde_json::from_value(data)?;

    Ok(match order_update {
        None => UpdateOutcome::NoPayload,
        Some(payload) if payload.user_errors.is_empty() => UpdateOutcome::Applied,
        Some(payload) => UpdateOutcome::Rejected(payload.user_errors.into()),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_no_user_errors_is_applied() {
        let outcome = update_outcome(json!({"orderUpdate": {"userErrors": []}})).unwrap();
        assert_eq!(outcome, UpdateOutcome::Applied);
    }

    #[test]
    fn test_null_payload() {
        let outcome = update_outcome(json!({"orderUpdate": null})).unwrap();
        assert_eq!(outcome, UpdateOutcome::NoPayload);
    }

    #[test]
    fn test_all_user_errors_collected() {
        let outcome = update_outcome(json!({"orderUpdate": {"userErrors": [
            {"field": ["input", "email"], "message": "Email is invalid"},
            {"field": ["input", "tags"], "message": "Tags are too long"}
        ]}}))
        .unwrap();

        let UpdateOutcome::Rejected(errors) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_update_variables_wrap_input() {
        let mut input = OrderInput::new("gid://shopify/Order/1");
        input.tags = Some(vec!["rush".to_string()]);

        let vars = update_variables(&input).unwrap();
        assert_eq!(
            Value::Object(vars),
            json!({"input": {"id": "gid://shopify/Order/1", "tags": ["rush"]}})
        );
    }
}
