//! Order commands.
//!
//! Each command returns pretty-printed JSON for the caller to print.
//! `list` and `list_all` need a bulk export backend, which this binary does
//! not ship, so they are not exposed here.

use shopify_orders::shopify_orders_core::{ListOptions, OrderId, OrderInput};
use shopify_orders::{
    AdminClient, ConfigError, NoBulkExecutor, OrderServiceError, OrderStore, OrderService,
    OrdersConfig,
};
use thiserror::Error;

/// Errors that can occur while running an order command.
#[derive(Debug, Error)]
pub enum OrdersCommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The order service returned an error.
    #[error(transparent)]
    Service(#[from] OrderServiceError),

    /// The order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The update had nothing to change.
    #[error("Nothing to update: pass --note, --tag or --email")]
    EmptyUpdate,

    /// Output could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Arguments for `orders page`.
#[derive(Debug, Default)]
pub struct PageArgs {
    pub query: String,
    pub first: Option<u32>,
    pub last: Option<u32>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub reverse: bool,
}

impl PageArgs {
    fn into_options(self) -> ListOptions {
        ListOptions {
            query: self.query,
            first: self.first,
            last: self.last,
            after: self.after.map(Into::into),
            before: self.before.map(Into::into),
            reverse: self.reverse,
        }
    }
}

/// Arguments for `orders update`.
#[derive(Debug, Default)]
pub struct UpdateArgs {
    pub id: String,
    pub note: Option<String>,
    pub tags: Vec<String>,
    pub email: Option<String>,
}

impl UpdateArgs {
    fn into_input(self) -> Result<OrderInput, OrdersCommandError> {
        if self.note.is_none() && self.tags.is_empty() && self.email.is_none() {
            return Err(OrdersCommandError::EmptyUpdate);
        }

        let mut input = OrderInput::new(self.id);
        input.note = self.note;
        input.tags = (!self.tags.is_empty()).then_some(self.tags);
        input.email = self.email;
        Ok(input)
    }
}

/// Build an order service from the environment.
pub fn connect() -> Result<impl OrderStore, OrdersCommandError> {
    let config = OrdersConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    let client = AdminClient::new(&config)?;
    Ok(OrderService::new(client, NoBulkExecutor))
}

/// Fetch one order.
pub async fn get(store: &impl OrderStore, id: &str) -> Result<String, OrdersCommandError> {
    let order = store
        .get(&OrderId::new(id))
        .await?
        .ok_or_else(|| OrdersCommandError::NotFound(id.to_owned()))?;

    Ok(serde_json::to_string_pretty(&order)?)
}

/// Fetch one page of orders.
pub async fn page(store: &impl OrderStore, args: PageArgs) -> Result<String, OrdersCommandError> {
    let page = store.list_after_cursor(&args.into_options()).await?;
    tracing::info!(
        count = page.orders.len(),
        has_next_page = page.has_next_page,
        "Fetched page"
    );

    Ok(serde_json::to_string_pretty(&page)?)
}

/// Update an order and report the ID that was updated.
pub async fn update(
    store: &impl OrderStore,
    args: UpdateArgs,
) -> Result<String, OrdersCommandError> {
    let input = args.into_input()?;
    store.update(&input).await?;
    tracing::info!(order_id = %input.id, "Order updated");

    Ok(serde_json::to_string_pretty(
        &serde_json::json!({ "updated": input.id }),
    )?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use async_trait::async_trait;
    use shopify_orders::shopify_orders_core::{Order, OrderPage, UserError, UserErrors};

    use super::*;

    /// Store that finds nothing and rejects every update.
    struct EmptyStore;

    #[async_trait]
    impl OrderStore for EmptyStore {
        async fn get(&self, _id: &OrderId) -> Result<Option<Order>, OrderServiceError> {
            Ok(None)
        }

        async fn list(&self, _opts: &ListOptions) -> Result<Vec<Order>, OrderServiceError> {
            Ok(Vec::new())
        }

        async fn list_all(&self) -> Result<Vec<Order>, OrderServiceError> {
            Ok(Vec::new())
        }

        async fn list_after_cursor(
            &self,
            _opts: &ListOptions,
        ) -> Result<OrderPage, OrderServiceError> {
            Ok(OrderPage::default())
        }

        async fn update(&self, _input: &OrderInput) -> Result<(), OrderServiceError> {
            Err(OrderServiceError::UserErrors(UserErrors::from(vec![
                UserError {
                    field: Some(vec!["input".to_string(), "email".to_string()]),
                    message: "Email is invalid".to_string(),
                },
            ])))
        }
    }

    #[tokio::test]
    async fn test_get_missing_order_is_not_found() {
        let err = get(&EmptyStore, "gid://shopify/Order/404").await.unwrap_err();
        assert_eq!(err.to_string(), "Order not found: gid://shopify/Order/404");
    }

    #[tokio::test]
    async fn test_empty_page_prints_empty_orders() {
        let out = page(&EmptyStore, PageArgs::default()).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["orders"], serde_json::json!([]));
        assert_eq!(json["hasNextPage"], serde_json::json!(false));
    }

    #[tokio::test]
    async fn test_update_reports_user_errors() {
        let args = UpdateArgs {
            id: "gid://shopify/Order/1".to_string(),
            email: Some("not-an-email".to_string()),
            ..UpdateArgs::default()
        };
        let err = update(&EmptyStore, args).await.unwrap_err();

        assert_eq!(err.to_string(), "user errors: input.email: Email is invalid");
    }

    #[test]
    fn test_update_requires_a_change() {
        let args = UpdateArgs {
            id: "gid://shopify/Order/1".to_string(),
            ..UpdateArgs::default()
        };
        assert!(matches!(args.into_input(), Err(OrdersCommandError::EmptyUpdate)));
    }

    #[test]
    fn test_page_args_map_to_options() {
        let opts = PageArgs {
            query: "tag:vip".to_string(),
            last: Some(10),
            before: Some("c1".to_string()),
            ..PageArgs::default()
        }
        .into_options();

        assert_eq!(opts.last, Some(10));
        assert_eq!(opts.before.as_ref().map(|c| c.as_str()), Some("c1"));
        assert_eq!(opts.first, None);
    }
}
