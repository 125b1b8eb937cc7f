//! The order service: one interface over two retrieval strategies.
//!
//! Bounded reads (`get`, `list_after_cursor`) and `update` make one
//! synchronous round trip through the [`QueryExecutor`]. Unbounded reads
//! (`list`, `list_all`) always go through the [`BulkExecutor`], whatever
//! the expected result size; a small filter still runs a full export.
//!
//! The service holds no mutable state. Each call builds its document,
//! makes one executor call, decodes a fresh result and returns it; nothing
//! is retried, cached or spawned.

use async_trait::async_trait;
use shopify_orders_core::{ListOptions, Order, OrderId, OrderInput, OrderPage};
use tracing::{debug, instrument, warn};

use crate::decode;
use crate::error::{ExecutorError, OrderServiceError};
use crate::executor::{BulkExecutor, QueryExecutor, Variables};
use crate::mutation::{UpdateOutcome, update_outcome, update_variables};
use crate::pagination::PageWindow;
use crate::queries;

/// How an operation reaches the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One query or mutation round trip.
    Synchronous,
    /// An asynchronous export materialized by the bulk executor.
    Bulk,
}

/// The five order operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get,
    List,
    ListAll,
    ListAfterCursor,
    Update,
}

impl Operation {
    /// The strategy the operation always uses.
    #[must_use]
    pub const fn strategy(self) -> Strategy {
        match self {
            Self::List | Self::ListAll => Strategy::Bulk,
            Self::Get | Self::ListAfterCursor | Self::Update => Strategy::Synchronous,
        }
    }
}

/// Order access interface.
///
/// Implemented by [`OrderService`]; depend on this trait to swap in a fake.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Fetch one order with full detail. `Ok(None)` means it does not exist.
    async fn get(&self, id: &OrderId) -> Result<Option<Order>, OrderServiceError>;

    /// Every order matching `opts.query`. Pagination fields are ignored.
    async fn list(&self, opts: &ListOptions) -> Result<Vec<Order>, OrderServiceError>;

    /// Every order.
    async fn list_all(&self) -> Result<Vec<Order>, OrderServiceError>;

    /// One page of orders with light detail.
    async fn list_after_cursor(&self, opts: &ListOptions)
    -> Result<OrderPage, OrderServiceError>;

    /// Apply `input` to an existing order.
    async fn update(&self, input: &OrderInput) -> Result<(), OrderServiceError>;
}

/// Order service over a query executor and a bulk executor.
#[derive(Debug, Clone)]
pub struct OrderService<Q, B> {
    queries: Q,
    bulk: B,
}

impl<Q, B> OrderService<Q, B>
where
    Q: QueryExecutor,
    B: BulkExecutor,
{
    /// Create a service.
    #[must_use]
    pub const fn new(queries: Q, bulk: B) -> Self {
        Self { queries, bulk }
    }

    /// Get an order by ID.
    ///
    /// # Arguments
    ///
    /// * `id` - Shopify order ID (e.g., `gid://shopify/Order/123`)
    ///
    /// # Errors
    ///
    /// Returns [`OrderServiceError::Query`] if the request fails. An ID that
    /// resolves to nothing is `Ok(None)`, not an error.
    #[instrument(skip(self), fields(order_id = %id, strategy = ?Operation::Get.strategy()))]
    pub async fn get(&self, id: &OrderId) -> Result<Option<Order>, OrderServiceError> {
        let document = queries::order_by_id()?.render()?;
        let mut variables = Variables::new();
        variables.insert("id".to_owned(), id.as_str().into());

        let data = self
            .queries
            .query(&document, variables)
            .await
            .map_err(OrderServiceError::Query)?;
        let order = decode::single_order(data).map_err(query_json_error)?;

        debug!(found = order.is_some(), "order lookup complete");
        Ok(order)
    }

    /// Get every order matching a filter through a bulk export.
    ///
    /// Only `opts.query` is used; bulk exports have no page size.
    ///
    /// # Errors
    ///
    /// Returns [`OrderServiceError::BulkQuery`] if the export fails.
    #[instrument(skip(self, opts), fields(query = %opts.query, strategy = ?Operation::List.strategy()))]
    pub async fn list(&self, opts: &ListOptions) -> Result<Vec<Order>, OrderServiceError> {
        self.bulk_list(&opts.query).await
    }

    /// Get every order through a bulk export.
    ///
    /// # Errors
    ///
    /// Returns [`OrderServiceError::BulkQuery`] if the export fails.
    #[instrument(skip(self), fields(strategy = ?Operation::ListAll.strategy()))]
    pub async fn list_all(&self) -> Result<Vec<Order>, OrderServiceError> {
        self.bulk_list("").await
    }

    async fn bulk_list(&self, filter: &str) -> Result<Vec<Order>, OrderServiceError> {
        let document = queries::bulk_orders(filter)?.render()?;

        let records = self
            .bulk
            .bulk_query(&document)
            .await
            .map_err(OrderServiceError::BulkQuery)?;
        let orders = decode::bulk_orders(records)
            .map_err(|e| OrderServiceError::BulkQuery(ExecutorError::Json(e)))?;

        debug!(count = orders.len(), "bulk export decoded");
        Ok(orders)
    }

    /// Get one page of orders.
    ///
    /// Send `first`/`after` to page forward from the returned
    /// `last_cursor`, or `last`/`before` to page back from `first_cursor`.
    /// When both halves of a pair are set, `after` and `first` win.
    ///
    /// An empty page is a normal result: no orders, no cursors.
    ///
    /// # Errors
    ///
    /// Returns [`OrderServiceError::Query`] if the request fails.
    #[instrument(skip(self, opts), fields(query = %opts.query, strategy = ?Operation::ListAfterCursor.strategy()))]
    pub async fn list_after_cursor(
        &self,
        opts: &ListOptions,
    ) -> Result<OrderPage, OrderServiceError> {
        let document = queries::orders_page()?.render()?;
        let window = PageWindow::from_options(opts);
        let variables = window.variables(&opts.query, opts.reverse);

        let data = self
            .queries
            .query(&document, variables)
            .await
            .map_err(OrderServiceError::Query)?;
        let page = decode::orders_page(data).map_err(query_json_error)?;

        debug!(
            count = page.orders.len(),
            has_next_page = page.has_next_page,
            "order page decoded"
        );
        Ok(page)
    }

    /// Update an order.
    ///
    /// Every user error in the response is returned together in one
    /// [`OrderServiceError::UserErrors`]. Read the order again to see the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`OrderServiceError::Mutation`] if the request fails, or
    /// [`OrderServiceError::UserErrors`] if the server rejects the input.
    #[instrument(skip(self, input), fields(order_id = %input.id, strategy = ?Operation::Update.strategy()))]
    pub async fn update(&self, input: &OrderInput) -> Result<(), OrderServiceError> {
        let document = queries::order_update().render()?;
        let variables = update_variables(input).map_err(mutation_json_error)?;

        let data = self
            .queries
            .mutate(&document, variables)
            .await
            .map_err(OrderServiceError::Mutation)?;

        match update_outcome(data).map_err(mutation_json_error)? {
            UpdateOutcome::Applied => Ok(()),
            UpdateOutcome::NoPayload => {
                warn!("orderUpdate returned no payload");
                Ok(())
            }
            UpdateOutcome::Rejected(errors) => {
                warn!(count = errors.len(), %errors, "order update rejected");
                Err(OrderServiceError::UserErrors(errors))
            }
        }
    }
}

#[async_trait]
impl<Q, B> OrderStore for OrderService<Q, B>
where
    Q: QueryExecutor,
    B: BulkExecutor,
{
    async fn get(&self, id: &OrderId) -> Result<Option<Order>, OrderServiceError> {
        Self::get(self, id).await
    }

    async fn list(&self, opts: &ListOptions) -> Result<Vec<Order>, OrderServiceError> {
        Self::list(self, opts).await
    }

    async fn list_all(&self) -> Result<Vec<Order>, OrderServiceError> {
        Self::list_all(self).await
    }

    async fn list_after_cursor(
        &self,
        opts: &ListOptions,
    ) -> Result<OrderPage, OrderServiceError> {
        Self::list_after_cursor(self, opts).await
    }

    async fn update(&self, input: &OrderInput) -> Result<(), OrderServiceError> {
        Self::update(self, input).await
    }
}

const fn query_json_error(e: serde_json::Error) -> OrderServiceError {
    OrderServiceError::Query(ExecutorError::Json(e))
}

const fn mutation_json_error(e: serde_json::Error) -> OrderServiceError {
    OrderServiceError::Mutation(ExecutorError::Json(e))
}
