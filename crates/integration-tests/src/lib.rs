//! Integration tests for the Shopify order access layer.
//!
//! # Running Tests
//!
//! ```bash
//! # Offline tests against a scripted server
//! cargo test -p shopify-orders-integration-tests
//!
//! # Live tests against a development store
//! SHOPIFY_STORE=dev-shop.myshopify.com SHOPIFY_ADMIN_ACCESS_TOKEN=... \
//!     cargo test -p shopify-orders-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `service_contract` - Public API against [`ScriptedServer`]
//! - `orders_live` - Admin API round trips (ignored by default)

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use shopify_orders::{BulkExecutor, ExecutorError, QueryExecutor, Variables};

/// A request the scripted server received.
#[derive(Debug, Clone)]
pub struct Request {
    pub document: String,
    pub variables: Variables,
}

/// Executor that answers from a queue of canned responses, in order.
///
/// Query, mutation and bulk calls share one queue. Running out of
/// responses is reported as [`ExecutorError::MissingData`].
#[derive(Debug, Default)]
pub struct ScriptedServer {
    responses: Mutex<VecDeque<Result<Value, ExecutorError>>>,
    bulk: Mutex<VecDeque<Result<Vec<Value>, ExecutorError>>>,
    requests: Mutex<Vec<Request>>,
}

impl ScriptedServer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a `data` object for the next query or mutation.
    #[must_use]
    pub fn then_data(self, data: Value) -> Self {
        self.push(Ok(data));
        self
    }

    /// Queue a failure for the next query or mutation.
    #[must_use]
    pub fn then_error(self, error: ExecutorError) -> Self {
        self.push(Err(error));
        self
    }

    /// Queue records for the next bulk query.
    #[must_use]
    pub fn then_bulk(self, records: Vec<Value>) -> Self {
        lock(&self.bulk).push_back(Ok(records));
        self
    }

    /// Every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<Request> {
        lock(&self.requests).clone()
    }

    fn push(&self, response: Result<Value, ExecutorError>) {
        lock(&self.responses).push_back(response);
    }

    fn answer(&self, document: &str, variables: Variables) -> Result<Value, ExecutorError> {
        lock(&self.requests).push(Request {
            document: document.to_owned(),
            variables,
        });
        lock(&self.responses)
            .pop_front()
            .unwrap_or(Err(ExecutorError::MissingData))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[async_trait]
impl QueryExecutor for ScriptedServer {
    async fn query(&self, document: &str, variables: Variables) -> Result<Value, ExecutorError> {
        self.answer(document, variables)
    }

    async fn mutate(
        &self,
        document: &str,
        variables: Variables,
    ) -> Result<Value, ExecutorError> {
        self.answer(document, variables)
    }
}

#[async_trait]
impl BulkExecutor for ScriptedServer {
    async fn bulk_query(&self, document: &str) -> Result<Vec<Value>, ExecutorError> {
        lock(&self.requests).push(Request {
            document: document.to_owned(),
            variables: Variables::new(),
        });
        lock(&self.bulk)
            .pop_front()
            .unwrap_or(Err(ExecutorError::MissingData))
    }
}
