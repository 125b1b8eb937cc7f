//! Contracts for the two collaborators the order service runs on.
//!
//! Transport, authentication, rate limiting and bulk-job polling all live
//! behind these traits. Both hand back raw JSON; typed decoding happens in
//! the service so the traits stay object safe.
//!
//! # Cancellation
//!
//! Every call is a future: dropping it cancels the request. Deadlines are
//! the caller's to impose (`tokio::time::timeout`, `tokio::select!`);
//! executors must not hold work open after their future is dropped.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::ExecutorError;

/// GraphQL variables keyed by name, without the `$`.
pub type Variables = Map<String, Value>;

/// Runs a GraphQL document and returns its `data` object.
///
/// Implementations must support named variables and fragments, and report
/// transport or server-side failures as errors. They must be safe to call
/// concurrently if the service is shared between tasks.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Run a query document.
    async fn query(&self, document: &str, variables: Variables) -> Result<Value, ExecutorError>;

    /// Run a mutation document.
    async fn mutate(&self, document: &str, variables: Variables)
    -> Result<Value, ExecutorError>;
}

/// Materializes an unbounded connection query through a bulk export.
///
/// The document has no variables and no pagination arguments. The executor
/// submits the job, waits for it, downloads the export, and returns one
/// JSON object per top-level node in export order, with nested connections
/// reassembled in their `{ "edges": [{ "node": ... }] }` shape.
#[async_trait]
pub trait BulkExecutor: Send + Sync {
    /// Run a bulk query to completion.
    async fn bulk_query(&self, document: &str) -> Result<Vec<Value>, ExecutorError>;
}

#[async_trait]
impl<T: QueryExecutor + ?Sized> QueryExecutor for Arc<T> {
    async fn query(&self, document: &str, variables: Variables) -> Result<Value, ExecutorError> {
        (**self).query(document, variables).await
    }

    async fn mutate(
        &self,
        document: &str,
        variables: Variables,
    ) -> Result<Value, ExecutorError> {
        (**self).mutate(document, variables).await
    }
}

#[async_trait]
impl<T: BulkExecutor + ?Sized> BulkExecutor for Arc<T> {
    async fn bulk_query(&self, document: &str) -> Result<Vec<Value>, ExecutorError> {
        (**self).bulk_query(document).await
    }
}

/// Bulk executor for deployments without an export backend.
///
/// Every call fails with [`ExecutorError::Bulk`], so `list` and `list_all`
/// report a clear error instead of silently returning nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBulkExecutor;

#[async_trait]
impl BulkExecutor for NoBulkExecutor {
    async fn bulk_query(&self, _document: &str) -> Result<Vec<Value>, ExecutorError> {
        Err(ExecutorError::Bulk("no bulk executor configured".to_string()))
    }
}
