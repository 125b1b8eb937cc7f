//! Error types for the order service and its executors.

use shopify_orders_core::UserErrors;
use thiserror::Error;

use crate::queries::DocumentError;

/// Failures reported by a query or bulk executor.
///
/// Content is propagated unmodified; the service only adds an
/// operation-kind prefix (see [`OrderServiceError`]).
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL response carried top-level errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<graphql_client::Error>),

    /// Request or response JSON did not match the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rate limited by Shopify.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication/authorization failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Response had neither `data` nor `errors`.
    #[error("No data in response")]
    MissingData,

    /// Bulk operation failed, was cancelled, or its export was unreadable.
    #[error("bulk operation failed: {0}")]
    Bulk(String),
}

/// Errors returned by [`OrderService`](crate::OrderService) operations.
///
/// Executor failures are tagged with the kind of call that failed. Not-found
/// is not an error: `get` returns `Ok(None)`.
#[derive(Debug, Error)]
pub enum OrderServiceError {
    /// A synchronous query failed.
    #[error("query: {0}")]
    Query(#[source] ExecutorError),

    /// A bulk query failed.
    #[error("bulk query: {0}")]
    BulkQuery(#[source] ExecutorError),

    /// A mutation failed before the server could validate it.
    #[error("mutation: {0}")]
    Mutation(#[source] ExecutorError),

    /// The server rejected the mutation input.
    #[error("user errors: {0}")]
    UserErrors(#[source] UserErrors),

    /// A request document could not be built.
    #[error("document: {0}")]
    Document(#[from] DocumentError),
}

impl OrderServiceError {
    /// The user errors, when the server rejected a mutation.
    #[must_use]
    pub const fn user_errors(&self) -> Option<&UserErrors> {
        match self {
            Self::UserErrors(errors) => Some(errors),
            _ => None,
        }
    }
}

fn format_graphql_errors(errors: &[graphql_client::Error]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}
