//! Recording executor for service tests.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ExecutorError;
use crate::executor::{BulkExecutor, QueryExecutor, Variables};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CallKind {
    Query,
    Mutate,
    Bulk,
}

/// One request the mock received.
#[derive(Debug, Clone)]
pub(crate) struct Call {
    pub kind: CallKind,
    pub document: String,
    pub variables: Variables,
}

type Responder = Box<dyn Fn(&Call) -> Result<Value, ExecutorError> + Send + Sync>;
type BulkResponder = Box<dyn Fn(&Call) -> Result<Vec<Value>, ExecutorError> + Send + Sync>;

/// Executor answering from closures and recording every call.
pub(crate) struct MockExecutor {
    respond: Responder,
    bulk: BulkResponder,
    hang: bool,
    calls: Mutex<Vec<Call>>,
}

impl MockExecutor {
    pub(crate) fn new(
        respond: impl Fn(&Call) -> Result<Value, ExecutorError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
            bulk: Box::new(|_| Ok(Vec::new())),
            hang: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always return `data`.
    pub(crate) fn replying(data: Value) -> Self {
        Self::new(move |_| Ok(data.clone()))
    }

    /// Answer bulk queries with `bulk`.
    pub(crate) fn with_bulk(
        mut self,
        bulk: impl Fn(&Call) -> Result<Vec<Value>, ExecutorError> + Send + Sync + 'static,
    ) -> Self {
        self.bulk = Box::new(bulk);
        self
    }

    /// Never complete any request.
    pub(crate) fn hanging() -> Self {
        let mut mock = Self::replying(Value::Null);
        mock.hang = true;
        mock
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn record(&self, kind: CallKind, document: &str, variables: Variables) -> Call {
        let call = Call {
            kind,
            document: document.to_owned(),
            variables,
        };
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call.clone());

        // Let concurrent callers interleave.
        tokio::task::yield_now().await;
        if self.hang {
            std::future::pending::<()>().await;
        }
        call
    }
}

#[async_trait]
impl QueryExecutor for MockExecutor {
    async fn query(&self, document: &str, variables: Variables) -> Result<Value, ExecutorError> {
        let call = self.record(CallKind::Query, document, variables).await;
        (self.respond)(&call)
    }

    async fn mutate(
        &self,
        document: &str,
        variables: Variables,
    ) -> Result<Value, ExecutorError> {
        let call = self.record(CallKind::Mutate, document, variables).await;
        (self.respond)(&call)
    }
}

#[async_trait]
impl BulkExecutor for MockExecutor {
    async fn bulk_query(&self, document: &str) -> Result<Vec<Value>, ExecutorError> {
        let call = self.record(CallKind::Bulk, document, Variables::new()).await;
        (self.bulk)(&call)
    }
}
