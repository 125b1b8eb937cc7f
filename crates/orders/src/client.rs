//! Shopify Admin API GraphQL executor.
//!
//! Posts `{query, variables}` to the store's Admin endpoint with the
//! `X-Shopify-Access-Token` header and hands back the response's `data`
//! object. It does not retry; a 429 surfaces as
//! [`ExecutorError::RateLimited`] with the server's `Retry-After`.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::config::{ConfigError, OrdersConfig};
use crate::error::ExecutorError;
use crate::executor::{QueryExecutor, Variables};

/// Seconds to wait when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Shopify Admin API client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    client: reqwest::Client,
    endpoint: Url,
    access_token: SecretString,
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

#[derive(Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    variables: Variables,
}

impl AdminClient {
    /// Create a new Admin API client.
    ///
    /// # Arguments
    ///
    /// * `config` - Store, API version, token and transport timeout
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the endpoint URL is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: &OrdersConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(AdminClientInner {
                client,
                endpoint: config.graphql_endpoint()?,
                access_token: config.access_token.clone(),
            }),
        })
    }

    /// The GraphQL endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// Execute a GraphQL document.
    #[instrument(skip_all, fields(endpoint = %self.inner.endpoint))]
    async fn execute(&self, document: &str, variables: Variables) -> Result<Value, ExecutorError> {
        let body = GraphQLRequest {
            query: document,
            variables,
        };

        let response = self
            .inner
            .client
            .post(self.inner.endpoint.clone())
            .header(
                "X-Shopify-Access-Token",
                self.inner.access_token.expose_secret(),
            )
            .json(&body)
            .send()
            .await?;

        // Check for rate limiting
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.trim().parse::<f64>().ok())
                .filter(|secs| secs.is_finite() && *secs >= 0.0)
                .map_or(DEFAULT_RETRY_AFTER_SECS, retry_after_secs);
            return Err(ExecutorError::RateLimited(retry_after));
        }

        // Check for unauthorized
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ExecutorError::Unauthorized(
                "Invalid or expired access token".to_string(),
            ));
        }

        let response = response.error_for_status()?;
        let bytes = response.bytes().await?;
        let graphql_response: graphql_client::Response<Value> = serde_json::from_slice(&bytes)?;

        interpret(graphql_response)
    }
}

/// Shopify sends fractional seconds (e.g., `2.0`); round up.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn retry_after_secs(secs: f64) -> u64 {
    secs.ceil() as u64
}

/// Map a GraphQL response to its data or the first failure that applies.
fn interpret(response: graphql_client::Response<Value>) -> Result<Value, ExecutorError> {
    if let Some(errors) = response.errors
        && !errors.is_empty()
    {
        debug!(count = errors.len(), "GraphQL response carried errors");
        return Err(ExecutorError::GraphQL(errors));
    }

    match response.data {
        Some(Value::Null) | None => Err(ExecutorError::MissingData),
        Some(data) => Ok(data),
    }
}

#[async_trait]
impl QueryExecutor for AdminClient {
    async fn query(&self, document: &str, variables: Variables) -> Result<Value, ExecutorError> {
        self.execute(document, variables).await
    }

    async fn mutate(
        &self,
        document: &str,
        variables: Variables,
    ) -> Result<Value, ExecutorError> {
        self.execute(document, variables).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;

    fn response(body: Value) -> graphql_client::Response<Value> {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_interpret_returns_data() {
        let data = interpret(response(json!({"data": {"node": null}}))).unwrap();
        assert_eq!(data, json!({"node": null}));
    }

    #[test]
    fn test_interpret_errors_win_over_data() {
        let err = interpret(response(json!({
            "data": {"node": null},
            "errors": [{"message": "Throttled"}, {"message": "Access denied"}]
        })))
        .unwrap_err();

        assert_eq!(err.to_string(), "GraphQL errors: Throttled; Access denied");
    }

    #[test]
    fn test_interpret_missing_data() {
        assert!(matches!(
            interpret(response(json!({"data": null}))),
            Err(ExecutorError::MissingData)
        ));
        assert!(matches!(
            interpret(response(json!({"errors": []}))),
            Err(ExecutorError::MissingData)
        ));
    }

    #[test]
    fn test_retry_after_rounds_up() {
        assert_eq!(retry_after_secs(2.0), 2);
        assert_eq!(retry_after_secs(0.4), 1);
    }

    #[test]
    fn test_new_uses_config_endpoint_and_redacts() {
        let config = OrdersConfig::new(
            "shop.myshopify.com",
            "2026-01",
            SecretString::from("shpat_0d8e2a".to_string()),
            Duration::from_secs(5),
        )
        .unwrap();

        let client = AdminClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://shop.myshopify.com/admin/api/2026-01/graphql.json"
        );
        assert!(!format!("{client:?}").contains("shpat_0d8e2a"));
    }
}
