//! Configuration for the Admin API client.
//!
//! Loaded from environment variables, with `.env` support via dotenvy.
//!
//! | Variable | Required | Default |
//! |---|---|---|
//! | `SHOPIFY_STORE` | yes | |
//! | `SHOPIFY_ADMIN_ACCESS_TOKEN` | yes | |
//! | `SHOPIFY_API_VERSION` | no | `2026-01` |
//! | `SHOPIFY_HTTP_TIMEOUT_SECS` | no | `30` |

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

/// Admin API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "2026-01";

/// Transport timeout used when none is configured.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "insert",
    "enter-",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Admin API connection settings.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct OrdersConfig {
    /// Store domain (e.g., `your-store.myshopify.com`)
    pub store: String,
    /// API version (e.g., `2026-01`)
    pub api_version: String,
    /// Admin API access token
    pub access_token: SecretString,
    /// Per-request transport timeout
    pub http_timeout: Duration,
}

impl std::fmt::Debug for OrdersConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersConfig")
            .field("store", &self.store)
            .field("api_version", &self.api_version)
            .field("access_token", &"[REDACTED]")
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

impl OrdersConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is missing, a value does
    /// not parse, or the access token looks like a placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Missing .env is fine; the variables may come from the environment.
        dotenvy::dotenv().ok();

        let store = get_required_env("SHOPIFY_STORE")?;
        let api_version = get_env_or_default("SHOPIFY_API_VERSION", DEFAULT_API_VERSION);
        let access_token = get_required_env("SHOPIFY_ADMIN_ACCESS_TOKEN")?;
        let http_timeout = get_optional_env("SHOPIFY_HTTP_TIMEOUT_SECS")
            .map(|raw| parse_timeout("SHOPIFY_HTTP_TIMEOUT_SECS", &raw))
            .transpose()?
            .unwrap_or(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS));

        Self::new(store, api_version, SecretString::from(access_token), http_timeout)
    }

    /// Build and validate a configuration from explicit values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the store is not a bare host name or the
    /// token looks like a placeholder.
    pub fn new(
        store: impl Into<String>,
        api_version: impl Into<String>,
        access_token: SecretString,
        http_timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            store: store.into(),
            api_version: api_version.into(),
            access_token,
            http_timeout,
        };

        validate_store(&config.store)?;
        validate_token(config.access_token.expose_secret(), "SHOPIFY_ADMIN_ACCESS_TOKEN")?;
        // Catches stray characters in the version before the first request.
        config.graphql_endpoint()?;

        Ok(config)
    }

    /// The Admin GraphQL endpoint,
    /// `https://{store}/admin/api/{version}/graphql.json`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the parts do not form a URL.
    pub fn graphql_endpoint(&self) -> Result<Url, ConfigError> {
        let raw = format!(
            "https://{}/admin/api/{}/graphql.json",
            self.store, self.api_version
        );
        Url::parse(&raw).map_err(|e| {
            ConfigError::InvalidEnvVar("SHOPIFY_API_VERSION".to_string(), e.to_string())
        })
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_timeout(key: &str, raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be greater than zero".to_string(),
        )),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
    }
}

/// The store must be a bare host such as `shop.myshopify.com`.
fn validate_store(store: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| -> Result<(), ConfigError> {
        Err(ConfigError::InvalidEnvVar(
            "SHOPIFY_STORE".to_string(),
            reason.to_string(),
        ))
    };

    if store.is_empty() {
        return invalid("must not be empty");
    }
    if store.contains("://") || store.contains('/') {
        return invalid("must be a host name without scheme or path");
    }
    if !store.contains('.') {
        return invalid("must be a full domain (e.g., shop.myshopify.com)");
    }
    Ok(())
}

fn validate_token(token: &str, var_name: &str) -> Result<(), ConfigError> {
    if token.trim().is_empty() {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            "must not be empty".to_string(),
        ));
    }

    let lower = token.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }
    Ok(())
}
