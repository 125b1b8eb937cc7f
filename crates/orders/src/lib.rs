//! Shopify Orders - order access layer for the Shopify Admin GraphQL API.
//!
//! One service, five operations:
//!
//! | Operation | Strategy | Returns |
//! |---|---|---|
//! | `get` | synchronous query | `Option<Order>` (full detail) |
//! | `list` | bulk export | `Vec<Order>` (full detail) |
//! | `list_all` | bulk export | `Vec<Order>` (full detail) |
//! | `list_after_cursor` | synchronous query | `OrderPage` (light detail) |
//! | `update` | synchronous mutation | `()` |
//!
//! Transport lives behind [`QueryExecutor`] and [`BulkExecutor`].
//! [`AdminClient`] is the HTTP query executor; bulk export backends are
//! supplied by the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_orders::{AdminClient, NoBulkExecutor, OrderService, OrdersConfig};
//! use shopify_orders::shopify_orders_core::{ListOptions, OrderId};
//!
//! let config = OrdersConfig::from_env()?;
//! let service = OrderService::new(AdminClient::new(&config)?, NoBulkExecutor);
//!
//! let order = service.get(&OrderId::new("gid://shopify/Order/1001")).await?;
//!
//! let page = service.list_after_cursor(&ListOptions::default().first(25)).await?;
//! if let Some(next) = page.next_options(&ListOptions::default().first(25)) {
//!     let page2 = service.list_after_cursor(&next).await?;
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod queries;

mod decode;
mod mutation;
mod pagination;
mod service;

#[cfg(test)]
mod testing;

pub use client::AdminClient;
pub use config::{ConfigError, OrdersConfig};
pub use error::{ExecutorError, OrderServiceError};
pub use executor::{BulkExecutor, NoBulkExecutor, QueryExecutor, Variables};
pub use pagination::{CursorBound, PageSize, PageWindow};
pub use service::{Operation, OrderService, OrderStore, Strategy};

pub use shopify_orders_core;
