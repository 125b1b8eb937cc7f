//! Shopify Orders Core - Order domain types.
//!
//! This crate provides the types shared by the order service and its callers:
//! - `orders` - The order access layer (queries, pagination, mutations)
//! - `cli` - Command-line access to the order service
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no GraphQL documents, no HTTP
//! clients. Values here are what the order service hands back to callers and
//! what callers hand in for mutations.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, money, statuses, orders, cursors, and mutation inputs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
