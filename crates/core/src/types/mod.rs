//! Core types for the order access layer.
//!
//! This module provides type-safe wrappers for order domain concepts.

pub mod cursor;
pub mod id;
pub mod input;
pub mod order;
pub mod page;
pub mod price;
pub mod status;

pub use cursor::{Cursor, ListOptions};
pub use id::*;
pub use input::{Attribute, MailingAddressInput, OrderInput, UserError, UserErrors};
pub use order::*;
pub use page::OrderPage;
pub use price::{CurrencyCode, Money, MoneyAmount, MoneyBag};
pub use status::*;
