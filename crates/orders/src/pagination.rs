//! Cursor pagination protocol.
//!
//! A page fetch is stateless: the caller passes [`ListOptions`], the service
//! resolves them into a [`PageWindow`], sends one request, and hands back an
//! [`OrderPage`] whose cursors the caller stores to continue.
//!
//! # Precedence
//!
//! `ListOptions` may carry both halves of a pair even though callers should
//! not set them. The window resolves each pair independently:
//!
//! - `after` wins over `before`;
//! - `first` wins over `last`.
//!
//! Zero counts and empty cursors count as unset, so `first: Some(0)` with
//! `last: Some(10)` sends `last: 10`.

use serde_json::Value;
use shopify_orders_core::{Cursor, ListOptions, Order, OrderPage};

use crate::decode::Connection;
use crate::executor::Variables;

/// Which cursor bounds the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorBound {
    After(Cursor),
    Before(Cursor),
}

/// How many items the window holds, and from which end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    First(u32),
    Last(u32),
}

/// The resolved pagination arguments for one page request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageWindow {
    pub cursor: Option<CursorBound>,
    pub size: Option<PageSize>,
}

impl PageWindow {
    /// Resolve options into a window using the documented precedence.
    #[must_use]
    pub fn from_options(opts: &ListOptions) -> Self {
        let usable = |c: &Option<Cursor>| c.as_ref().filter(|c| !c.is_empty()).cloned();
        let positive = |n: Option<u32>| n.filter(|n| *n > 0);

        let cursor = usable(&opts.after)
            .map(CursorBound::After)
            .or_else(|| usable(&opts.before).map(CursorBound::Before));
        let size = positive(opts.first)
            .map(PageSize::First)
            .or_else(|| positive(opts.last).map(PageSize::Last));

        Self { cursor, size }
    }

    /// Request variables for the page document.
    ///
    /// `query` and `reverse` are always present; at most one cursor and at
    /// most one size follow.
    #[must_use]
    pub fn variables(&self, query: &str, reverse: bool) -> Variables {
        let mut vars = Variables::new();
        vars.insert("query".to_owned(), Value::from(query));
        vars.insert("reverse".to_owned(), Value::from(reverse));

        match &self.cursor {
            Some(CursorBound::After(c)) => {
                vars.insert("after".to_owned(), Value::from(c.as_str()));
            }
            Some(CursorBound::Before(c)) => {
                vars.insert("before".to_owned(), Value::from(c.as_str()));
            }
            None => {}
        }
        match self.size {
            Some(PageSize::First(n)) => {
                vars.insert("first".to_owned(), Value::from(n));
            }
            Some(PageSize::Last(n)) => {
                vars.insert("last".to_owned(), Value::from(n));
            }
            None => {}
        }

        vars
    }
}

/// Build a page from a decoded connection.
///
/// Edge order is kept; the first and last cursors come from the first and
/// last edges and are `None` when the page is empty.
pub(crate) fn order_page<N>(connection: Connection<N>) -> OrderPage
where
    N: Into<Order>,
{
    let Connection { edges, page_info } = connection;

    let first_cursor = edges.first().and_then(|e| e.cursor.clone());
    let last_cursor = edges.last().and_then(|e| e.cursor.clone());
    let orders = edges.into_iter().map(|e| e.node.into()).collect();
    let page_info = page_info.unwrap_or_default();

    OrderPage {
        orders,
        first_cursor,
        last_cursor,
        has_next_page: page_info.has_next_page,
        has_previous_page: page_info.has_previous_page,
    }
}
