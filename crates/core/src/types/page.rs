//! One page of a cursor-paginated order listing.

use serde::{Deserialize, Serialize};

use super::cursor::{Cursor, ListOptions};
use super::order::Order;

/// A single page of orders plus the cursors needed to continue.
///
/// Built fresh per call; the order service keeps no pagination state. The
/// caller continues by feeding `last_cursor` back as `after` (forward) or
/// `first_cursor` as `before` (backward).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPage {
    /// Orders in server order.
    pub orders: Vec<Order>,
    /// Cursor of the first edge; `None` for an empty page.
    pub first_cursor: Option<Cursor>,
    /// Cursor of the last edge; `None` for an empty page.
    pub last_cursor: Option<Cursor>,
    /// Whether more orders follow this page.
    pub has_next_page: bool,
    /// Whether orders precede this page.
    pub has_previous_page: bool,
}

impl OrderPage {
    /// Whether the page holds no orders.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Options for the page after this one, or `None` at the end.
    ///
    /// Keeps the filter, direction and page size of `previous`.
    #[must_use]
    pub fn next_options(&self, previous: &ListOptions) -> Option<ListOptions> {
        if self.is_empty() || !self.has_next_page {
            return None;
        }
        let cursor = self.last_cursor.clone()?;

        Some(ListOptions {
            query: previous.query.clone(),
            first: previous.first.or(previous.last),
            last: None,
            after: Some(cursor),
            before: None,
            reverse: previous.reverse,
        })
    }

    /// Options for the page before this one, or `None` at the start.
    #[must_use]
    pub fn previous_options(&self, previous: &ListOptions) -> Option<ListOptions> {
        if self.is_empty() || !self.has_previous_page {
            return None;
        }
        let cursor = self.first_cursor.clone()?;

        Some(ListOptions {
            query: previous.query.clone(),
            first: None,
            last: previous.last.or(previous.first),
            after: None,
            before: Some(cursor),
            reverse: previous.reverse,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(has_next: bool, has_previous: bool) -> OrderPage {
        let order: Order = serde_json::from_value(serde_json::json!({
            "id": "gid://shopify/Order/1",
            "legacyResourceId": "1",
            "name": "#1001",
            "createdAt": "2024-03-01T10:00:00Z",
            "processedAt": null,
            "email": null,
            "financialStatus": null,
            "fulfillmentStatus": null,
            "customer": null,
            "billingAddress": null,
            "shippingAddress": null,
            "shippingLine": null,
            "totalReceived": null,
            "transactions": [],
            "lineItems": [],
            "tags": [],
            "note": null
        }))
        .unwrap_or_else(|e| panic!("fixture order: {e}"));

        OrderPage {
            orders: vec![order],
            first_cursor: Some(Cursor::new("c-first")),
            last_cursor: Some(Cursor::new("c-last")),
            has_next_page: has_next,
            has_previous_page: has_previous,
        }
    }

    #[test]
    fn test_next_options_continue_after_last_cursor() {
        let opts = ListOptions::with_query("tag:vip").first(10).reverse(true);
        let next = page(true, false).next_options(&opts);

        let next = next.unwrap_or_default();
        assert_eq!(next.after, Some(Cursor::new("c-last")));
        assert_eq!(next.before, None);
        assert_eq!(next.first, Some(10));
        assert_eq!(next.query, "tag:vip");
        assert!(next.reverse);
    }

    #[test]
    fn test_previous_options_go_before_first_cursor() {
        let opts = ListOptions::default().first(5);
        let prev = page(false, true).previous_options(&opts).unwrap_or_default();

        assert_eq!(prev.before, Some(Cursor::new("c-first")));
        assert_eq!(prev.last, Some(5));
        assert_eq!(prev.first, None);
    }

    #[test]
    fn test_last_page_has_no_next() {
        let opts = ListOptions::default().first(5);
        assert!(page(false, true).next_options(&opts).is_none());
        assert!(OrderPage::default().next_options(&opts).is_none());
        assert!(OrderPage::default().previous_options(&opts).is_none());
    }
}
