//! Request documents for the order service.
//!
//! Each operation has one shape:
//!
//! | Document | Profile | Used by |
//! |---|---|---|
//! | [`order_by_id`] | full | `get` |
//! | [`bulk_orders`] | full | `list`, `list_all` |
//! | [`orders_page`] | light | `list_after_cursor` |
//! | [`order_update`] | - | `update` |

mod document;
mod profile;

pub use document::{Argument, Document, DocumentError, Field, Fragment, OperationType, Selection};
pub use profile::Profile;

/// Line items fetched with a single order.
pub const LINE_ITEMS_PER_ORDER: i64 = 250;

/// Line items fetched per order on a cursor page; keeps nested payloads small.
pub const LINE_ITEMS_PER_PAGE_ORDER: i64 = 25;

/// `lineItems { edges { node { ...Fragment } } }`, optionally capped.
fn line_items(profile: Profile, first: Option<i64>) -> Selection {
    let mut field = Field::new("lineItems");
    if let Some(first) = first {
        field = field.arg("first", Argument::Int(first));
    }
    Selection::Field(field.select([edges([Selection::FragmentSpread(
        profile.line_item_fragment_name(),
    )])]))
}

fn edges(node: impl IntoIterator<Item = Selection>) -> Selection {
    Selection::Field(Field::new("edges").select([Selection::Field(Field::new("node").select(node))]))
}

/// Single order by global ID, full profile.
///
/// Variables: `id: ID!`.
///
/// # Errors
///
/// Only fails if the document itself is malformed.
pub fn order_by_id() -> Result<Document, DocumentError> {
    let mut order = Profile::Full.order_fields();
    order.push(line_items(Profile::Full, Some(LINE_ITEMS_PER_ORDER)));

    Document::query("order")
        .variable("id", "ID!")
        .select(Selection::Field(
            Field::new("node")
                .arg("id", Argument::Variable("id"))
                .select([Selection::InlineFragment {
                    type_condition: "Order",
                    selections: order,
                }]),
        ))
        .fragment(Profile::Full.line_item_fragment())
}

/// Unbounded order connection for a bulk export, full profile.
///
/// Bulk documents take no variables, so `filter` is embedded as an escaped
/// string literal. An empty filter omits the `query` argument entirely.
///
/// # Errors
///
/// Only fails if the document itself is malformed.
pub fn bulk_orders(filter: &str) -> Result<Document, DocumentError> {
    let mut order = Profile::Full.order_fields();
    order.push(line_items(Profile::Full, None));

    let mut orders = Field::new("orders");
    if !filter.is_empty() {
        orders = orders.arg("query", Argument::String(filter.to_owned()));
    }

    Document::anonymous_query()
        .select(Selection::Field(orders.select([edges(order)])))
        .fragment(Profile::Full.line_item_fragment())
}

/// One cursor page of orders, light profile.
///
/// Variables: `query`, `first`, `last`, `before`, `after`, `reverse`, all
/// nullable; see [`PageWindow`](crate::PageWindow) for which are sent.
///
/// # Errors
///
/// Only fails if the document itself is malformed.
pub fn orders_page() -> Result<Document, DocumentError> {
    let mut order = Profile::Light.order_fields();
    order.push(line_items(Profile::Light, Some(LINE_ITEMS_PER_PAGE_ORDER)));

    let edges = Selection::Field(Field::new("edges").select([
        Selection::Field(Field::new("node").select(order)),
        Selection::leaf("cursor"),
    ]));
    let page_info = Selection::object("pageInfo", &["hasNextPage", "hasPreviousPage"]);

    Document::query("orders")
        .variable("query", "String")
        .variable("first", "Int")
        .variable("last", "Int")
        .variable("before", "String")
        .variable("after", "String")
        .variable("reverse", "Boolean")
        .select(Selection::Field(
            Field::new("orders")
                .arg("query", Argument::Variable("query"))
                .arg("first", Argument::Variable("first"))
                .arg("last", Argument::Variable("last"))
                .arg("before", Argument::Variable("before"))
                .arg("after", Argument::Variable("after"))
                .arg("reverse", Argument::Variable("reverse"))
                .select([edges, page_info]),
        ))
        .fragment(Profile::Light.line_item_fragment())
}

/// `orderUpdate` mutation returning only user errors.
///
/// Variables: `input: OrderInput!`.
#[must_use]
pub fn order_update() -> Document {
    Document::mutation("orderUpdate")
        .variable("input", "OrderInput!")
        .select(Selection::Field(
            Field::new("orderUpdate")
                .arg("input", Argument::Variable("input"))
                .select([Selection::object("userErrors", &["field", "message"])]),
        ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const FULL_ONLY: &[&str] = &["displayFinancialStatus", "billingAddress", "transactions"];
    const LIGHT_ONLY: &[&str] = &["shippingLine", "totalReceivedSet", "fulfillableQuantity"];

    #[test]
    fn test_get_document_uses_full_profile_once() {
        let text = order_by_id().unwrap().render().unwrap();

        assert!(text.starts_with("query order($id: ID!) {"));
        assert!(text.contains("node(id: $id) {"));
        assert!(text.contains("... on Order {"));
        assert!(text.contains("lineItems(first: 250) {"));
        assert_eq!(text.matches("fragment LineItemFull on LineItem").count(), 1);
        assert_eq!(text.matches("...LineItemFull").count(), 1);
        assert!(!text.contains("LineItemLight"));
        for field in FULL_ONLY {
            assert!(text.contains(field), "missing {field}");
        }
        for field in LIGHT_ONLY {
            assert!(!text.contains(field), "unexpected {field}");
        }
    }

    #[test]
    fn test_page_document_uses_light_profile_once() {
        let text = orders_page().unwrap().render().unwrap();

        assert!(text.starts_with(
            "query orders($query: String, $first: Int, $last: Int, $before: String, $after: String, $reverse: Boolean) {"
        ));
        assert!(text.contains("lineItems(first: 25) {"));
        assert!(text.contains("cursor\n"));
        assert!(text.contains("hasNextPage\n"));
        assert_eq!(text.matches("fragment LineItemLight on LineItem").count(), 1);
        assert!(!text.contains("LineItemFull"));
        for field in LIGHT_ONLY {
            assert!(text.contains(field), "missing {field}");
        }
        for field in FULL_ONLY {
            assert!(!text.contains(field), "unexpected {field}");
        }
    }

    #[test]
    fn test_bulk_document_embeds_escaped_filter() {
        let text = bulk_orders(r#"tag:"vip" AND status:open"#)
            .unwrap()
            .render()
            .unwrap();

        assert!(text.starts_with("{\n  orders(query: \"tag:\\\"vip\\\" AND status:open\") {"));
        assert!(text.contains("lineItems {"));
        assert!(!text.contains("cursor"));
        assert!(!text.contains('$'));
        assert_eq!(text.matches("fragment LineItemFull on LineItem").count(), 1);
    }

    #[test]
    fn test_bulk_document_without_filter() {
        let text = bulk_orders("").unwrap().render().unwrap();
        assert!(text.starts_with("{\n  orders {"));
    }

    #[test]
    fn test_profiles_name_distinct_fragments() {
        assert_ne!(
            Profile::Full.line_item_fragment().name(),
            Profile::Light.line_item_fragment().name()
        );
    }

    #[test]
    fn test_update_document() {
        let text = order_update().render().unwrap();
        assert!(text.starts_with("mutation orderUpdate($input: OrderInput!) {"));
        assert!(text.contains("orderUpdate(input: $input) {"));
        assert!(text.contains("userErrors {"));
    }
}
