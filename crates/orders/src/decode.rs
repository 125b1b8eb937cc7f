//! Result decoding: wire shapes to domain types.
//!
//! Responses nest records as `connection { edges { node } }`. The wire
//! structs here mirror that shape per profile and are flattened into
//! [`Order`]s in one pass, in server order, without reordering or
//! deduplication.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use shopify_orders_core::{
    Address, Cursor, CustomerRef, FinancialStatus, FulfillmentStatus, LegacyResourceId, LineItem,
    LineItemDetail, LineItemId, Money, MoneyAmount, MoneyBag, Order, OrderId, OrderPage,
    Transaction,
};

use crate::pagination::order_page;

/// `{ edges: [...], pageInfo: {...} }`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "N: Deserialize<'de>"))]
pub(crate) struct Connection<N> {
    #[serde(default)]
    pub edges: Vec<Edge<N>>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
}

impl<N> Connection<N> {
    fn into_nodes<T: From<N>>(self) -> Vec<T> {
        self.edges.into_iter().map(|e| e.node.into()).collect()
    }
}

/// One edge: a node plus its position cursor.
#[derive(Debug, Deserialize)]
pub(crate) struct Edge<N> {
    pub node: N,
    #[serde(default)]
    pub cursor: Option<Cursor>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageInfo {
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub has_previous_page: bool,
}

// =============================================================================
// Full profile
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FullOrderNode {
    id: OrderId,
    legacy_resource_id: LegacyResourceId,
    name: String,
    created_at: DateTime<Utc>,
    processed_at: Option<DateTime<Utc>>,
    email: Option<String>,
    display_financial_status: Option<FinancialStatus>,
    display_fulfillment_status: Option<FulfillmentStatus>,
    customer: Option<CustomerRef>,
    billing_address: Option<Address>,
    shipping_address: Option<Address>,
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    tags: Vec<String>,
    line_items: Option<Connection<FullLineItemNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FullLineItemNode {
    id: LineItemId,
    product: Option<ProductRef>,
    name: String,
    sku: Option<String>,
    quantity: i64,
    original_unit_price_set: MoneyBag<Money>,
    discounted_unit_price_set: MoneyBag<Money>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRef {
    legacy_resource_id: LegacyResourceId,
}

impl From<FullOrderNode> for Order {
    fn from(node: FullOrderNode) -> Self {
        Self {
            id: node.id,
            legacy_resource_id: node.legacy_resource_id,
            name: node.name,
            created_at: node.created_at,
            processed_at: node.processed_at,
            email: node.email,
            financial_status: node.display_financial_status,
            fulfillment_status: node.display_fulfillment_status,
            customer: node.customer,
            billing_address: node.billing_address,
            shipping_address: node.shipping_address,
            shipping_line: None,
            total_received: None,
            transactions: node.transactions,
            line_items: node
                .line_items
                .map(Connection::into_nodes)
                .unwrap_or_default(),
            tags: node.tags,
            note: None,
        }
    }
}

impl From<FullLineItemNode> for LineItem {
    fn from(node: FullLineItemNode) -> Self {
        Self {
            id: node.id,
            sku: node.sku,
            quantity: node.quantity,
            detail: LineItemDetail::Full {
                product: node.product.map(|p| p.legacy_resource_id),
                name: node.name,
                original_unit_price: node.original_unit_price_set.shop_money,
                discounted_unit_price: node.discounted_unit_price_set.shop_money,
            },
        }
    }
}

// =============================================================================
// Light profile
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LightOrderNode {
    id: OrderId,
    legacy_resource_id: LegacyResourceId,
    name: String,
    created_at: DateTime<Utc>,
    customer: Option<CustomerRef>,
    shipping_address: Option<Address>,
    shipping_line: Option<ShippingLine>,
    total_received_set: Option<MoneyBag<MoneyAmount>>,
    note: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    line_items: Option<Connection<LightLineItemNode>>,
}

#[derive(Debug, Deserialize)]
struct ShippingLine {
    title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LightLineItemNode {
    id: LineItemId,
    sku: Option<String>,
    quantity: i64,
    fulfillable_quantity: i64,
    fulfillment_status: String,
    vendor: Option<String>,
    title: String,
    variant_title: Option<String>,
}

impl From<LightOrderNode> for Order {
    fn from(node: LightOrderNode) -> Self {
        Self {
            id: node.id,
            legacy_resource_id: node.legacy_resource_id,
            name: node.name,
            created_at: node.created_at,
            processed_at: None,
            email: None,
            financial_status: None,
            fulfillment_status: None,
            customer: node.customer,
            billing_address: None,
            shipping_address: node.shipping_address,
            shipping_line: node.shipping_line.map(|s| s.title),
            total_received: node.total_received_set.map(|m| m.shop_money.amount),
            transactions: Vec::new(),
            line_items: node
                .line_items
                .map(Connection::into_nodes)
                .unwrap_or_default(),
            tags: node.tags,
            note: node.note,
        }
    }
}

impl From<LightLineItemNode> for LineItem {
    fn from(node: LightLineItemNode) -> Self {
        Self {
            id: node.id,
            sku: node.sku,
            quantity: node.quantity,
            detail: LineItemDetail::Light {
                fulfillable_quantity: node.fulfillable_quantity,
                fulfillment_status: node.fulfillment_status,
                vendor: node.vendor,
                title: node.title,
                variant_title: node.variant_title,
            },
        }
    }
}

// =============================================================================
// Response decoding
// =============================================================================

#[derive(Debug, Deserialize)]
struct NodeData {
    node: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct OrdersData {
    orders: Connection<LightOrderNode>,
}

/// Decode a `node(id:)` response.
///
/// A null node, or a node of another type (the inline fragment selects
/// nothing, leaving `{}`), is `Ok(None)`.
pub(crate) fn single_order(data: Value) -> Result<Option<Order>, serde_json::Error> {
    let NodeData { node } = serde_json::from_value(data)?;

    match node {
        None => Ok(None),
        Some(Value::Object(fields)) if fields.is_empty() => Ok(None),
        Some(node) => serde_json::from_value::<FullOrderNode>(node).map(|n| Some(n.into())),
    }
}

/// Decode an `orders` cursor page response.
pub(crate) fn orders_page(data: Value) -> Result<OrderPage, serde_json::Error> {
    let OrdersData { orders } = serde_json::from_value(data)?;
    Ok(order_page(orders))
}

/// Decode bulk export records, keeping their order.
pub(crate) fn bulk_orders(records: Vec<Value>) -> Result<Vec<Order>, serde_json::Error> {
    records
        .into_iter()
        .map(|record| serde_json::from_value::<FullOrderNode>(record).map(Order::from))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;
    use shopify_orders_core::CurrencyCode;

    use super::*;

    /// A full-profile order node as the API returns it.
    pub(crate) fn full_order_json(n: u64) -> Value {
        json!({
            "id": format!("gid://shopify/Order/{n}"),
            "legacyResourceId": n.to_string(),
            "name": format!("#{n}"),
            "createdAt": "2024-05-01T12:00:00Z",
            "processedAt": "2024-05-01T12:00:05Z",
            "email": "buyer@example.com",
            "displayFinancialStatus": "PAID",
            "displayFulfillmentStatus": "UNFULFILLED",
            "customer": {"legacyResourceId": "77"},
            "billingAddress": {"name": "Ada", "city": "Austin", "countryCodeV2": "US"},
            "shippingAddress": null,
            "transactions": [{"gateway": "shopify_payments", "paymentId": "p-1"}],
            "tags": ["wholesale"],
            "lineItems": {"edges": [{"node": {
                "id": "gid://shopify/LineItem/1",
                "product": {"legacyResourceId": "555"},
                "name": "Bar soap",
                "sku": "SOAP-1",
                "quantity": 2,
                "originalUnitPriceSet": {"shopMoney": {"amount": "6.00", "currencyCode": "USD"}},
                "discountedUnitPriceSet": {"shopMoney": {"amount": "5.00", "currencyCode": "USD"}}
            }}]}
        })
    }

    /// A light-profile edge as the API returns it.
    pub(crate) fn light_edge_json(n: u64, cursor: &str) -> Value {
        json!({
            "cursor": cursor,
            "node": {
                "id": format!("gid://shopify/Order/{n}"),
                "legacyResourceId": n.to_string(),
                "name": format!("#{n}"),
                "createdAt": "2024-05-02T08:30:00Z",
                "customer": {
                    "id": "gid://shopify/Customer/9",
                    "legacyResourceId": "9",
                    "firstName": "Ada",
                    "displayName": "Ada L",
                    "email": "ada@example.com"
                },
                "shippingAddress": {"city": "Austin", "province": "Texas", "country": "United States"},
                "shippingLine": {"title": "Ground"},
                "totalReceivedSet": {"shopMoney": {"amount": "12.50"}},
                "note": "leave at door",
                "tags": [],
                "lineItems": {"edges": [{"node": {
                    "id": "gid://shopify/LineItem/2",
                    "sku": null,
                    "quantity": 1,
                    "fulfillableQuantity": 1,
                    "fulfillmentStatus": "unfulfilled",
                    "vendor": "Acme",
                    "title": "Candle",
                    "variantTitle": "Large"
                }}]}
            }
        })
    }

    #[test]
    fn test_single_order_full_profile() {
        let order = single_order(json!({"node": full_order_json(1001)}))
            .unwrap()
            .unwrap();

        assert_eq!(order.id.as_str(), "gid://shopify/Order/1001");
        assert_eq!(order.legacy_resource_id.as_u64(), 1001);
        assert_eq!(order.financial_status, Some(FinancialStatus::Paid));
        assert_eq!(
            order.billing_address.unwrap().country_code.as_deref(),
            Some("US")
        );
        assert_eq!(order.transactions.len(), 1);
        assert!(order.note.is_none());

        let item = &order.line_items[0];
        assert_eq!(item.quantity, 2);
        match &item.detail {
            LineItemDetail::Full {
                product,
                discounted_unit_price,
                ..
            } => {
                assert_eq!(*product, Some(LegacyResourceId::new(555)));
                assert_eq!(discounted_unit_price.amount, Decimal::new(500, 2));
                assert_eq!(discounted_unit_price.currency_code, CurrencyCode::USD);
            }
            LineItemDetail::Light { .. } => panic!("expected full line item"),
        }
    }

    #[test]
    fn test_null_node_is_not_found() {
        assert!(single_order(json!({"node": null})).unwrap().is_none());
    }

    #[test]
    fn test_node_of_other_type_is_not_found() {
        assert!(single_order(json!({"node": {}})).unwrap().is_none());
    }

    #[test]
    fn test_malformed_node_is_an_error() {
        assert!(single_order(json!({"node": {"id": "gid://shopify/Order/1"}})).is_err());
    }

    #[test]
    fn test_orders_page_light_profile() {
        let page = orders_page(json!({"orders": {
            "edges": [light_edge_json(1, "c1"), light_edge_json(2, "c2")],
            "pageInfo": {"hasNextPage": true, "hasPreviousPage": false}
        }}))
        .unwrap();

        assert_eq!(page.orders.len(), 2);
        assert_eq!(page.first_cursor, Some(Cursor::new("c1")));
        assert_eq!(page.last_cursor, Some(Cursor::new("c2")));
        assert!(page.has_next_page);

        let order = &page.orders[0];
        assert_eq!(order.shipping_line.as_deref(), Some("Ground"));
        assert_eq!(order.total_received, Some(Decimal::new(1250, 2)));
        assert_eq!(order.note.as_deref(), Some("leave at door"));
        assert!(order.financial_status.is_none());
        assert!(matches!(
            order.line_items[0].detail,
            LineItemDetail::Light { fulfillable_quantity: 1, .. }
        ));
    }

    #[test]
    fn test_bulk_records_keep_order() {
        let orders = bulk_orders(vec![
            full_order_json(3),
            full_order_json(1),
            full_order_json(2),
        ])
        .unwrap();

        let names: Vec<_> = orders.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["#3", "#1", "#2"]);
    }

    #[test]
    fn test_bulk_record_without_line_items() {
        let mut record = full_order_json(4);
        record.as_object_mut().unwrap().remove("lineItems");

        let orders = bulk_orders(vec![record]).unwrap();
        assert!(orders[0].line_items.is_empty());
    }

    #[test]
    fn test_connection_without_edges_key_is_empty() {
        let page = orders_page(json!({"orders": {"pageInfo": {"hasNextPage": false}}})).unwrap();
        assert!(page.orders.is_empty());
        assert_eq!(page.first_cursor, None);

        let mut record = full_order_json(5);
        record["lineItems"] = json!({});
        let orders = bulk_orders(vec![record]).unwrap();
        assert!(orders[0].line_items.is_empty());
    }
}
