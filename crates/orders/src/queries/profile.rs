//! Order field profiles.
//!
//! The full profile carries everything needed to reconcile an order
//! (addresses, statuses, transactions, priced line items) and is used for
//! single-order and bulk reads. The light profile carries summary fields
//! only and is used for interactive cursor pages, where payload size drives
//! latency. Each profile names its own line-item fragment, so the two can
//! never collide in one document.

use super::document::{Field, Fragment, Selection};

const FULL_ADDRESS: &[&str] = &[
    "name",
    "company",
    "address1",
    "address2",
    "city",
    "zip",
    "provinceCode",
    "countryCodeV2",
    "phone",
];

const LIGHT_ADDRESS: &[&str] = &["address1", "address2", "city", "province", "country", "zip"];

/// Which set of order and line-item fields a document requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    Full,
    Light,
}

impl Profile {
    /// Name of the profile's line-item fragment.
    #[must_use]
    pub const fn line_item_fragment_name(self) -> &'static str {
        match self {
            Self::Full => "LineItemFull",
            Self::Light => "LineItemLight",
        }
    }

    /// Order-level selections, excluding line items.
    #[must_use]
    pub fn order_fields(self) -> Vec<Selection> {
        match self {
            Self::Full => Selection::leaves(&[
                "id",
                "legacyResourceId",
                "name",
                "createdAt",
                "processedAt",
                "email",
                "displayFinancialStatus",
                "displayFulfillmentStatus",
            ])
            .chain([
                Selection::object("customer", &["legacyResourceId"]),
                Selection::object("billingAddress", FULL_ADDRESS),
                Selection::object("shippingAddress", FULL_ADDRESS),
                Selection::object("transactions", &["gateway", "paymentId"]),
                Selection::leaf("tags"),
            ])
            .collect(),
            Self::Light => Selection::leaves(&["id", "legacyResourceId", "name", "createdAt"])
                .chain([
                    Selection::object(
                        "customer",
                        &["id", "legacyResourceId", "firstName", "displayName", "email"],
                    ),
                    Selection::object("shippingAddress", LIGHT_ADDRESS),
                    Selection::object("shippingLine", &["title"]),
                    Selection::Field(
                        Field::new("totalReceivedSet")
                            .select([Selection::object("shopMoney", &["amount"])]),
                    ),
                    Selection::leaf("note"),
                    Selection::leaf("tags"),
                ])
                .collect(),
        }
    }

    /// The profile's `LineItem` fragment.
    #[must_use]
    pub fn line_item_fragment(self) -> Fragment {
        let selections: Vec<Selection> = match self {
            Self::Full => vec![
                Selection::leaf("id"),
                Selection::object("product", &["legacyResourceId"]),
                Selection::leaf("name"),
                Selection::leaf("sku"),
                Selection::leaf("quantity"),
                money_set("originalUnitPriceSet"),
                money_set("discountedUnitPriceSet"),
            ],
            Self::Light => Selection::leaves(&[
                "id",
                "sku",
                "quantity",
                "fulfillableQuantity",
                "fulfillmentStatus",
                "vendor",
                "title",
                "variantTitle",
            ])
            .collect(),
        };

        Fragment::new(self.line_item_fragment_name(), "LineItem", selections)
    }
}

fn money_set(name: &'static str) -> Selection {
    Selection::Field(
        Field::new(name).select([Selection::object("shopMoney", &["amount", "currencyCode"])]),
    )
}
