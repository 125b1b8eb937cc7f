//! Live round trips against a development store.
//!
//! Requires `SHOPIFY_STORE` and `SHOPIFY_ADMIN_ACCESS_TOKEN`. Set
//! `SHOPIFY_TEST_ORDER_ID` to exercise `get` and `update`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use shopify_orders::{AdminClient, NoBulkExecutor, OrderService, OrderServiceError, OrdersConfig};
use shopify_orders_core::{ListOptions, OrderId, OrderInput};

fn live_service() -> OrderService<AdminClient, NoBulkExecutor> {
    let config = OrdersConfig::from_env().expect("Shopify credentials must be set");
    OrderService::new(AdminClient::new(&config).unwrap(), NoBulkExecutor)
}

fn test_order_id() -> OrderId {
    OrderId::new(std::env::var("SHOPIFY_TEST_ORDER_ID").expect("SHOPIFY_TEST_ORDER_ID must be set"))
}

#[tokio::test]
#[ignore = "Requires Shopify credentials"]
async fn test_page_walk_has_no_overlap() {
    let service = live_service();
    let opts = ListOptions::default().first(5);

    let first = service.list_after_cursor(&opts).await.unwrap();
    let Some(next) = first.next_options(&opts) else {
        return;
    };
    let second = service.list_after_cursor(&next).await.unwrap();

    for order in &second.orders {
        assert!(first.orders.iter().all(|o| o.id != order.id));
    }
}

#[tokio::test]
#[ignore = "Requires Shopify credentials"]
async fn test_get_unknown_order_is_none() {
    let service = live_service();
    let found = service
        .get(&OrderId::new("gid://shopify/Order/1"))
        .await
        .unwrap();

    assert!(found.is_none());
}

#[tokio::test]
#[ignore = "Requires Shopify credentials and SHOPIFY_TEST_ORDER_ID"]
async fn test_update_note_round_trip() {
    let service = live_service();
    let id = test_order_id();
    let note = format!("integration test {}", std::process::id());

    let mut input = OrderInput::new(id.clone());
    input.note = Some(note);
    service.update(&input).await.unwrap();

    let order = service.get(&id).await.unwrap().expect("order should exist");
    // Full detail does not carry the note; the update succeeding is the check.
    assert_eq!(order.id, id);
}

#[tokio::test]
#[ignore = "Requires Shopify credentials and SHOPIFY_TEST_ORDER_ID"]
async fn test_invalid_email_is_user_error() {
    let service = live_service();

    let mut input = OrderInput::new(test_order_id());
    input.email = Some("not an email".to_string());
    let err = service.update(&input).await.unwrap_err();

    assert!(matches!(err, OrderServiceError::UserErrors(_)));
}

#[tokio::test]
#[ignore = "Requires Shopify credentials"]
async fn test_list_without_bulk_backend_fails_cleanly() {
    let err = live_service().list_all().await.unwrap_err();
    assert!(matches!(err, OrderServiceError::BulkQuery(_)));
}
