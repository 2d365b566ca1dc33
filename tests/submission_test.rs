use midtown_pos::clients::{InventoryStore, ProductClient};
use midtown_pos::lifecycle::ShopSystem;
use midtown_pos::model::{Product, ProductCreate, ProductId};
use midtown_pos::order::{OrderError, OrderOrchestrator};
use midtown_pos::presentation::{RecordingPresentation, View, ViewEvent};
use midtown_pos::product_actor::ProductError;
use resource_actor::mock::MockClient;
use resource_actor::FrameworkError;
use std::sync::Arc;

fn product(id: u32, price: f64, copies: i64) -> Product {
    Product::new(ProductId(id), format!("Issue #{id}"), price, copies)
}

/// Second of two lines fails to persist: the first decrement stands, the
/// second is reported with its own error.
#[tokio::test]
async fn test_second_line_failure_is_reported_per_line() {
    let mut mock = MockClient::<Product>::new();
    let view = Arc::new(RecordingPresentation::new());
    let mut till = OrderOrchestrator::new(ProductClient::new(mock.client()), view.clone());

    let x = product(1, 3.00, 10);
    let y = product(2, 5.00, 4);
    let z = product(3, 1.00, 9);
    till.add_item_to_order(&x, 2).unwrap();
    till.add_item_to_order(&y, 1).unwrap();
    till.add_item_to_order(&z, 1).unwrap();
    view.take();

    mock.expect_get(x.id).return_ok(Some(x.clone()));
    mock.expect_update(x.id).return_ok(Product { copies: 8, ..x.clone() });
    mock.expect_get(y.id).return_ok(Some(y.clone()));
    mock.expect_update(y.id)
        .return_err(FrameworkError::EntityError(Box::new(ProductError::DatabaseError(
            "disk full".to_string(),
        ))));

    let Err(OrderError::SubmissionIncomplete(failure)) = till.submit_order().await else {
        panic!("expected an incomplete submission");
    };

    assert_eq!(failure.applied.len(), 1);
    assert_eq!(failure.applied[0].product_id, x.id);
    assert_eq!(failure.applied[0].remaining_copies, 8);

    assert_eq!(failure.failed.line.product_id, y.id);
    assert_eq!(
        failure.failed.error,
        ProductError::DatabaseError("disk full".to_string())
    );
    assert_eq!(failure.not_attempted.len(), 1);
    assert_eq!(failure.not_attempted[0].product_id, z.id);

    // Applied line left the cart; the rest wait for a retry.
    assert!(!till.product_exists_in_order(x.id));
    assert_eq!(till.get_item_quantity(y.id), 1);
    assert_eq!(till.get_item_quantity(z.id), 1);
    assert_eq!(till.order_total(), 6.00);

    let events = view.events();
    assert_eq!(
        events,
        vec![
            ViewEvent::RefreshCatalog,
            ViewEvent::RefreshCart,
            ViewEvent::OrderTotal(6.00),
        ]
    );
    assert_ne!(view.current_view(), Some(View::Catalog));

    // Nothing was attempted for the third line.
    mock.verify();
}

#[tokio::test]
async fn test_product_gone_from_catalog_stops_submission() {
    let mut mock = MockClient::<Product>::new();
    let mut till = OrderOrchestrator::new(
        ProductClient::new(mock.client()),
        Arc::new(RecordingPresentation::new()),
    );
    let x = product(1, 3.00, 10);
    till.add_item_to_order(&x, 1).unwrap();

    mock.expect_get(x.id).return_ok(None);

    let err = till.submit_order().await.unwrap_err();
    let OrderError::SubmissionIncomplete(failure) = err else {
        panic!("expected an incomplete submission, got {err:?}");
    };
    assert!(matches!(failure.failed.error, ProductError::NotFound(_)));
    assert!(till.has_active_order());
    mock.verify();
}

/// The real product store refuses to go below zero copies, so an order for
/// more than is on the shelf stops at that line.
#[tokio::test]
async fn test_store_refuses_negative_stock_midway() {
    let system = ShopSystem::new();
    let plenty = system
        .product_client
        .insert(ProductCreate::new("Saga #1", 2.99, 10))
        .await
        .unwrap();
    let sold_out = system
        .product_client
        .insert(ProductCreate::new("Watchmen #1", 4.99, 0))
        .await
        .unwrap();

    let mut till = system.order_orchestrator(Arc::new(RecordingPresentation::new()));
    till.add_item_by_id(plenty, 2).await.unwrap();
    till.add_item_by_id(sold_out, 1).await.unwrap();

    let Err(OrderError::SubmissionIncomplete(failure)) = till.submit_order().await else {
        panic!("expected an incomplete submission");
    };

    assert_eq!(failure.applied.len(), 1);
    assert_eq!(
        failure.failed.error,
        ProductError::NegativeStock {
            id: sold_out,
            copies: -1
        }
    );
    assert_eq!(system.product_client.check_stock(plenty).await.unwrap(), 8);
    assert_eq!(system.product_client.check_stock(sold_out).await.unwrap(), 0);

    // Retrying after restocking applies only what is left.
    let restock = system.product_client.fetch_by_id(sold_out).await.unwrap().unwrap();
    system
        .product_client
        .update(Product { copies: 3, ..restock })
        .await
        .unwrap();

    let report = till.submit_order().await.unwrap();
    assert_eq!(report.applied.len(), 1);
    assert_eq!(system.product_client.check_stock(plenty).await.unwrap(), 8);
    assert_eq!(system.product_client.check_stock(sold_out).await.unwrap(), 2);
    assert!(!till.has_active_order());

    drop(till);
    system.shutdown().await.unwrap();
}
