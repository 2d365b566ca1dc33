use midtown_pos::clients::{InventoryStore, ProductClient};
use midtown_pos::lifecycle::ShopSystem;
use midtown_pos::model::{Product, ProductCreate, ProductId};
use midtown_pos::order::{OrderError, OrderOrchestrator};
use midtown_pos::presentation::{RecordingPresentation, View, ViewEvent};
use resource_actor::mock::MockClient;
use std::sync::Arc;

async fn stock(system: &ShopSystem, title: &str, price: f64, copies: i64) -> Product {
    let id = system
        .product_client
        .insert(ProductCreate::new(title, price, copies))
        .await
        .expect("Failed to create product");
    system
        .product_client
        .fetch_by_id(id)
        .await
        .unwrap()
        .expect("Product not found")
}

fn mocked_till() -> (
    OrderOrchestrator<ProductClient>,
    MockClient<Product>,
    Arc<RecordingPresentation>,
) {
    let mock = MockClient::<Product>::new();
    let view = Arc::new(RecordingPresentation::new());
    let till = OrderOrchestrator::new(ProductClient::new(mock.client()), view.clone());
    (till, mock, view)
}

fn product(id: u32, price: f64, copies: i64) -> Product {
    Product::new(ProductId(id), format!("Issue #{id}"), price, copies)
}

/// Empty cart, add two copies of a 3.00 product.
#[tokio::test]
async fn test_add_to_empty_cart() {
    let (mut till, mock, view) = mocked_till();
    let x = product(1, 3.00, 10);

    till.add_item_to_order(&x, 2).unwrap();

    assert!(till.has_active_order());
    assert_eq!(till.order_total(), 6.00);
    assert_eq!(till.get_item_quantity(x.id), 2);
    assert_eq!(view.current_view(), Some(View::Cart));
    assert_eq!(view.last_total(), Some(6.00));
    mock.verify();
}

#[tokio::test]
async fn test_modify_quantity_updates_subtotal() {
    let (mut till, _mock, view) = mocked_till();
    let x = product(1, 3.00, 10);
    till.add_item_to_order(&x, 2).unwrap();

    till.modify_item_quantity_in_order(&x, 5).unwrap();

    assert_eq!(till.get_subtotal(x.id), 15.00);
    assert_eq!(till.order().unwrap().len(), 1);
    assert_eq!(view.last_total(), Some(15.00));
}

#[tokio::test]
async fn test_adding_again_merges_into_one_line() {
    let (mut till, _mock, _view) = mocked_till();
    let x = product(1, 3.00, 10);

    till.add_item_to_order(&x, 2).unwrap();
    till.add_item_to_order(&x, 4).unwrap();

    assert_eq!(till.order().unwrap().len(), 1);
    assert_eq!(till.get_item_quantity(x.id), 4);
}

#[tokio::test]
async fn test_remove_leaves_other_lines() {
    let (mut till, _mock, view) = mocked_till();
    let x = product(1, 3.00, 10);
    let y = product(2, 1.25, 4);
    till.add_item_to_order(&x, 2).unwrap();
    till.add_item_to_order(&y, 1).unwrap();

    till.remove_item_from_order(x.id).unwrap();

    assert!(!till.product_exists_in_order(x.id));
    assert!(till.product_exists_in_order(y.id));
    assert_eq!(till.order().unwrap().len(), 1);
    assert_eq!(till.order_total(), 1.25);
    assert_eq!(view.current_view(), Some(View::Cart));
}

#[tokio::test]
async fn test_removing_last_line_closes_the_order() {
    let (mut till, mock, view) = mocked_till();
    let x = product(1, 3.00, 10);
    till.add_item_to_order(&x, 2).unwrap();
    view.take();

    till.remove_item_from_order(x.id).unwrap();

    assert!(!till.has_active_order());
    assert!(till.order().is_none());
    assert_eq!(
        view.events(),
        vec![
            ViewEvent::RefreshCart,
            ViewEvent::ClearOrder,
            ViewEvent::SwitchTo(View::Catalog),
        ]
    );
    assert_eq!(
        till.remove_item_from_order(x.id),
        Err(OrderError::ItemNotFound(x.id))
    );
    mock.verify();
}

#[tokio::test]
async fn test_zero_quantity_modify_is_rejected() {
    let (mut till, _mock, view) = mocked_till();
    let x = product(1, 3.00, 10);
    till.add_item_to_order(&x, 2).unwrap();
    let before = till.order().cloned();
    view.take();

    let err = till.modify_item_quantity_in_order(&x, 0).unwrap_err();

    assert_eq!(err, OrderError::InvalidQuantity(0));
    assert_eq!(till.order().cloned(), before);
    assert!(view.events().is_empty());
}

#[tokio::test]
async fn test_modify_missing_line_is_rejected() {
    let (mut till, _mock, view) = mocked_till();
    till.add_item_to_order(&product(1, 3.00, 10), 2).unwrap();
    view.take();

    let err = till
        .modify_item_quantity_in_order(&product(2, 1.00, 1), 3)
        .unwrap_err();

    assert_eq!(err, OrderError::ItemNotFound(ProductId(2)));
    assert_eq!(till.order().unwrap().len(), 1);
    assert!(view.events().is_empty());
}

/// Cancelling never reaches the store: the mock has no expectations and
/// would fail on any request.
#[tokio::test]
async fn test_cancel_never_touches_inventory() {
    let (mut till, mock, view) = mocked_till();

    assert!(!till.cancel_order());
    assert_eq!(view.current_view(), Some(View::Catalog));

    till.add_item_to_order(&product(1, 3.00, 10), 2).unwrap();
    assert!(till.cancel_order());
    assert!(!till.has_active_order());
    assert_eq!(till.get_item_quantity(ProductId(1)), 0);

    assert_eq!(mock.remaining(), 0);
    mock.verify();
}

/// Cart with two copies of a product stocked at ten, submitted to the real
/// product store.
#[tokio::test]
async fn test_submit_decrements_stock_and_closes_order() {
    let system = ShopSystem::new();
    let x = stock(&system, "Saga #1", 2.99, 10).await;
    let view = Arc::new(RecordingPresentation::new());
    let mut till = system.order_orchestrator(view.clone());

    till.add_item_to_order(&x, 2).unwrap();
    let report = till.submit_order().await.unwrap();

    assert_eq!(report.applied.len(), 1);
    assert_eq!(report.applied[0].remaining_copies, 8);
    assert_eq!(system.product_client.check_stock(x.id).await.unwrap(), 8);
    assert!(!till.has_active_order());
    assert_eq!(view.current_view(), Some(View::Catalog));
    assert!(view.events().contains(&ViewEvent::RefreshCatalog));
    assert!(view.events().contains(&ViewEvent::ClearOrder));

    assert_eq!(till.submit_order().await, Err(OrderError::NoActiveOrder));

    drop(till);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_submit_reads_current_stock() {
    let system = ShopSystem::new();
    let x = stock(&system, "Saga #1", 2.99, 10).await;
    let mut till = system.order_orchestrator(Arc::new(RecordingPresentation::new()));

    // The cart keeps the copy count it saw; the shelf changes underneath.
    till.add_item_to_order(&x, 3).unwrap();
    let restocked = Product { copies: 20, ..x.clone() };
    system.product_client.update(restocked).await.unwrap();

    till.submit_order().await.unwrap();
    assert_eq!(system.product_client.check_stock(x.id).await.unwrap(), 17);

    drop(till);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_independent_sessions_do_not_share_carts() {
    let system = ShopSystem::new();
    let x = stock(&system, "Saga #1", 2.99, 10).await;
    let mut front = system.order_orchestrator(Arc::new(RecordingPresentation::new()));
    let back = system.order_orchestrator(Arc::new(RecordingPresentation::new()));

    front.add_item_to_order(&x, 1).unwrap();

    assert!(front.has_active_order());
    assert!(!back.has_active_order());

    drop((front, back));
    system.shutdown().await.unwrap();
}
