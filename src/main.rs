//! A scripted till session against a headless screen: stock the shelf,
//! sign up a customer, ring up an order and submit it.

use midtown_pos::lifecycle::{setup_tracing, ShopConfig, ShopSystem};
use midtown_pos::model::{CustomerCreate, ProductCreate};
use midtown_pos::order::OrderError;
use midtown_pos::presentation::{Presentation, RecordingPresentation};
use std::error::Error;
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = ShopConfig::from_env();
    setup_tracing(&config);

    info!("Opening the shop");
    let system = ShopSystem::with_config(&config);
    let screen = Arc::new(RecordingPresentation::new());
    let view: Arc<dyn Presentation> = screen.clone();

    let catalog = system.catalog_manager(view.clone());
    let customers = system.customer_manager(view.clone());
    let mut till = system.order_orchestrator(view);

    let (saga, watchmen) = async {
        let saga = catalog
            .add_product_to_inventory(ProductCreate::new("Saga #1", 2.99, 10))
            .await?;
        let watchmen = catalog
            .add_product_to_inventory(ProductCreate::new("Watchmen #1", 4.99, 1))
            .await?;
        Ok::<_, Box<dyn Error>>((saga, watchmen))
    }
    .instrument(tracing::info_span!("stocking"))
    .await?;

    let customer = customers
        .add_customer_to_list(CustomerCreate {
            email: "kamala@example.com".to_string(),
            city: "Jersey City".to_string(),
            ..CustomerCreate::named("Kamala", "Khan")
        })
        .await?;
    info!(%customer, "Customer signed up");

    let span = tracing::info_span!("order");
    async {
        till.add_item_by_id(saga, 3).await?;
        till.add_item_by_id(watchmen, 2).await?;
        till.add_item_by_id(saga, 2).await?;
        info!(total = till.order_total(), "Order rung up");

        till.refresh_order().await?;
        match till.submit_order().await {
            Ok(report) => info!(lines = report.applied.len(), total = report.total(), "Order submitted"),
            Err(OrderError::SubmissionIncomplete(failure)) => {
                error!(%failure, "Order only partly submitted");
                // Sell what is on the shelf and drop the rest.
                for id in failure.unapplied().collect::<Vec<_>>() {
                    till.remove_item_from_order(id)?;
                }
            }
            Err(e) => return Err(e.into()),
        }
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(span)
    .await?;

    for product in catalog.inventory().await? {
        info!(id = %product.id, title = %product.title, copies = product.copies, "On the shelf");
    }
    info!(hooks = screen.events().len(), view = ?screen.current_view(), "Screen state");

    drop((catalog, customers, till));
    system.shutdown().await?;

    info!("Shop closed");
    Ok(())
}
