use super::ShopConfig;
use crate::clients::{CustomerClient, ProductClient};
use crate::order::OrderOrchestrator;
use crate::presentation::Presentation;
use crate::records::{CatalogManager, CustomerManager};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Failures while stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// The running shop: one store actor per record type, plus factories for
/// the components that sit on top of them.
///
/// # Example
///
/// ```ignore
/// let system = ShopSystem::new();
/// let view: Arc<dyn Presentation> = Arc::new(RecordingPresentation::new());
///
/// let catalog = system.catalog_manager(view.clone());
/// let id = catalog.add_product_to_inventory(ProductCreate::new("Saga #1", 2.99, 10)).await?;
///
/// let mut till = system.order_orchestrator(view);
/// till.add_item_by_id(id, 2).await?;
/// till.submit_order().await?;
///
/// drop((catalog, till));
/// system.shutdown().await?;
/// ```
///
/// Orchestrators and managers hold client clones; drop them before
/// [`shutdown`](Self::shutdown) or it waits for them.
pub struct ShopSystem {
    /// Client for the product catalog actor
    pub product_client: ProductClient,

    /// Client for the customer actor
    pub customer_client: CustomerClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for ShopSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ShopSystem {
    /// Starts the actors with default settings. Must be called inside a
    /// Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(&ShopConfig::default())
    }

    pub fn with_config(config: &ShopConfig) -> Self {
        let (product_actor, product_client) = crate::product_actor::new(config.actor_buffer);
        let (customer_actor, customer_client) = crate::customer_actor::new(config.actor_buffer);

        // Neither store needs anything injected (Context = ())
        let product_handle = tokio::spawn(product_actor.run(()));
        let customer_handle = tokio::spawn(customer_actor.run(()));
        info!(buffer = config.actor_buffer, "Shop system started");

        Self {
            product_client,
            customer_client,
            handles: vec![product_handle, customer_handle],
        }
    }

    /// A fresh till session with no active order.
    pub fn order_orchestrator(
        &self,
        view: Arc<dyn Presentation>,
    ) -> OrderOrchestrator<ProductClient> {
        OrderOrchestrator::new(self.product_client.clone(), view)
    }

    pub fn catalog_manager(&self, view: Arc<dyn Presentation>) -> CatalogManager<ProductClient> {
        CatalogManager::new(self.product_client.clone(), view)
    }

    pub fn customer_manager(&self, view: Arc<dyn Presentation>) -> CustomerManager<CustomerClient> {
        CustomerManager::new(self.customer_client.clone(), view)
    }

    /// Drops the system's clients and waits for every actor to drain its
    /// queue and stop.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        // Closing the last sender ends each actor's receive loop.
        drop(self.product_client);
        drop(self.customer_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
