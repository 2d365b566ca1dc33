use crate::clients::InventoryStore;
use crate::model::{Product, ProductCreate, ProductId};
use crate::presentation::{Presentation, View};
use crate::product_actor::ProductError;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Catalog maintenance: the product list and the product editor.
pub struct CatalogManager<S> {
    store: S,
    view: Arc<dyn Presentation>,
}

impl<S: InventoryStore> CatalogManager<S> {
    pub fn new(store: S, view: Arc<dyn Presentation>) -> Self {
        Self { store, view }
    }

    /// Every product, ordered by id.
    #[instrument(skip(self))]
    pub async fn inventory(&self) -> Result<Vec<Product>, ProductError> {
        let mut products = self.store.fetch_all().await.inspect_err(|e| {
            warn!(error = %e, "Could not load inventory");
        })?;
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    fn back_to_catalog(&self) {
        self.view.set_product(None);
        self.view.refresh_catalog_list();
        self.view.switch_to(View::Catalog);
    }

    #[instrument(skip(self))]
    pub async fn add_product_to_inventory(
        &self,
        product: ProductCreate,
    ) -> Result<ProductId, ProductError> {
        let id = self.store.insert(product).await.inspect_err(|e| {
            warn!(error = %e, "Add rejected");
        })?;
        info!(%id, "Product added");
        self.back_to_catalog();
        Ok(id)
    }

    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn modify_product_in_inventory(
        &self,
        product: Product,
    ) -> Result<Product, ProductError> {
        let saved = self.store.update(product).await.inspect_err(|e| {
            warn!(error = %e, "Update rejected");
        })?;
        info!("Product updated");
        self.back_to_catalog();
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn remove_product_from_inventory(&self, id: ProductId) -> Result<(), ProductError> {
        self.store.delete(id).await.inspect_err(|e| {
            warn!(error = %e, "Delete rejected");
        })?;
        info!("Product removed");
        self.back_to_catalog();
        Ok(())
    }

    /// Opens `product` in the product editor.
    pub fn attach_product(&self, product: &Product) {
        self.view.set_product(Some(product));
        self.view.switch_to(View::ProductEditor);
    }

    pub fn detach_product(&self) {
        self.view.set_product(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ProductClient;
    use crate::presentation::{RecordingPresentation, ViewEvent};
    use resource_actor::mock::MockClient;
    use resource_actor::FrameworkError;

    fn comic(id: u32) -> Product {
        Product::new(ProductId(id), format!("Issue #{id}"), 3.99, 4)
    }

    #[tokio::test]
    async fn test_inventory_is_sorted_by_id() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_list()
            .return_ok(vec![comic(3), comic(1), comic(2)]);
        let manager = CatalogManager::new(
            ProductClient::new(mock.client()),
            Arc::new(RecordingPresentation::new()),
        );

        let ids: Vec<_> = manager
            .inventory()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![ProductId(1), ProductId(2), ProductId(3)]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_inventory_errors_propagate() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);
        let manager = CatalogManager::new(
            ProductClient::new(mock.client()),
            Arc::new(RecordingPresentation::new()),
        );

        assert!(matches!(
            manager.inventory().await,
            Err(ProductError::ActorCommunicationError(_))
        ));
    }

    #[tokio::test]
    async fn test_failed_remove_stays_in_editor() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_delete(ProductId(8))
            .return_err(FrameworkError::NotFound("product_8".to_string()));
        let view = Arc::new(RecordingPresentation::new());
        let manager = CatalogManager::new(ProductClient::new(mock.client()), view.clone());

        manager.attach_product(&comic(8));
        let err = manager
            .remove_product_from_inventory(ProductId(8))
            .await
            .unwrap_err();

        assert_eq!(err, ProductError::NotFound("product_8".to_string()));
        assert_eq!(
            view.events(),
            vec![
                ViewEvent::EditProduct(Some(ProductId(8))),
                ViewEvent::SwitchTo(View::ProductEditor),
            ]
        );
        mock.verify();
    }
}
