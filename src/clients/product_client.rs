//! # Product Client
//!
//! The catalog's typed handle. It wraps a `ResourceClient<Product>`, maps
//! store failures back into [`ProductError`], and implements
//! [`InventoryStore`] for the order and catalog code.

use crate::clients::InventoryStore;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    /// Validation failures raised inside the actor come back as the
    /// original [`ProductError`].
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            e @ FrameworkError::EntityError(_) => match e.into_entity_error::<ProductError>() {
                Ok(err) => err,
                Err(other) => ProductError::DatabaseError(other.to_string()),
            },
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Current number of copies on the shelf.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<i64, ProductError> {
        debug!("Checking stock");
        self.inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl InventoryStore for ProductClient {
    async fn fetch_all(&self) -> Result<Vec<Product>, ProductError> {
        self.list().await
    }

    async fn fetch_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError> {
        self.get(id).await
    }

    async fn insert(&self, product: ProductCreate) -> Result<ProductId, ProductError> {
        self.create_product(product).await
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        self.update_product(product.id, product.as_update()).await
    }

    async fn delete(&self, id: ProductId) -> Result<(), ProductError> {
        ActorClient::delete(self, id).await
    }
}
