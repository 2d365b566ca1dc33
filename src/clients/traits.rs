//! Persistence contracts.
//!
//! The order and record-management code never sees a channel or an actor;
//! it is written against these traits. [`ProductClient`](super::ProductClient)
//! and [`CustomerClient`](super::CustomerClient) implement them over the
//! store actors.

use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, Product, ProductCreate, ProductId};
use crate::product_actor::ProductError;
use async_trait::async_trait;

/// The product catalog.
///
/// Every single-record write is atomic. Nothing spans records: a sequence of
/// updates can stop halfway.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Every product, in no guaranteed order.
    async fn fetch_all(&self) -> Result<Vec<Product>, ProductError>;

    async fn fetch_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError>;

    /// Adds a product and returns the id the store assigned.
    async fn insert(&self, product: ProductCreate) -> Result<ProductId, ProductError>;

    /// Overwrites the stored record with `product`'s fields.
    ///
    /// Fails with [`ProductError::NotFound`] for an unknown id, or with the
    /// store's own constraint error (e.g. [`ProductError::NegativeStock`]).
    async fn update(&self, product: Product) -> Result<Product, ProductError>;

    async fn delete(&self, id: ProductId) -> Result<(), ProductError>;
}

/// The customer list.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Customer>, CustomerError>;

    async fn fetch_by_id(&self, id: CustomerId) -> Result<Option<Customer>, CustomerError>;

    async fn insert(&self, customer: CustomerCreate) -> Result<CustomerId, CustomerError>;

    async fn update(&self, customer: Customer) -> Result<Customer, CustomerError>;

    async fn delete(&self, id: CustomerId) -> Result<(), CustomerError>;
}
