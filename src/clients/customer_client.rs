//! # Customer Client

use crate::clients::CustomerStore;
use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CustomerError::NotFound(id),
            e @ FrameworkError::EntityError(_) => match e.into_entity_error::<CustomerError>() {
                Ok(err) => err,
                Err(other) => CustomerError::DatabaseError(other.to_string()),
            },
            other => CustomerError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CustomerClient {
    #[instrument(skip(self))]
    pub async fn create_customer(
        &self,
        params: CustomerCreate,
    ) -> Result<CustomerId, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl CustomerStore for CustomerClient {
    async fn fetch_all(&self) -> Result<Vec<Customer>, CustomerError> {
        self.list().await
    }

    async fn fetch_by_id(&self, id: CustomerId) -> Result<Option<Customer>, CustomerError> {
        self.get(id).await
    }

    async fn insert(&self, customer: CustomerCreate) -> Result<CustomerId, CustomerError> {
        self.create_customer(customer).await
    }

    async fn update(&self, customer: Customer) -> Result<Customer, CustomerError> {
        self.update_customer(customer.id, customer.as_update()).await
    }

    async fn delete(&self, id: CustomerId) -> Result<(), CustomerError> {
        ActorClient::delete(self, id).await
    }
}
