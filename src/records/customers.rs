use crate::clients::CustomerStore;
use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId};
use crate::presentation::{Presentation, View};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Customer list maintenance.
pub struct CustomerManager<S> {
    store: S,
    view: Arc<dyn Presentation>,
}

impl<S: CustomerStore> CustomerManager<S> {
    pub fn new(store: S, view: Arc<dyn Presentation>) -> Self {
        Self { store, view }
    }

    /// Every customer, ordered by last then first name.
    #[instrument(skip(self))]
    pub async fn customer_list(&self) -> Result<Vec<Customer>, CustomerError> {
        let mut customers = self.store.fetch_all().await.inspect_err(|e| {
            warn!(error = %e, "Could not load customers");
        })?;
        customers.sort_by(|a, b| {
            (&a.last_name, &a.first_name, a.id).cmp(&(&b.last_name, &b.first_name, b.id))
        });
        Ok(customers)
    }

    fn back_to_list(&self) {
        self.view.set_customer(None);
        self.view.refresh_customer_list();
        self.view.switch_to(View::CustomerList);
    }

    #[instrument(skip(self))]
    pub async fn add_customer_to_list(
        &self,
        customer: CustomerCreate,
    ) -> Result<CustomerId, CustomerError> {
        let id = self.store.insert(customer).await.inspect_err(|e| {
            warn!(error = %e, "Add rejected");
        })?;
        info!(%id, "Customer added");
        self.back_to_list();
        Ok(id)
    }

    #[instrument(skip(self, customer), fields(id = %customer.id))]
    pub async fn modify_customer_in_list(
        &self,
        customer: Customer,
    ) -> Result<Customer, CustomerError> {
        let saved = self.store.update(customer).await.inspect_err(|e| {
            warn!(error = %e, "Update rejected");
        })?;
        info!("Customer updated");
        self.back_to_list();
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn remove_customer_from_list(&self, id: CustomerId) -> Result<(), CustomerError> {
        self.store.delete(id).await.inspect_err(|e| {
            warn!(error = %e, "Delete rejected");
        })?;
        info!("Customer removed");
        self.back_to_list();
        Ok(())
    }

    /// Opens `customer` in the customer editor.
    pub fn attach_customer(&self, customer: &Customer) {
        self.view.set_customer(Some(customer));
        self.view.switch_to(View::CustomerEditor);
    }

    pub fn detach_customer(&self) {
        self.view.set_customer(None);
    }
}
