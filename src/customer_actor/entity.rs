//! [`ActorEntity`] implementation for [`Customer`].

use super::error::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

fn check_name(field: &str, value: &str) -> Result<(), CustomerError> {
    if value.trim().is_empty() {
        return Err(CustomerError::ValidationError(format!("{field} is blank")));
    }
    Ok(())
}

// Email is optional; when given it needs at least an '@'.
fn check_email(email: &str) -> Result<(), CustomerError> {
    if !email.is_empty() && !email.contains('@') {
        return Err(CustomerError::ValidationError(format!(
            "invalid email: {email}"
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        check_name("first name", &params.first_name)?;
        check_name("last name", &params.last_name)?;
        check_email(&params.email)?;
        Ok(Self {
            id,
            first_name: params.first_name,
            last_name: params.last_name,
            phone: params.phone,
            email: params.email,
            street_address: params.street_address,
            city: params.city,
            state: params.state,
            postal_code: params.postal_code,
        })
    }

    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(first_name) = &update.first_name {
            check_name("first name", first_name)?;
        }
        if let Some(last_name) = &update.last_name {
            check_name("last name", last_name)?;
        }
        if let Some(email) = &update.email {
            check_email(email)?;
        }

        let CustomerUpdate {
            first_name,
            last_name,
            phone,
            email,
            street_address,
            city,
            state,
            postal_code,
        } = update;
        if let Some(v) = first_name {
            self.first_name = v;
        }
        if let Some(v) = last_name {
            self.last_name = v;
        }
        if let Some(v) = phone {
            self.phone = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        if let Some(v) = street_address {
            self.street_address = v;
        }
        if let Some(v) = city {
            self.city = v;
        }
        if let Some(v) = state {
            self.state = v;
        }
        if let Some(v) = postal_code {
            self.postal_code = v;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}
