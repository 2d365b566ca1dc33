//! [`ActorEntity`] implementation for [`Product`].
//!
//! All catalog constraints live here, so they hold no matter which client
//! writes: titles are not blank, prices are finite and not negative, and
//! stock never drops below zero.

use super::actions::ProductAction;
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

fn check_title(title: &str) -> Result<(), ProductError> {
    if title.trim().is_empty() {
        return Err(ProductError::ValidationError("title is blank".to_string()));
    }
    Ok(())
}

fn check_price(price: f64) -> Result<(), ProductError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::InvalidPrice(price));
    }
    Ok(())
}

fn check_copies(id: ProductId, copies: i64) -> Result<(), ProductError> {
    if copies < 0 {
        return Err(ProductError::NegativeStock { id, copies });
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = i64;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        check_title(&params.title)?;
        check_price(params.price)?;
        check_copies(id, params.copies)?;
        Ok(Self::new(id, params.title, params.price, params.copies))
    }

    /// Validates every supplied field before touching the record, so a
    /// rejected update changes nothing.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(title) = &update.title {
            check_title(title)?;
        }
        if let Some(price) = update.price {
            check_price(price)?;
        }
        if let Some(copies) = update.copies {
            check_copies(self.id, copies)?;
        }

        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(copies) = update.copies {
            self.copies = copies;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: ProductAction, _ctx: &()) -> Result<i64, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(self.copies),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comic() -> Product {
        Product::new(ProductId(1), "Watchmen #1", 4.99, 3)
    }

    #[test]
    fn test_create_rejects_bad_fields() {
        let blank = Product::from_create_params(ProductId(1), ProductCreate::new("  ", 1.0, 1));
        assert!(matches!(blank, Err(ProductError::ValidationError(_))));

        let price = Product::from_create_params(ProductId(1), ProductCreate::new("X", -0.5, 1));
        assert_eq!(price.unwrap_err(), ProductError::InvalidPrice(-0.5));

        let nan = Product::from_create_params(ProductId(1), ProductCreate::new("X", f64::NAN, 1));
        assert!(matches!(nan, Err(ProductError::InvalidPrice(_))));

        let stock = Product::from_create_params(ProductId(2), ProductCreate::new("X", 1.0, -1));
        assert_eq!(
            stock.unwrap_err(),
            ProductError::NegativeStock {
                id: ProductId(2),
                copies: -1
            }
        );
    }

    #[tokio::test]
    async fn test_rejected_update_changes_nothing() {
        let mut product = comic();
        let update = ProductUpdate {
            title: Some("Watchmen #2".to_string()),
            price: Some(5.99),
            copies: Some(-2),
        };

        let err = product.on_update(update, &()).await.unwrap_err();
        assert!(matches!(err, ProductError::NegativeStock { copies: -2, .. }));
        assert_eq!(product, comic());
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let mut product = comic();
        let update = ProductUpdate {
            copies: Some(0),
            ..ProductUpdate::default()
        };

        product.on_update(update, &()).await.unwrap();
        assert_eq!(product.copies, 0);
        assert_eq!(product.title, "Watchmen #1");
        assert_eq!(product.price, 4.99);
    }

    #[tokio::test]
    async fn test_check_stock_reads_copies() {
        let mut product = comic();
        let copies = product
            .handle_action(ProductAction::CheckStock, &())
            .await
            .unwrap();
        assert_eq!(copies, 3);
    }
}
