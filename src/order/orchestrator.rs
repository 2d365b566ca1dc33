//! # Order Orchestrator
//!
//! Owns the till's one active order and drives it through its life:
//!
//! ```text
//! ABSENT --add--> ACTIVE --submit ok / cancel / last line removed--> ABSENT
//! ```
//!
//! Mutations go to the [`CartState`], stock changes go to the
//! [`InventoryStore`], and afterwards the presentation is told what changed.
//! A rejected mutation leaves the cart alone and sends no notification and
//! no navigation.
//!
//! ## Submission
//!
//! [`OrderOrchestrator::submit_order`] walks the lines in insertion order. Each
//! line re-reads its product from the store, takes the current title and
//! price into the cart, subtracts the quantity from the current copies and
//! writes the product back. The orchestrator does not
//! floor the stock; the store rejects a write that would go negative.
//!
//! There is no transaction across lines. On the first failure the walk stops,
//! earlier decrements stay persisted, the applied lines leave the cart, and
//! the rest stay in it so a retry cannot decrement anything twice.

use super::cart::{CartState, LineItem};
use super::error::OrderError;
use super::submission::{AppliedLine, LineFailure, SubmissionFailure, SubmissionReport};
use crate::clients::InventoryStore;
use crate::model::{Product, ProductId};
use crate::presentation::{Presentation, View};
use crate::product_actor::ProductError;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// One till session's order.
///
/// ```rust,ignore
/// let mut till = OrderOrchestrator::new(system.product_client.clone(), view);
/// till.add_item_to_order(&comic, 2)?;
/// let report = till.submit_order().await?;
/// ```
pub struct OrderOrchestrator<S> {
    store: S,
    view: Arc<dyn Presentation>,
    cart: Option<CartState>,
}

impl<S: InventoryStore> OrderOrchestrator<S> {
    /// Starts with no active order.
    pub fn new(store: S, view: Arc<dyn Presentation>) -> Self {
        Self {
            store,
            view,
            cart: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The active order, if any. Never an empty cart.
    pub fn order(&self) -> Option<&CartState> {
        self.cart.as_ref()
    }

    pub fn has_active_order(&self) -> bool {
        self.cart.is_some()
    }

    /// Zero when there is no active order.
    pub fn order_total(&self) -> f64 {
        self.cart.as_ref().map_or(0.0, CartState::total)
    }

    fn notify_cart_changed(&self) {
        self.view.refresh_cart();
        self.view.update_order_total(self.order_total());
    }

    fn close_order(&mut self) {
        self.cart = None;
        self.view.clear_order();
        self.view.switch_to(View::Catalog);
    }

    /// Puts `quantity` copies of `product` in the order, starting one if
    /// needed. A product already in the order gets its quantity replaced.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_item_to_order(&mut self, product: &Product, quantity: u32) -> Result<(), OrderError> {
        if quantity == 0 {
            warn!("Rejected add");
            return Err(OrderError::InvalidQuantity(quantity));
        }

        let cart = self.cart.get_or_insert_with(CartState::new);
        cart.upsert_item(product, quantity)?;
        debug!(lines = cart.len(), "Item added");

        self.notify_cart_changed();
        self.view.switch_to(View::Cart);
        Ok(())
    }

    /// Like [`add_item_to_order`](Self::add_item_to_order), but reads the
    /// product from the store first so the line carries current data.
    #[instrument(skip(self))]
    pub async fn add_item_by_id(
        &mut self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), OrderError> {
        if quantity == 0 {
            warn!("Rejected add");
            return Err(OrderError::InvalidQuantity(quantity));
        }

        let product = self
            .store
            .fetch_by_id(product_id)
            .await?
            .ok_or_else(|| ProductError::NotFound(product_id.to_string()))?;
        self.add_item_to_order(&product, quantity)
    }

    /// Re-reads every line's product from the store and takes its current
    /// title and price, so catalog edits made while the order is open show
    /// up in subtotals and the total.
    ///
    /// All-or-nothing: a store failure or a product that has left the
    /// catalog is returned as [`OrderError::Persistence`] and the cart keeps
    /// its previous prices.
    #[instrument(skip(self))]
    pub async fn refresh_order(&mut self) -> Result<(), OrderError> {
        let Some(cart) = self.cart.as_ref() else {
            return Err(OrderError::NoActiveOrder);
        };
        let ids: Vec<ProductId> = cart.items().iter().map(|line| line.product_id).collect();

        let mut current = Vec::with_capacity(ids.len());
        for id in ids {
            let product = self
                .store
                .fetch_by_id(id)
                .await
                .inspect_err(|e| warn!(product_id = %id, error = %e, "Refresh failed"))?
                .ok_or_else(|| ProductError::NotFound(id.to_string()))?;
            current.push(product);
        }

        if let Some(cart) = self.cart.as_mut() {
            for product in &current {
                cart.refresh_item(product);
            }
        }
        debug!(lines = current.len(), "Order refreshed");
        self.notify_cart_changed();
        Ok(())
    }

    /// Changes the quantity of a product already in the order.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn modify_item_quantity_in_order(
        &mut self,
        product: &Product,
        quantity: u32,
    ) -> Result<(), OrderError> {
        let Some(cart) = self.cart.as_mut() else {
            warn!("No active order");
            return Err(OrderError::ItemNotFound(product.id));
        };
        if let Err(e) = cart.set_quantity(product, quantity) {
            warn!(error = %e, "Rejected modify");
            return Err(e.into());
        }

        self.notify_cart_changed();
        self.view.switch_to(View::Cart);
        Ok(())
    }

    /// Takes a product out of the order. Removing the last line ends the
    /// order and returns to the catalog.
    #[instrument(skip(self))]
    pub fn remove_item_from_order(&mut self, product_id: ProductId) -> Result<(), OrderError> {
        let Some(cart) = self.cart.as_mut() else {
            warn!("No active order");
            return Err(OrderError::ItemNotFound(product_id));
        };
        cart.remove_item(product_id)?;
        let now_empty = cart.is_empty();

        self.view.refresh_cart();
        if now_empty {
            info!("Last line removed, order closed");
            self.close_order();
        } else {
            self.view.update_order_total(self.order_total());
            self.view.switch_to(View::Cart);
        }
        Ok(())
    }

    /// Zero when the product is not in the order.
    pub fn get_item_quantity(&self, product_id: ProductId) -> u32 {
        self.line(product_id).map_or(0, |line| line.quantity)
    }

    /// Zero when the product is not in the order.
    pub fn get_subtotal(&self, product_id: ProductId) -> f64 {
        self.line(product_id).map_or(0.0, LineItem::subtotal)
    }

    pub fn product_exists_in_order(&self, product_id: ProductId) -> bool {
        self.line(product_id).is_some()
    }

    fn line(&self, product_id: ProductId) -> Option<&LineItem> {
        self.cart.as_ref()?.item(product_id)
    }

    /// Drops the active order without touching stock. Returns whether there
    /// was one.
    #[instrument(skip(self))]
    pub fn cancel_order(&mut self) -> bool {
        let was_active = self.cart.is_some();
        self.close_order();
        info!(was_active, "Order cancelled");
        was_active
    }

    /// Decrements stock for every line, in order, stopping at the first
    /// failure. See the module docs for what happens to the cart.
    #[instrument(skip(self))]
    pub async fn submit_order(&mut self) -> Result<SubmissionReport, OrderError> {
        let Some(cart) = self.cart.as_ref() else {
            warn!("Nothing to submit");
            return Err(OrderError::NoActiveOrder);
        };
        let lines = cart.items().to_vec();
        info!(lines = lines.len(), total = cart.total(), "Submitting order");

        let mut applied = Vec::with_capacity(lines.len());
        let mut pending = lines.into_iter();
        while let Some(line) = pending.next() {
            match self.apply_line(&line).await {
                Ok((unit_price, remaining_copies)) => {
                    debug!(product_id = %line.product_id, unit_price, remaining_copies, "Line applied");
                    applied.push(AppliedLine {
                        product_id: line.product_id,
                        quantity: line.quantity,
                        unit_price,
                        remaining_copies,
                    });
                    self.view.refresh_catalog_list();
                }
                Err(error) => {
                    warn!(product_id = %line.product_id, %error, applied = applied.len(), "Submission stopped");
                    let failure = SubmissionFailure {
                        applied,
                        failed: LineFailure { line, error },
                        not_attempted: pending.collect(),
                    };
                    self.forget_applied(&failure.applied);
                    return Err(OrderError::SubmissionIncomplete(failure));
                }
            }
        }

        info!(lines = applied.len(), "Order submitted");
        self.close_order();
        Ok(SubmissionReport { applied })
    }

    /// Returns the price the line was sold at and the copies left.
    async fn apply_line(&mut self, line: &LineItem) -> Result<(f64, i64), ProductError> {
        let mut product = self
            .store
            .fetch_by_id(line.product_id)
            .await?
            .ok_or_else(|| ProductError::NotFound(line.product_id.to_string()))?;
        if let Some(cart) = self.cart.as_mut() {
            cart.refresh_item(&product);
        }

        let unit_price = product.price;
        product.copies -= i64::from(line.quantity);
        let saved = self.store.update(product).await?;
        Ok((unit_price, saved.copies))
    }

    // The failed line is never among `applied`, so the cart stays non-empty.
    fn forget_applied(&mut self, applied: &[AppliedLine]) {
        if let Some(cart) = self.cart.as_mut() {
            cart.retain(|item| !applied.iter().any(|done| done.product_id == item.product_id));
            debug_assert!(!cart.is_empty(), "failed line must stay in the cart");
        }
        self.notify_cart_changed();
    }
}
