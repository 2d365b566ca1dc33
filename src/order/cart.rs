//! # Cart
//!
//! The in-progress order as plain data. No I/O and no notifications; the
//! [`OrderOrchestrator`](super::OrderOrchestrator) owns a `CartState` and
//! does the talking.
//!
//! A cart holds at most one line per product, every line has a quantity of at
//! least one, and the total is summed from the lines on every call.

use super::error::CartError;
use crate::model::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// One product in the cart.
///
/// `title` and `unit_price` are copied from the product the caller last
/// passed in and are re-read from the store by
/// [`OrderOrchestrator::refresh_order`](super::OrderOrchestrator::refresh_order)
/// and during submission. Stock is not copied at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub title: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl LineItem {
    fn new(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            title: product.title.clone(),
            unit_price: product.price,
            quantity,
        }
    }

    fn refresh(&mut self, product: &Product, quantity: u32) {
        self.title = product.title.clone();
        self.unit_price = product.price;
        self.quantity = quantity;
    }

    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Ordered line items, unique by product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    items: Vec<LineItem>,
}

fn check_quantity(quantity: u32) -> Result<(), CartError> {
    if quantity == 0 {
        return Err(CartError::InvalidQuantity(quantity));
    }
    Ok(())
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `product`'s quantity, appending a new line if it is not in the
    /// cart yet. An existing line keeps its position.
    pub fn upsert_item(&mut self, product: &Product, quantity: u32) -> Result<(), CartError> {
        check_quantity(quantity)?;
        match self.find_item(product.id) {
            Some(index) => self.items[index].refresh(product, quantity),
            None => self.items.push(LineItem::new(product, quantity)),
        }
        Ok(())
    }

    /// Changes the quantity of a line that is already in the cart.
    pub fn set_quantity(&mut self, product: &Product, quantity: u32) -> Result<(), CartError> {
        let index = self
            .find_item(product.id)
            .ok_or(CartError::ItemNotFound(product.id))?;
        check_quantity(quantity)?;
        self.items[index].refresh(product, quantity);
        Ok(())
    }

    /// Copies `product`'s current title and price into its line, keeping the
    /// quantity. Returns `false` when the product is not in the cart.
    pub fn refresh_item(&mut self, product: &Product) -> bool {
        match self.find_item(product.id) {
            Some(index) => {
                let quantity = self.items[index].quantity;
                self.items[index].refresh(product, quantity);
                true
            }
            None => false,
        }
    }

    /// Keeps only the lines for which `keep` returns `true`, in order.
    pub fn retain(&mut self, keep: impl FnMut(&LineItem) -> bool) {
        self.items.retain(keep);
    }

    /// Removes and returns the line for `product_id`.
    pub fn remove_item(&mut self, product_id: ProductId) -> Result<LineItem, CartError> {
        let index = self
            .find_item(product_id)
            .ok_or(CartError::ItemNotFound(product_id))?;
        Ok(self.items.remove(index))
    }

    /// Position of the line for `product_id`; `None` when absent.
    pub fn find_item(&self, product_id: ProductId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product_id == product_id)
    }

    pub fn item(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product(id: u32, price: f64) -> Product {
        Product::new(ProductId(id), format!("Issue #{id}"), price, 10)
    }

    #[test]
    fn test_upsert_replaces_quantity_in_place() {
        let mut cart = CartState::new();
        cart.upsert_item(&product(1, 3.0), 2).unwrap();
        cart.upsert_item(&product(2, 1.5), 1).unwrap();
        cart.upsert_item(&product(1, 3.0), 5).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.find_item(ProductId(1)), Some(0));
        assert_eq!(cart.item(ProductId(1)).unwrap().quantity, 5);
        assert_eq!(cart.total(), 16.5);
    }

    #[test]
    fn test_upsert_refreshes_price_snapshot() {
        let mut cart = CartState::new();
        cart.upsert_item(&product(1, 3.0), 2).unwrap();
        cart.upsert_item(&product(1, 4.0), 2).unwrap();

        assert_eq!(cart.item(ProductId(1)).unwrap().unit_price, 4.0);
        assert_eq!(cart.total(), 8.0);
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let mut cart = CartState::new();
        assert_eq!(
            cart.upsert_item(&product(1, 3.0), 0),
            Err(CartError::InvalidQuantity(0))
        );
        assert!(cart.is_empty());

        cart.upsert_item(&product(1, 3.0), 2).unwrap();
        let before = cart.clone();
        assert_eq!(
            cart.set_quantity(&product(1, 3.0), 0),
            Err(CartError::InvalidQuantity(0))
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_missing_lines_are_reported() {
        let mut cart = CartState::new();
        cart.upsert_item(&product(1, 3.0), 2).unwrap();

        assert_eq!(
            cart.set_quantity(&product(2, 1.0), 4),
            Err(CartError::ItemNotFound(ProductId(2)))
        );
        assert_eq!(
            cart.remove_item(ProductId(2)),
            Err(CartError::ItemNotFound(ProductId(2)))
        );
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_keeps_order_of_the_rest() {
        let mut cart = CartState::new();
        for id in 1..=3 {
            cart.upsert_item(&product(id, 1.0), id).unwrap();
        }

        let removed = cart.remove_item(ProductId(2)).unwrap();
        assert_eq!(removed.quantity, 2);

        let ids: Vec<_> = cart.items().iter().map(|i| i.product_id).collect();
        assert_eq!(ids, vec![ProductId(1), ProductId(3)]);
    }

    #[test]
    fn test_refresh_item_keeps_quantity() {
        let mut cart = CartState::new();
        cart.upsert_item(&product(1, 3.0), 2).unwrap();

        let repriced = Product::new(ProductId(1), "Issue #1 (2nd print)", 4.0, 0);
        assert!(cart.refresh_item(&repriced));
        assert!(!cart.refresh_item(&product(2, 1.0)));

        let line = cart.item(ProductId(1)).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.title, "Issue #1 (2nd print)");
        assert_eq!(cart.total(), 8.0);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_retain_keeps_order() {
        let mut cart = CartState::new();
        for id in 1..=4 {
            cart.upsert_item(&product(id, 1.0), 1).unwrap();
        }

        cart.retain(|line| line.product_id.0 % 2 == 0);

        let ids: Vec<u32> = cart.items().iter().map(|line| line.product_id.0).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_find_on_empty_cart_is_none() {
        let cart = CartState::new();
        assert_eq!(cart.find_item(ProductId(0)), None);
        assert_eq!(cart.find_item(ProductId(1)), None);
        assert_eq!(cart.total(), 0.0);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Upsert(u32, u32, u32),
        Set(u32, u32, u32),
        Remove(u32),
    }

    // Prices are whole cents so the expected total is exact.
    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u32..6, 0u32..5000, 0u32..20).prop_map(|(id, cents, qty)| Op::Upsert(id, cents, qty)),
            (0u32..6, 0u32..5000, 0u32..20).prop_map(|(id, cents, qty)| Op::Set(id, cents, qty)),
            (0u32..6).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn lines_stay_unique_and_positive(ops in prop::collection::vec(op(), 0..60)) {
            let mut cart = CartState::new();
            for op in ops {
                let _ = match op {
                    Op::Upsert(id, cents, qty) => cart.upsert_item(&product(id, f64::from(cents) / 100.0), qty),
                    Op::Set(id, cents, qty) => cart.set_quantity(&product(id, f64::from(cents) / 100.0), qty),
                    Op::Remove(id) => cart.remove_item(ProductId(id)).map(|_| ()),
                };

                let mut ids: Vec<_> = cart.items().iter().map(|i| i.product_id).collect();
                ids.sort();
                ids.dedup();
                prop_assert_eq!(ids.len(), cart.len());
                prop_assert!(cart.items().iter().all(|i| i.quantity >= 1));
            }
        }

        #[test]
        fn total_is_sum_of_subtotals(ops in prop::collection::vec(op(), 0..60)) {
            let mut cart = CartState::new();
            let mut cents: std::collections::HashMap<u32, (u64, u64)> = Default::default();
            for op in ops {
                match op {
                    Op::Upsert(id, price, qty) => {
                        if cart.upsert_item(&product(id, f64::from(price) / 100.0), qty).is_ok() {
                            cents.insert(id, (u64::from(price), u64::from(qty)));
                        }
                    }
                    Op::Set(id, price, qty) => {
                        if cart.set_quantity(&product(id, f64::from(price) / 100.0), qty).is_ok() {
                            cents.insert(id, (u64::from(price), u64::from(qty)));
                        }
                    }
                    Op::Remove(id) => {
                        if cart.remove_item(ProductId(id)).is_ok() {
                            cents.remove(&id);
                        }
                    }
                }

                let expected: u64 = cents.values().map(|(price, qty)| price * qty).sum();
                prop_assert!((cart.total() - expected as f64 / 100.0).abs() < 1e-6);

                let summed: f64 = cart.items().iter().map(|i| i.unit_price * f64::from(i.quantity)).sum();
                prop_assert_eq!(cart.total(), summed);
            }
        }
    }
}
