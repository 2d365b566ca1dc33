//! # Presentation Hooks
//!
//! The till's screens, seen from the core. One small trait per concern, so a
//! component asks only for what it uses. Hooks say "something changed"; the
//! screen re-reads whatever state it shows.
//!
//! Anything that implements every capability is a [`Presentation`] through
//! the blanket impl; components hold it as `Arc<dyn Presentation>`.

mod recorder;

pub use recorder::*;

use crate::model::{Customer, Product};
use serde::{Deserialize, Serialize};

/// The screens the core can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Catalog,
    Cart,
    ProductEditor,
    CustomerList,
    CustomerEditor,
}

pub trait Navigator: Send + Sync {
    fn switch_to(&self, view: View);
}

pub trait CartDisplay: Send + Sync {
    fn refresh_cart(&self);
}

pub trait OrderSummary: Send + Sync {
    fn update_order_total(&self, total: f64);
    fn clear_order(&self);
}

pub trait CatalogDisplay: Send + Sync {
    fn refresh_catalog_list(&self);
}

pub trait CustomerDisplay: Send + Sync {
    fn refresh_customer_list(&self);
}

/// The single-record editors. `None` clears the editor.
pub trait RecordEditor: Send + Sync {
    fn set_product(&self, product: Option<&Product>);
    fn set_customer(&self, customer: Option<&Customer>);
}

/// Every capability at once.
pub trait Presentation:
    Navigator + CartDisplay + OrderSummary + CatalogDisplay + CustomerDisplay + RecordEditor
{
}

impl<T> Presentation for T where
    T: Navigator + CartDisplay + OrderSummary + CatalogDisplay + CustomerDisplay + RecordEditor
{
}
