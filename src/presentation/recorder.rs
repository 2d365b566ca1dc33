use super::{
    CartDisplay, CatalogDisplay, CustomerDisplay, Navigator, OrderSummary, RecordEditor, View,
};
use crate::model::{Customer, CustomerId, Product, ProductId};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// One hook call, as seen by [`RecordingPresentation`].
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    SwitchTo(View),
    RefreshCart,
    OrderTotal(f64),
    ClearOrder,
    RefreshCatalog,
    RefreshCustomers,
    EditProduct(Option<ProductId>),
    EditCustomer(Option<CustomerId>),
}

/// A headless presentation that logs every hook and keeps them in order.
///
/// Drives the demo binary and lets tests assert on what the screens were told.
#[derive(Debug, Default)]
pub struct RecordingPresentation {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingPresentation {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ViewEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, event: ViewEvent) {
        debug!(?event, "View hook");
        self.lock().push(event);
    }

    /// Every hook call so far.
    pub fn events(&self) -> Vec<ViewEvent> {
        self.lock().clone()
    }

    /// Drains the recorded calls.
    pub fn take(&self) -> Vec<ViewEvent> {
        std::mem::take(&mut *self.lock())
    }

    /// The view most recently switched to.
    pub fn current_view(&self) -> Option<View> {
        self.lock().iter().rev().find_map(|event| match event {
            ViewEvent::SwitchTo(view) => Some(*view),
            _ => None,
        })
    }

    /// The most recent order total pushed to the summary.
    pub fn last_total(&self) -> Option<f64> {
        self.lock().iter().rev().find_map(|event| match event {
            ViewEvent::OrderTotal(total) => Some(*total),
            _ => None,
        })
    }
}

impl Navigator for RecordingPresentation {
    fn switch_to(&self, view: View) {
        self.record(ViewEvent::SwitchTo(view));
    }
}

impl CartDisplay for RecordingPresentation {
    fn refresh_cart(&self) {
        self.record(ViewEvent::RefreshCart);
    }
}

impl OrderSummary for RecordingPresentation {
    fn update_order_total(&self, total: f64) {
        self.record(ViewEvent::OrderTotal(total));
    }

    fn clear_order(&self) {
        self.record(ViewEvent::ClearOrder);
    }
}

impl CatalogDisplay for RecordingPresentation {
    fn refresh_catalog_list(&self) {
        self.record(ViewEvent::RefreshCatalog);
    }
}

impl CustomerDisplay for RecordingPresentation {
    fn refresh_customer_list(&self) {
        self.record(ViewEvent::RefreshCustomers);
    }
}

impl RecordEditor for RecordingPresentation {
    fn set_product(&self, product: Option<&Product>) {
        self.record(ViewEvent::EditProduct(product.map(|p| p.id)));
    }

    fn set_customer(&self, customer: Option<&Customer>) {
        self.record(ViewEvent::EditCustomer(customer.map(|c| c.id)));
    }
}
