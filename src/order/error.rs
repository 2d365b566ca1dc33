//! Error types for the cart and the order workflow.

use super::submission::SubmissionFailure;
use crate::model::ProductId;
use crate::product_actor::ProductError;
use thiserror::Error;

/// Rejections from [`CartState`](super::CartState). The cart is unchanged
/// whenever one of these is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error("Item not in cart: {0}")]
    ItemNotFound(ProductId),
}

/// Errors from [`OrderOrchestrator`](super::OrderOrchestrator).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Quantities start at one.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// No line for this product, or no order at all.
    #[error("Item not in order: {0}")]
    ItemNotFound(ProductId),

    #[error("No active order")]
    NoActiveOrder,

    /// A store call outside of submission failed.
    #[error("Persistence failure: {0}")]
    Persistence(#[from] ProductError),

    /// Submission stopped partway. Lines already applied stay applied.
    #[error("Order submission incomplete: {0}")]
    SubmissionIncomplete(SubmissionFailure),
}

impl From<CartError> for OrderError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::InvalidQuantity(q) => OrderError::InvalidQuantity(q),
            CartError::ItemNotFound(id) => OrderError::ItemNotFound(id),
        }
    }
}
