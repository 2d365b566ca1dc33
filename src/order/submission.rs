//! What a submission did, line by line.

use super::cart::LineItem;
use crate::model::ProductId;
use crate::product_actor::ProductError;
use thiserror::Error;

/// A line whose stock decrement was persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedLine {
    pub product_id: ProductId,
    pub quantity: u32,
    /// Catalog price when the line was applied.
    pub unit_price: f64,
    /// Copies left on the shelf after the decrement.
    pub remaining_copies: i64,
}

/// Result of a submission where every line was applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionReport {
    pub applied: Vec<AppliedLine>,
}

impl SubmissionReport {
    /// Sum of what was charged, at the prices read during submission.
    pub fn total(&self) -> f64 {
        self.applied
            .iter()
            .map(|line| line.unit_price * f64::from(line.quantity))
            .sum()
    }
}

/// The line that stopped a submission and the store's reason.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{} x{}: {error}", .line.product_id, .line.quantity)]
pub struct LineFailure {
    pub line: LineItem,
    #[source]
    pub error: ProductError,
}

/// A submission that stopped at its first failing line.
///
/// `applied` were persisted and removed from the cart. `failed` and
/// `not_attempted` are still in the cart, in their original order.
#[derive(Debug, Clone, Error, PartialEq)]
#[error(
    "{} line(s) applied, stopped at {failed}, {} line(s) not attempted",
    .applied.len(),
    .not_attempted.len()
)]
pub struct SubmissionFailure {
    pub applied: Vec<AppliedLine>,
    pub failed: LineFailure,
    pub not_attempted: Vec<LineItem>,
}

impl SubmissionFailure {
    /// Products that still need to be submitted.
    pub fn unapplied(&self) -> impl Iterator<Item = ProductId> + '_ {
        std::iter::once(self.failed.line.product_id)
            .chain(self.not_attempted.iter().map(|line| line.product_id))
    }
}
