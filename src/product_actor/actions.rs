//! Custom actions for the product store, beyond plain CRUD.

/// Product-specific operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductAction {
    /// Reads the current number of copies without changing it.
    CheckStock,
}
