use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A product in the shop catalog.
///
/// `copies` is the number of copies on the shelf. It is signed so that a
/// caller can compute a stock level that goes below zero; the product store
/// is what refuses to persist one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub copies: i64,
}

impl Product {
    pub fn new(id: ProductId, title: impl Into<String>, price: f64, copies: i64) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            copies,
        }
    }

    /// The change set that turns the stored record into `self`.
    pub fn as_update(&self) -> ProductUpdate {
        ProductUpdate {
            title: Some(self.title.clone()),
            price: Some(self.price),
            copies: Some(self.copies),
        }
    }
}

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub title: String,
    pub price: f64,
    pub copies: i64,
}

impl ProductCreate {
    pub fn new(title: impl Into<String>, price: f64, copies: i64) -> Self {
        Self {
            title: title.into(),
            price,
            copies,
        }
    }
}

/// Partial change to a stored product; `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub copies: Option<i64>,
}
