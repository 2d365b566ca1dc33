//! Plain record types stored by the actors, with their create/update payloads.

pub mod customer;
pub mod product;

pub use customer::*;
pub use product::*;
