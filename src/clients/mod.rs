//! Typed wrappers around [`ResourceClient`](resource_actor::ResourceClient),
//! and the store contracts the rest of the shop is written against.

pub mod customer_client;
pub mod product_client;
pub mod traits;

pub use customer_client::*;
pub use product_client::*;
pub use traits::*;
