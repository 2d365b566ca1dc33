//! The product catalog store: validation rules and the `CheckStock` action.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use resource_actor::ResourceActor;

/// Creates a new product actor and its client.
///
/// The actor does nothing until `run(())` is spawned.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = ProductClient::new(generic_client);

    (actor, client)
}
