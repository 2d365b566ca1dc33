//! # Resource Actor
//!
//! An in-process record store built on the actor model. Each record type (a
//! catalog product, a customer) lives in its own [`ResourceActor`], a Tokio task
//! that owns a map of records and answers CRUD requests one at a time. Callers
//! talk to it through a cloneable [`ResourceClient`].
//!
//! ## Layers
//!
//! 1. **Record** ([`ActorEntity`]) - the domain type plus its create/update DTOs,
//!    custom actions and error type. Validation lives in the hooks.
//! 2. **Store** ([`ResourceActor`]) - the request loop. Requests are handled
//!    sequentially, so a single-record write is atomic and two writes to the
//!    same record never interleave.
//! 3. **Handle** ([`ResourceClient`], [`ActorClient`]) - typed request/response
//!    over `mpsc` + `oneshot` channels.
//!
//! ## Operations
//!
//! | Request | Client method | Result |
//! |---------|---------------|--------|
//! | `Create` | [`ResourceClient::create`] | new id |
//! | `Get` | [`ResourceClient::get`] | `Option<T>` |
//! | `List` | [`ResourceClient::list`] | every record, unordered |
//! | `Update` | [`ResourceClient::update`] | updated record |
//! | `Delete` | [`ResourceClient::delete`] | `()` |
//! | `Action` | [`ResourceClient::perform_action`] | `T::ActionResult` |
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use resource_actor::{ActorEntity, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Shelf { id: u32, label: String }
//! #[derive(Debug)] struct ShelfCreate { label: String }
//! #[derive(Debug)] struct ShelfUpdate { label: Option<String> }
//! #[derive(Debug, thiserror::Error)] #[error("shelf error")] struct ShelfError;
//!
//! #[async_trait]
//! impl ActorEntity for Shelf {
//!     type Id = u32;
//!     type Create = ShelfCreate;
//!     type Update = ShelfUpdate;
//!     type Action = ();
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = ShelfError;
//!
//!     fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, ShelfError> {
//!         Ok(Self { id, label: params.label })
//!     }
//!     async fn on_update(&mut self, update: ShelfUpdate, _: &()) -> Result<(), ShelfError> {
//!         if let Some(label) = update.label { self.label = label; }
//!         Ok(())
//!     }
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), ShelfError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Shelf>::new(8);
//!     let handle = tokio::spawn(actor.run(()));
//!
//!     let id = client.create(ShelfCreate { label: "New releases".into() }).await.unwrap();
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//!     assert_eq!(client.get(id).await.unwrap().unwrap().label, "New releases");
//!
//!     drop(client);
//!     handle.await.unwrap();
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a queue of expectations instead of
//! a real store, which makes failure injection (a write that fails halfway
//! through a multi-record workflow) a one-liner.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
