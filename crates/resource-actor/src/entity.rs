//! # ActorEntity Trait
//!
//! The contract a record type implements to be stored by a
//! [`ResourceActor`](crate::ResourceActor): associated types for its id, DTOs,
//! custom actions, runtime context and error, plus the lifecycle hooks where
//! validation happens.
//!
//! Hooks run inside the actor task while it holds exclusive access to the
//! record, so a hook that rejects a write leaves the stored record untouched
//! as long as it validates before mutating.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A record type managed by a `ResourceActor`.
///
/// # Context
/// `Context` is handed to `run()` rather than `new()`, so dependencies (other
/// clients, settings) can be wired after every actor has been constructed. Use
/// `()` when the record needs nothing.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The record identifier. Ids are allocated by the store from a `u32`
    /// counter starting at 1.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for inserting a new record.
    type Create: Send + Sync + Debug;

    /// Payload for changing an existing record.
    type Update: Send + Sync + Debug;

    /// Record-specific operations (e.g. `CheckStock`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into every hook.
    type Context: Send + Sync;

    /// The record's error type.
    ///
    /// One enum per record type rather than one per operation; clients only
    /// ever pattern match on a single error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the record from its allocated id and the create payload.
    /// Called before `on_create`; returning an error aborts the insert.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs after construction and before the record is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update payload. Validate first, then mutate.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before the record is removed; an error keeps the record.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handles a custom record-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
