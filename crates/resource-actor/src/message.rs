//! # Store Requests
//!
//! The request envelope carried from [`ResourceClient`](crate::ResourceClient)
//! to [`ResourceActor`](crate::ResourceActor). Every variant carries its own
//! `oneshot` reply channel.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A request to a record store.
///
/// The variants are the usual CRUD set plus `List` (whole-table read, used by
/// catalog screens) and `Action` for record-specific operations such as a
/// stock check. Payload types come from the [`ActorEntity`] associated types,
/// so a customer payload cannot be sent to the product store.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
