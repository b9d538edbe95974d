//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages one type of resource (the [`ActorEntity`]). Instead of ad-hoc messages
/// for every operation, requests are standardised around a small lifecycle:
///
/// - **Create**: Uses [`ActorEntity::Create`] to initialise a new resource and returns it.
/// - **Get (Read)**: Fetches the current state of one resource by ID.
/// - **List**: Returns every resource, ordered by [`ActorEntity::sort_key`].
/// - **Update**: Uses [`ActorEntity::Update`] to modify an existing resource.
/// - **Action**: Executes a custom [`ActorEntity::Action`].
///
/// Resources are never removed, so there is no delete request.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
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
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
