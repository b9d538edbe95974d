//! # ActorEntity Trait
//!
//! The contract between a domain type and the generic [`ResourceActor`](crate::ResourceActor).
//! Associated types name the id, the create/update payloads, the custom actions and their
//! result, the injected context, the error and the sort key. Hooks carry the business
//! logic; the actor carries everything else.
//!
//! # Ordering
//! Every entity exposes a [`ActorEntity::sort_key`]. `List` requests return the store
//! sorted ascending by that key; entities with equal keys keep the order in which their
//! keys were written. A queue can therefore be reordered purely by rewriting the key.
//!
//! # Hooks
//! `on_create` defaults to accepting every entity. `on_update` and `handle_action` must be
//! written by the implementor. Both run on a copy of the stored entity, which replaces the
//! original only when the hook returns `Ok`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A resource managed by a `ResourceActor`.
///
/// Hooks are async and receive the actor's `Context`, which is handed to `run()` rather than
/// `new()`, so dependencies such as a clock can be wired in after construction.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier, produced by the id generator handed to `ResourceActor::new`.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Creation payload.
    type Create: Send + Sync + Debug;

    /// Update payload.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `MoveToEnd`).
    type Action: Send + Sync + Debug;

    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected through `run()`; `()` when there are none.
    type Context: Send + Sync;

    /// Key used to order `List` results. Smaller keys come first.
    type SortKey: Ord + Clone + Send + Sync + Debug;

    /// One error enum per actor, shared by every hook.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its new id and the creation payload. Runs before `on_create`.
    fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    /// Current ordering key of this entity.
    fn sort_key(&self) -> Self::SortKey;

    /// Runs before the entity is stored. An error discards it.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
