//! # Actor Framework
//!
//! Building blocks for type-safe resource stores on top of the **Actor Model**. Each resource
//! type lives in its own actor that owns a keyed container of entities and processes requests
//! one at a time, so no locks are needed around the state.
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your business logic and domain models
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing, identity and ordering
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! Business logic is written **once** in the entity trait; the framework handles the message
//! passing, not-found handling, and the sorted `List` view.
//!
//! ## Ordering
//!
//! Entities expose a sort key. `List` returns them ascending by key, and ties are broken by
//! the order in which the keys were written. Rewriting an entity's key is therefore enough
//! to move it within the list.
//!
//! ## Context Injection Pattern
//!
//! Dependencies (a clock, other clients) are injected at **runtime** via `run(context)`, not
//! at construction time, and every hook receives them.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Clients are cheap clones of a channel sender
//!
//! ## Testing
//!
//! The [`mock`] module provides [`mock::MockClient`], which answers a real `ResourceClient`
//! from scripted expectations so client logic can be tested without an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
