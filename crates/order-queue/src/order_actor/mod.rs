//! # Order Actor
//!
//! The order store: a [`ResourceActor`] over [`Order`] entities keyed by random UUIDs and
//! listed by ordering timestamp.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`actions`] - [`OrderAction::MoveToEnd`], the reorder primitive behind "Next Order"
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory function that creates the actor and its generic client
//!
//! ## Usage
//!
//! ```rust
//! use order_queue::clients::OrderClient;
//! use order_queue::clock::{SharedClock, SystemClock};
//! use order_queue::model::OrderCreate;
//! use order_queue::order_actor;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = order_actor::new(32);
//!     let client = OrderClient::new(generic_client);
//!
//!     let clock: SharedClock = Arc::new(SystemClock::new());
//!     tokio::spawn(actor.run(clock));
//!
//!     let order = client
//!         .create_order(OrderCreate::new("Pedro Lima", "Lanche", "Beef burger"))
//!         .await?;
//!     client.advance(order.id).await?;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::{Order, OrderId};
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
///
/// `buffer_size` bounds the number of requests waiting for the actor.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size, OrderId::new_v4)
}
