//! # System Lifecycle
//!
//! Starting and stopping the order store.
//!
//! [`OrderSystem`] spawns the order actor with its clock injected through `run(context)` and
//! hands out the [`OrderClient`](crate::clients::OrderClient). Shutdown is channel-driven:
//! dropping the last client closes the actor's mailbox, the actor drains what is left and
//! exits, and [`OrderSystem::shutdown`] awaits its task.
//!
//! The HTTP router holds its own clone of the client, so the server has to be stopped
//! before `shutdown` can complete.
//!
//! [`seed`] holds the demo orders a fresh store can be filled with.

pub mod order_system;
pub mod seed;

pub use order_system::*;
