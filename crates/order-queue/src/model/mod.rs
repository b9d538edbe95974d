//! Pure data structures for the order queue.
//!
//! [`Order`] implements [`ActorEntity`](actor_framework::ActorEntity) in
//! [`crate::order_actor::entity`]; everything here is plain data plus serde wiring.

pub mod order;
pub mod status;

pub use order::*;
pub use status::*;
