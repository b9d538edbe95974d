//! Domain clients wrapping the generic [`ResourceClient`](actor_framework::ResourceClient).

pub mod order_client;

pub use order_client::*;
