//! # Order Queue
//!
//! An in-memory queue of student food orders behind a small JSON API.
//!
//! - **[order_actor]**: the order store, a [`ResourceActor`](actor_framework::ResourceActor)
//!   over [`Order`](model::Order) entities kept in timestamp order.
//! - **[clients]**: [`OrderClient`](clients::OrderClient), the store's list, create, set-status
//!   and advance operations.
//! - **[projector]**: pure view derivation (visible window, initials, badges).
//! - **[screen]**: operator screen state on top of the client.
//! - **[api]**: the axum router.
//! - **[lifecycle]**: starting, seeding and stopping the store.
//!
//! See [`actor_framework::mock`] for testing clients without spawning the actor.

pub mod api;
pub mod clients;
pub mod clock;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod projector;
pub mod screen;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "order_queue=info,actor_framework=info,tower_http=info";
