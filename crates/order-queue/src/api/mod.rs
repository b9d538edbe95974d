//! # HTTP API
//!
//! | Path | Method | Result |
//! |------|--------|--------|
//! | `/api/orders` | GET | All orders, queue order |
//! | `/api/orders` | POST | New order (201) |
//! | `/api/orders/{id}` | GET | One order |
//! | `/api/orders/{id}/next` | POST | Order moved to the back of the queue |
//! | `/api/orders/{id}/status` | PATCH | Order with its new status |
//! | `/api/queue?limit=n` | GET | Projected operator screen |
//! | `/health` | GET | Liveness |
//!
//! Unknown ids, including ones that are not UUIDs, answer 404.

pub mod error;
pub mod handlers;
pub mod health;

pub use error::{ApiError, ApiResult};

use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::clients::OrderClient;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderClient,
    /// Cards in `/api/queue` when the request gives no `limit`.
    pub visible_orders: usize,
}

impl AppState {
    pub fn new(orders: OrderClient, visible_orders: usize) -> Self {
        Self {
            orders,
            visible_orders,
        }
    }
}

fn order_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/orders",
            get(handlers::list_orders).post(handlers::create_order),
        )
        .route("/api/orders/{id}", get(handlers::get_order))
        .route("/api/orders/{id}/next", post(handlers::advance_order))
        .route("/api/orders/{id}/status", patch(handlers::update_status))
        .route("/api/queue", get(handlers::queue))
}

/// The complete application, ready for `axum::serve` or in-process `oneshot` calls.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(order_routes())
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
