//! # Order Client
//!
//! The Order Store's public handle. It wraps a `ResourceClient<Order>` and exposes the four
//! store operations: list, create, set status and advance. The client is a cheap clone, so
//! every request handler gets its own copy.
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use crate::order_actor::{OrderAction, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// All orders, ascending by ordering timestamp; equal timestamps keep insertion order.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.list().await?;
        debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }

    /// Stores a new order stamped with the store clock (unless seeded with a fixed time).
    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        let order = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %order.id, status = %order.status, "Order created");
        Ok(order)
    }

    /// Overwrites the status of one order. `Ok(None)` when the id is unknown.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, OrderError> {
        debug!("Sending request");
        let result = self.inner.update(id, OrderUpdate { status }).await;
        found(id, result)
    }

    /// Moves one order to the back of the queue without touching its status.
    /// `Ok(None)` when the id is unknown.
    #[instrument(skip(self))]
    pub async fn advance(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        debug!("Sending request");
        let result = self.inner.perform_action(id, OrderAction::MoveToEnd).await;
        found(id, result)
    }
}

/// Turns the framework's not-found into the recoverable `None` result.
fn found(
    id: OrderId,
    result: Result<Order, FrameworkError>,
) -> Result<Option<Order>, OrderError> {
    match result {
        Ok(order) => Ok(Some(order)),
        Err(e) if e.is_not_found() => {
            warn!(order_id = %id, "No such order");
            Ok(None)
        }
        Err(e) => Err(OrderClient::map_error(e)),
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => OrderError::Rejected(inner.to_string()),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
