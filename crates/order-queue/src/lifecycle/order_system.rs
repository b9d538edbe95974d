use super::seed::sample_orders;
use crate::clients::OrderClient;
use crate::clock::{SharedClock, SystemClock};
use crate::order_actor::{self, OrderError};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running order store: the actor task plus the client used to reach it.
///
/// # Example
///
/// ```rust
/// use order_queue::lifecycle::OrderSystem;
/// use order_queue::model::OrderCreate;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = OrderSystem::new(32);
///     system
///         .order_client
///         .create_order(OrderCreate::new("Ana Costa", "Lanche", "Cheese toast"))
///         .await?;
///     assert_eq!(system.order_client.list_orders().await?.len(), 1);
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct OrderSystem {
    pub order_client: OrderClient,
    handle: JoinHandle<()>,
}

impl OrderSystem {
    /// Starts an empty store stamped by the system clock.
    pub fn new(buffer_size: usize) -> Self {
        Self::with_clock(buffer_size, Arc::new(SystemClock::new()))
    }

    /// Starts an empty store stamped by `clock`.
    pub fn with_clock(buffer_size: usize, clock: SharedClock) -> Self {
        let (actor, generic_client) = order_actor::new(buffer_size);
        let handle = tokio::spawn(actor.run(clock));

        Self {
            order_client: OrderClient::new(generic_client),
            handle,
        }
    }

    /// Inserts the demo orders, keeping their fixed timestamps. Returns how many were added.
    pub async fn seed_sample_orders(&self) -> Result<usize, OrderError> {
        let samples = sample_orders();
        let count = samples.len();
        for params in samples {
            self.order_client.create_order(params).await?;
        }
        info!(count, "Seeded sample orders");
        Ok(count)
    }

    /// Drops this system's client and waits for the actor to exit.
    ///
    /// Every other clone of the client must already be gone, or this waits for them.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down order store...");
        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Order actor task failed: {:?}", e);
            return Err(format!("Order actor task failed: {:?}", e));
        }

        info!("Order store shutdown complete.");
        Ok(())
    }
}
