//! [`ActorEntity`] implementation for [`Order`].
//!
//! The context is the store clock: it stamps new orders and moves advanced ones to the
//! back of the queue. The sort key is `created_at`, so the actor's `List` is the queue.
//! None of the hooks can fail.

use super::actions::OrderAction;
use crate::clock::SharedClock;
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = SharedClock;
    type SortKey = DateTime<Utc>;
    type Error = Infallible;

    fn from_create_params(
        id: OrderId,
        params: OrderCreate,
        clock: &SharedClock,
    ) -> Result<Self, Self::Error> {
        let created_at = params.created_at.unwrap_or_else(|| clock.now());
        Ok(Order::new(id, params, created_at))
    }

    fn sort_key(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Overwrites the status only; the queue position is untouched.
    async fn on_update(
        &mut self,
        update: OrderUpdate,
        _clock: &SharedClock,
    ) -> Result<(), Self::Error> {
        self.status = update.status;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        clock: &SharedClock,
    ) -> Result<Order, Self::Error> {
        match action {
            OrderAction::MoveToEnd => {
                self.created_at = clock.now();
                Ok(self.clone())
            }
        }
    }
}
