//! Operator screen state.
//!
//! The screen keeps the last list fetched from the store and whether a "Next Order" request
//! is in flight. It never assumes a mutation is visible until it has re-fetched: every
//! successful advance is followed by a fresh `list_orders`.

use crate::clients::OrderClient;
use crate::model::{Order, OrderId};
use crate::order_actor::OrderError;
use crate::projector::{project, visible_window, QueueView};
use serde::Serialize;
use tracing::{debug, info};

pub const NEXT_ORDER_LABEL: &str = "Next Order";
pub const PROCESSING_LABEL: &str = "Processing...";

/// What the screen renders right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenView {
    /// No list has been fetched yet.
    pub loading: bool,
    pub queue: QueueView,
    /// Label of the advance button.
    pub next_label: &'static str,
}

#[derive(Debug)]
pub struct QueueScreen {
    visible: usize,
    orders: Option<Vec<Order>>,
    pending: Option<OrderId>,
}

impl QueueScreen {
    pub fn new(visible: usize) -> Self {
        Self {
            visible,
            orders: None,
            pending: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replaces the cached list with a fresh read from the store.
    pub async fn refresh(&mut self, client: &OrderClient) -> Result<(), OrderError> {
        let orders = client.list_orders().await?;
        debug!(count = orders.len(), "Screen refreshed");
        self.orders = Some(orders);
        Ok(())
    }

    /// Claims the advance action for the head of the visible window.
    ///
    /// Returns `None`, and changes nothing, when the window is empty or an advance is
    /// already in flight.
    pub fn begin_next(&mut self) -> Option<OrderId> {
        if self.pending.is_some() {
            return None;
        }
        let orders = self.orders.as_deref()?;
        let head = visible_window(orders, self.visible).first()?.id;
        self.pending = Some(head);
        Some(head)
    }

    /// Releases the in-flight flag set by [`QueueScreen::begin_next`].
    pub fn finish_next(&mut self) {
        self.pending = None;
    }

    /// "Next Order": moves the head of the queue to the back, then re-fetches.
    ///
    /// `Ok(None)` when there was nothing to do (empty queue, request already pending) or
    /// the head vanished from the store in the meantime.
    pub async fn next_order(&mut self, client: &OrderClient) -> Result<Option<Order>, OrderError> {
        let Some(head) = self.begin_next() else {
            debug!("Next order ignored");
            return Ok(None);
        };
        let result = client.advance(head).await;
        self.finish_next();

        let moved = result?;
        if let Some(order) = &moved {
            info!(order_id = %order.id, "Order moved to the end of the queue");
        }
        self.refresh(client).await?;
        Ok(moved)
    }

    pub fn view(&self) -> ScreenView {
        let orders = self.orders.as_deref().unwrap_or_default();
        let mut queue = project(orders, self.visible);
        queue.can_advance = queue.can_advance && self.pending.is_none();

        ScreenView {
            loading: self.orders.is_none(),
            queue,
            next_label: if self.is_pending() {
                PROCESSING_LABEL
            } else {
                NEXT_ORDER_LABEL
            },
        }
    }
}
