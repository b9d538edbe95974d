//! # Queue Projector
//!
//! Derives what the operator screen shows from the store's sorted order list: the visible
//! window, the total count and per-card display attributes.
//!
//! Everything in this module is a pure function of its input. Nothing here reads the clock
//! or any other hidden state, so projecting the same list twice yields identical views.

pub mod badges;

pub use badges::*;

use crate::model::{Order, OrderId, OrderStatus};
use serde::Serialize;

/// Cards shown at once on the operator screen. A display cap only; the store is unbounded.
pub const DEFAULT_VISIBLE_ORDERS: usize = 5;

/// The first `n` orders of an already sorted list (all of them when there are fewer).
pub fn visible_window(orders: &[Order], n: usize) -> &[Order] {
    &orders[..n.min(orders.len())]
}

/// One rendered queue card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCard {
    pub id: OrderId,
    pub position: usize,
    pub ticket: String,
    pub student_name: String,
    pub initials: String,
    pub avatar_color: BadgeColor,
    pub types: Vec<TypeBadge>,
    pub details: String,
    pub status: OrderStatus,
    pub status_badge: StatusBadge,
    pub ordered_at: String,
}

impl OrderCard {
    /// Card for the order at `position` (0-based) within the visible window.
    pub fn new(order: &Order, position: usize) -> Self {
        Self {
            id: order.id,
            position,
            ticket: ticket_number(position),
            student_name: order.student_name.clone(),
            initials: initials(&order.student_name),
            avatar_color: avatar_color(position),
            types: type_badges(&order.order_type),
            details: order.details.clone(),
            status: order.status,
            status_badge: status_badge(order.status),
            ordered_at: format_time(order.created_at),
        }
    }
}

/// The whole screen model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueView {
    /// Every order in the store, not just the visible ones.
    pub total_orders: usize,
    pub cards: Vec<OrderCard>,
    /// The order "Next Order" acts on: the head of the window.
    pub head: Option<OrderId>,
    pub can_advance: bool,
}

impl QueueView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Projects a sorted order list onto a screen showing at most `visible` cards.
pub fn project(orders: &[Order], visible: usize) -> QueueView {
    let cards: Vec<OrderCard> = visible_window(orders, visible)
        .iter()
        .enumerate()
        .map(|(position, order)| OrderCard::new(order, position))
        .collect();
    let head = cards.first().map(|card| card.id);

    QueueView {
        total_orders: orders.len(),
        can_advance: head.is_some(),
        head,
        cards,
    }
}
