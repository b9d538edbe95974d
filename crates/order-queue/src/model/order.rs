//! A student's food or dessert order waiting in the queue.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! `created_at` doubles as the queue position: the store lists orders ascending by it,
//! and moving an order to the back of the queue rewrites it.

use crate::model::OrderStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub Uuid);

impl OrderId {
    /// A fresh random (v4) identifier.
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Wire and storage shape of an order.
///
/// ```json
/// {
///   "id": "5b6c1f0e-...",
///   "studentName": "Larissa Silva",
///   "orderType": "Lanche",
///   "details": "Club sandwich with fries and pickle",
///   "status": "received",
///   "createdAt": "2024-07-30T21:00:44Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub student_name: String,
    /// One or more category labels separated by `/` (e.g. `"Lanche/Sobremesa"`).
    pub order_type: String,
    pub details: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub student_name: String,
    pub order_type: String,
    pub details: String,
    /// `None` means [`OrderStatus::Received`].
    pub status: Option<OrderStatus>,
    /// Fixed timestamp for seeded orders; `None` takes the store clock's reading.
    pub created_at: Option<DateTime<Utc>>,
}

impl OrderCreate {
    pub fn new(
        student_name: impl Into<String>,
        order_type: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            student_name: student_name.into(),
            order_type: order_type.into(),
            details: details.into(),
            status: None,
            created_at: None,
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Status-only update; nothing else about an order is editable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderUpdate {
    pub status: OrderStatus,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (set by the store)
    /// * `params` - Creation payload; a missing status becomes `received`
    /// * `created_at` - Ordering timestamp
    pub fn new(id: OrderId, params: OrderCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            student_name: params.student_name,
            order_type: params.order_type,
            details: params.details,
            status: params.status.unwrap_or_default(),
            created_at,
        }
    }
}
