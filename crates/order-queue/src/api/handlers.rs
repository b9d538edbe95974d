//! Order API handlers.
//!
//! Body and query extraction failures are caught here and turned into
//! [`ApiError::Validation`], so clients always get the JSON error shape.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use crate::projector::{project, QueueView};
use actor_framework::ActorClient;

/// Body of `POST /api/orders`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub student_name: String,
    pub order_type: String,
    pub details: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl NewOrder {
    fn into_params(self) -> ApiResult<OrderCreate> {
        let mut params = OrderCreate::new(self.student_name, self.order_type, self.details);
        if let Some(status) = self.status {
            params = params.with_status(parse_status(&status)?);
        }
        Ok(params)
    }
}

/// Body of `PATCH /api/orders/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct StatusChange {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct QueueQuery {
    pub limit: Option<usize>,
}

fn parse_status(raw: &str) -> ApiResult<OrderStatus> {
    raw.parse::<OrderStatus>()
        .map_err(|e| ApiError::Validation(e.to_string()))
}

/// Any id that is not a UUID cannot name an order.
fn parse_id(raw: &str) -> ApiResult<OrderId> {
    raw.parse().map_err(|_| ApiError::order_not_found(raw))
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::Validation(rejection.body_text()))
}

/// GET /api/orders
pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Json<Vec<Order>>> {
    Ok(Json(state.orders.list_orders().await?))
}

/// POST /api/orders
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<NewOrder>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Order>)> {
    let params = body(payload)?.into_params()?;
    let order = state.orders.create_order(params).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Order>> {
    let id = parse_id(&raw_id)?;
    state
        .orders
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::order_not_found(id))
}

/// POST /api/orders/{id}/next
pub async fn advance_order(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Order>> {
    let id = parse_id(&raw_id)?;
    let order = state
        .orders
        .advance(id)
        .await?
        .ok_or_else(|| ApiError::order_not_found(id))?;
    info!(order_id = %id, "Order sent to the back of the queue");
    Ok(Json(order))
}

/// PATCH /api/orders/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<StatusChange>, JsonRejection>,
) -> ApiResult<Json<Order>> {
    let id = parse_id(&raw_id)?;
    let status = parse_status(&body(payload)?.status)?;
    state
        .orders
        .set_status(id, status)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::order_not_found(id))
}

/// GET /api/queue
pub async fn queue(
    State(state): State<AppState>,
    query: Result<Query<QueueQuery>, QueryRejection>,
) -> ApiResult<Json<QueueView>> {
    let Query(query) = query.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let orders = state.orders.list_orders().await?;
    let visible = query.limit.unwrap_or(state.visible_orders);
    Ok(Json(project(&orders, visible)))
}
