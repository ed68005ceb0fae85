//! Checkout, order history and the live status stream for one device.

use std::convert::Infallible;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
    routing::{get, post},
};
use tokio_stream::{Stream, StreamExt, wrappers::BroadcastStream};
use uuid::Uuid;

use crate::{
    dto::orders::{
        CheckoutRequest, CheckoutResponse, OrderHistory, OrderStatusUpdate, OrderWithItems,
    },
    error::AppResult,
    middleware::device::DeviceId,
    models::OrderStatus,
    response::ApiResponse,
    services::order_service,
    state::AppState,
    watcher::StatusTracker,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/checkout", post(checkout))
        .route("/", get(order_history))
        .route("/events", get(order_events))
        .route("/{id}", get(get_order))
}

#[utoipa::path(
    post,
    path = "/api/orders/checkout",
    params(("x-device-id" = String, Header, description = "Device identity")),
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Order placed; response carries the WhatsApp deep link", body = ApiResponse<CheckoutResponse>),
        (status = 400, description = "Validation failed; the cart is left untouched"),
    ),
    tag = "Orders"
)]
pub async fn checkout(
    State(state): State<AppState>,
    device: DeviceId,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<ApiResponse<CheckoutResponse>>> {
    Ok(Json(
        order_service::checkout(&state.pool, &device, payload).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(("x-device-id" = String, Header, description = "Device identity")),
    responses(
        (status = 200, description = "This device's recent orders, newest first", body = ApiResponse<OrderHistory>)
    ),
    tag = "Orders"
)]
pub async fn order_history(
    State(state): State<AppState>,
    device: DeviceId,
) -> AppResult<Json<ApiResponse<OrderHistory>>> {
    Ok(Json(
        order_service::order_history(&state.pool, &device).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order ID"),
        ("x-device-id" = String, Header, description = "Device identity"),
    ),
    responses(
        (status = 200, description = "Order with its item and modifier snapshots", body = ApiResponse<OrderWithItems>),
        (status = 404, description = "Not found or placed by another device"),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    device: DeviceId,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<OrderWithItems>>> {
    Ok(Json(
        order_service::get_order(&state.pool, &device, id).await?,
    ))
}

/// SSE stream of status changes for this device's orders. The tracker is
/// seeded with the current statuses at subscribe time, so only real
/// transitions reach the client and `alert` fires once per move into
/// `driver_arrived`. Events for other devices' orders are dropped.
#[utoipa::path(
    get,
    path = "/api/orders/events",
    params(("x-device-id" = String, Header, description = "Device identity")),
    responses(
        (status = 200, description = "SSE stream of OrderStatusUpdate payloads")
    ),
    tag = "Orders"
)]
pub async fn order_events(
    State(state): State<AppState>,
    device: DeviceId,
) -> AppResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    let rows: Vec<(Uuid, OrderStatus)> =
        sqlx::query_as("SELECT id, status FROM orders WHERE device_id = $1")
            .bind(&device.0)
            .fetch_all(&state.pool)
            .await?;
    let mut tracker = StatusTracker::new(rows);

    let stream = BroadcastStream::new(state.subscribe_status()).filter_map(move |event| {
        // A lag error means the bus overflowed; skip and keep streaming.
        let event = event.ok()?;
        let observation = tracker.observe(event.order_id, event.status);
        if !observation.tracked {
            return None;
        }
        let update = OrderStatusUpdate {
            order_id: event.order_id,
            status: event.status,
            alert: observation.alert,
        };
        Event::default()
            .event("status")
            .json_data(&update)
            .ok()
            .map(Ok)
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
