//! Per-device cart endpoints. Every route requires the `x-device-id` header;
//! the cart lives server side, keyed by that id.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::cart::{AddCartItemRequest, CartView, UpdateCartQuantityRequest},
    error::AppResult,
    middleware::device::DeviceId,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_cart))
        .route("/items", post(add_item))
        .route("/items/{id}", put(update_quantity))
        .route("/items/{id}", delete(remove_item))
        .route("/", delete(clear_cart))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    params(("x-device-id" = String, Header, description = "Device identity")),
    responses(
        (status = 200, description = "Current cart", body = ApiResponse<CartView>),
        (status = 400, description = "Missing device id"),
    ),
    tag = "Cart"
)]
pub async fn get_cart(
    State(state): State<AppState>,
    device: DeviceId,
) -> AppResult<Json<ApiResponse<CartView>>> {
    Ok(Json(cart_service::get_cart(&state.pool, &device).await?))
}

#[utoipa::path(
    post,
    path = "/api/cart/items",
    params(("x-device-id" = String, Header, description = "Device identity")),
    request_body = AddCartItemRequest,
    responses(
        (status = 200, description = "Cart after the addition", body = ApiResponse<CartView>),
        (status = 400, description = "Unknown item, unavailable modifier or bad quantity"),
    ),
    tag = "Cart"
)]
pub async fn add_item(
    State(state): State<AppState>,
    device: DeviceId,
    Json(payload): Json<AddCartItemRequest>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    Ok(Json(
        cart_service::add_item(&state.pool, &device, payload).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/cart/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Cart line ID"),
        ("x-device-id" = String, Header, description = "Device identity"),
    ),
    request_body = UpdateCartQuantityRequest,
    responses(
        (status = 200, description = "Cart after the update; quantity below 1 removes the line", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn update_quantity(
    State(state): State<AppState>,
    device: DeviceId,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCartQuantityRequest>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    Ok(Json(
        cart_service::update_quantity(&state.pool, &device, id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/cart/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Cart line ID"),
        ("x-device-id" = String, Header, description = "Device identity"),
    ),
    responses(
        (status = 200, description = "Cart after the removal", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn remove_item(
    State(state): State<AppState>,
    device: DeviceId,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    Ok(Json(
        cart_service::remove_item(&state.pool, &device, id).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/cart",
    params(("x-device-id" = String, Header, description = "Device identity")),
    responses(
        (status = 200, description = "Empty cart", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    device: DeviceId,
) -> AppResult<Json<ApiResponse<CartView>>> {
    Ok(Json(cart_service::clear(&state.pool, &device).await?))
}
