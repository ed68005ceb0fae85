//! Back-office surface: catalog CRUD, order management, store settings and
//! the driver workflow. All handlers take an authenticated user and the
//! service layer enforces the admin role.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::{
        admin::{
            CreateCategoryRequest, CreateMenuItemRequest, CreateModifierGroupRequest,
            CreateModifierRequest, CreatePromotionRequest, SetItemModifierGroupsRequest,
            UpdateCategoryRequest, UpdateMenuItemRequest, UpdateModifierGroupRequest,
            UpdateModifierRequest, UpdateOrderStatusRequest, UpdatePromotionRequest,
            UpdateStoreSettingsRequest,
        },
        menu::{CategoryList, MenuItemList, PromotionList},
        orders::{OrderList, OrderWithItems},
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Category, MenuItem, Modifier, ModifierGroup, Order, Promotion, StoreSettings},
    response::ApiResponse,
    routes::params::OrderListQuery,
    services::admin_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_all_orders))
        .route("/orders/{id}", get(get_order_admin))
        .route("/orders/{id}/status", put(update_order_status))
        .route("/driver/orders", get(driver_orders))
        .route("/driver/orders/{id}/arrived", put(driver_mark_arrived))
        .route("/driver/orders/{id}/delivered", put(driver_mark_delivered))
        .route("/categories", get(list_categories))
        .route("/categories", post(create_category))
        .route("/categories/{id}", put(update_category))
        .route("/categories/{id}", delete(delete_category))
        .route("/menu-items", get(list_menu_items))
        .route("/menu-items", post(create_menu_item))
        .route("/menu-items/{id}", put(update_menu_item))
        .route("/menu-items/{id}", delete(delete_menu_item))
        .route(
            "/menu-items/{id}/modifier-groups",
            put(set_item_modifier_groups),
        )
        .route("/modifier-groups", post(create_modifier_group))
        .route("/modifier-groups/{id}", put(update_modifier_group))
        .route("/modifier-groups/{id}", delete(delete_modifier_group))
        .route("/modifiers", post(create_modifier))
        .route("/modifiers/{id}", put(update_modifier))
        .route("/modifiers/{id}", delete(delete_modifier))
        .route("/promotions", get(list_promotions))
        .route("/promotions", post(create_promotion))
        .route("/promotions/{id}", put(update_promotion))
        .route("/promotions/{id}", delete(delete_promotion))
        .route("/settings", get(get_settings))
        .route("/settings", put(update_settings))
}

// ---------------------------------------------------------------- orders

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("status" = Option<String>, Query, description = "Filter by order status"),
    ),
    responses((status = 200, description = "All orders, newest first", body = ApiResponse<OrderList>)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_all_orders(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    Ok(Json(
        admin_service::list_all_orders(&state, &user, query).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders/{id}",
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with items", body = ApiResponse<OrderWithItems>),
        (status = 404, description = "Order not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_order_admin(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<OrderWithItems>>> {
    Ok(Json(
        admin_service::get_order_admin(&state, &user, id).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/orders/{id}/status",
    params(("id" = Uuid, Path, description = "Order ID")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Updated order", body = ApiResponse<Order>),
        (status = 404, description = "Order not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    Ok(Json(
        admin_service::update_order_status(&state, &user, id, payload).await?,
    ))
}

// ---------------------------------------------------------------- driver

#[utoipa::path(
    get,
    path = "/api/admin/driver/orders",
    responses((status = 200, description = "Delivery orders that are ready or at the door", body = ApiResponse<OrderList>)),
    security(("bearer_auth" = [])),
    tag = "Driver"
)]
pub async fn driver_orders(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    Ok(Json(admin_service::driver_orders(&state, &user).await?))
}

#[utoipa::path(
    put,
    path = "/api/admin/driver/orders/{id}/arrived",
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order marked driver_arrived", body = ApiResponse<Order>),
        (status = 400, description = "Order is not ready"),
    ),
    security(("bearer_auth" = [])),
    tag = "Driver"
)]
pub async fn driver_mark_arrived(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Order>>> {
    Ok(Json(
        admin_service::driver_mark_arrived(&state, &user, id).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/driver/orders/{id}/delivered",
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order marked delivered", body = ApiResponse<Order>),
        (status = 400, description = "Driver has not arrived yet"),
    ),
    security(("bearer_auth" = [])),
    tag = "Driver"
)]
pub async fn driver_mark_delivered(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Order>>> {
    Ok(Json(
        admin_service::driver_mark_delivered(&state, &user, id).await?,
    ))
}

// ------------------------------------------------------------ categories

#[utoipa::path(
    get,
    path = "/api/admin/categories",
    responses((status = 200, description = "All categories, inactive included", body = ApiResponse<CategoryList>)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_categories(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<CategoryList>>> {
    Ok(Json(admin_service::list_categories(&state, &user).await?))
}

#[utoipa::path(
    post,
    path = "/api/admin/categories",
    request_body = CreateCategoryRequest,
    responses((status = 200, description = "Created category", body = ApiResponse<Category>)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_category(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateCategoryRequest>,
) -> AppResult<Json<ApiResponse<Category>>> {
    Ok(Json(
        admin_service::create_category(&state, &user, payload).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses((status = 200, description = "Updated category", body = ApiResponse<Category>)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_category(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> AppResult<Json<ApiResponse<Category>>> {
    Ok(Json(
        admin_service::update_category(&state, &user, id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/admin/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses((status = 200, description = "Deleted")),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(
        admin_service::delete_category(&state, &user, id).await?,
    ))
}

// ------------------------------------------------------------ menu items

#[utoipa::path(
    get,
    path = "/api/admin/menu-items",
    responses((status = 200, description = "All menu items, unavailable included", body = ApiResponse<MenuItemList>)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_menu_items(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<MenuItemList>>> {
    Ok(Json(admin_service::list_menu_items(&state, &user).await?))
}

#[utoipa::path(
    post,
    path = "/api/admin/menu-items",
    request_body = CreateMenuItemRequest,
    responses((status = 200, description = "Created menu item", body = ApiResponse<MenuItem>)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_menu_item(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateMenuItemRequest>,
) -> AppResult<Json<ApiResponse<MenuItem>>> {
    Ok(Json(
        admin_service::create_menu_item(&state, &user, payload).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/menu-items/{id}",
    params(("id" = Uuid, Path, description = "Menu item ID")),
    request_body = UpdateMenuItemRequest,
    responses((status = 200, description = "Updated menu item", body = ApiResponse<MenuItem>)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_menu_item(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMenuItemRequest>,
) -> AppResult<Json<ApiResponse<MenuItem>>> {
    Ok(Json(
        admin_service::update_menu_item(&state, &user, id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/admin/menu-items/{id}",
    params(("id" = Uuid, Path, description = "Menu item ID")),
    responses((status = 200, description = "Deleted")),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(
        admin_service::delete_menu_item(&state, &user, id).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/menu-items/{id}/modifier-groups",
    params(("id" = Uuid, Path, description = "Menu item ID")),
    request_body = SetItemModifierGroupsRequest,
    responses(
        (status = 200, description = "Links replaced"),
        (status = 404, description = "Menu item not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn set_item_modifier_groups(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetItemModifierGroupsRequest>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(
        admin_service::set_item_modifier_groups(&state, &user, id, payload).await?,
    ))
}

// --------------------------------------------------- modifier groups

#[utoipa::path(
    post,
    path = "/api/admin/modifier-groups",
    request_body = CreateModifierGroupRequest,
    responses((status = 200, description = "Created modifier group", body = ApiResponse<ModifierGroup>)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_modifier_group(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateModifierGroupRequest>,
) -> AppResult<Json<ApiResponse<ModifierGroup>>> {
    Ok(Json(
        admin_service::create_modifier_group(&state, &user, payload).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/modifier-groups/{id}",
    params(("id" = Uuid, Path, description = "Modifier group ID")),
    request_body = UpdateModifierGroupRequest,
    responses((status = 200, description = "Updated modifier group", body = ApiResponse<ModifierGroup>)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_modifier_group(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateModifierGroupRequest>,
) -> AppResult<Json<ApiResponse<ModifierGroup>>> {
    Ok(Json(
        admin_service::update_modifier_group(&state, &user, id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/admin/modifier-groups/{id}",
    params(("id" = Uuid, Path, description = "Modifier group ID")),
    responses((status = 200, description = "Deleted")),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_modifier_group(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(
        admin_service::delete_modifier_group(&state, &user, id).await?,
    ))
}

// --------------------------------------------------------- modifiers

#[utoipa::path(
    post,
    path = "/api/admin/modifiers",
    request_body = CreateModifierRequest,
    responses((status = 200, description = "Created modifier", body = ApiResponse<Modifier>)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_modifier(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateModifierRequest>,
) -> AppResult<Json<ApiResponse<Modifier>>> {
    Ok(Json(
        admin_service::create_modifier(&state, &user, payload).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/modifiers/{id}",
    params(("id" = Uuid, Path, description = "Modifier ID")),
    request_body = UpdateModifierRequest,
    responses((status = 200, description = "Updated modifier", body = ApiResponse<Modifier>)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_modifier(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateModifierRequest>,
) -> AppResult<Json<ApiResponse<Modifier>>> {
    Ok(Json(
        admin_service::update_modifier(&state, &user, id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/admin/modifiers/{id}",
    params(("id" = Uuid, Path, description = "Modifier ID")),
    responses((status = 200, description = "Deleted")),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_modifier(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(
        admin_service::delete_modifier(&state, &user, id).await?,
    ))
}

// -------------------------------------------------------- promotions

#[utoipa::path(
    get,
    path = "/api/admin/promotions",
    responses((status = 200, description = "All promotions, inactive included", body = ApiResponse<PromotionList>)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_promotions(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<PromotionList>>> {
    Ok(Json(admin_service::list_promotions(&state, &user).await?))
}

#[utoipa::path(
    post,
    path = "/api/admin/promotions",
    request_body = CreatePromotionRequest,
    responses((status = 200, description = "Created promotion", body = ApiResponse<Promotion>)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_promotion(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreatePromotionRequest>,
) -> AppResult<Json<ApiResponse<Promotion>>> {
    Ok(Json(
        admin_service::create_promotion(&state, &user, payload).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/promotions/{id}",
    params(("id" = Uuid, Path, description = "Promotion ID")),
    request_body = UpdatePromotionRequest,
    responses((status = 200, description = "Updated promotion", body = ApiResponse<Promotion>)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_promotion(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePromotionRequest>,
) -> AppResult<Json<ApiResponse<Promotion>>> {
    Ok(Json(
        admin_service::update_promotion(&state, &user, id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/admin/promotions/{id}",
    params(("id" = Uuid, Path, description = "Promotion ID")),
    responses((status = 200, description = "Deleted")),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_promotion(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(
        admin_service::delete_promotion(&state, &user, id).await?,
    ))
}

// ---------------------------------------------------------- settings

#[utoipa::path(
    get,
    path = "/api/admin/settings",
    responses((status = 200, description = "Store settings", body = ApiResponse<StoreSettings>)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_settings(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<StoreSettings>>> {
    Ok(Json(admin_service::get_settings(&state, &user).await?))
}

#[utoipa::path(
    put,
    path = "/api/admin/settings",
    request_body = UpdateStoreSettingsRequest,
    responses((status = 200, description = "Updated settings", body = ApiResponse<StoreSettings>)),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_settings(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<UpdateStoreSettingsRequest>,
) -> AppResult<Json<ApiResponse<StoreSettings>>> {
    Ok(Json(
        admin_service::update_settings(&state, &user, payload).await?,
    ))
}
