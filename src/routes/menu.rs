//! Public storefront catalog: categories, menu items with their modifier
//! groups, promotions and the store settings the checkout screen needs.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::menu::{CategoryList, MenuItemList, ModifierGroupList, PromotionList},
    error::AppResult,
    models::{MenuItem, StoreSettings},
    response::ApiResponse,
    routes::params::MenuItemQuery,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/items", get(list_menu_items))
        .route("/items/{id}", get(get_menu_item))
        .route("/items/{id}/modifier-groups", get(item_modifier_groups))
        .route("/promotions", get(list_promotions))
        .route("/settings", get(store_settings))
}

#[utoipa::path(
    get,
    path = "/api/menu/categories",
    responses(
        (status = 200, description = "Active categories in display order", body = ApiResponse<CategoryList>)
    ),
    tag = "Menu"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CategoryList>>> {
    Ok(Json(catalog_service::list_categories(&state.pool).await?))
}

#[utoipa::path(
    get,
    path = "/api/menu/items",
    params(
        ("category_id" = Option<Uuid>, Query, description = "Only items in this category"),
        ("q" = Option<String>, Query, description = "Search in Arabic and English names"),
        ("featured" = Option<bool>, Query, description = "Only featured items"),
    ),
    responses(
        (status = 200, description = "Available menu items", body = ApiResponse<MenuItemList>)
    ),
    tag = "Menu"
)]
pub async fn list_menu_items(
    State(state): State<AppState>,
    Query(query): Query<MenuItemQuery>,
) -> AppResult<Json<ApiResponse<MenuItemList>>> {
    Ok(Json(
        catalog_service::list_menu_items(&state.pool, query).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/menu/items/{id}",
    params(("id" = Uuid, Path, description = "Menu item ID")),
    responses(
        (status = 200, description = "Menu item", body = ApiResponse<MenuItem>),
        (status = 404, description = "Menu item not found"),
    ),
    tag = "Menu"
)]
pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<MenuItem>>> {
    Ok(Json(catalog_service::get_menu_item(&state.pool, id).await?))
}

#[utoipa::path(
    get,
    path = "/api/menu/items/{id}/modifier-groups",
    params(("id" = Uuid, Path, description = "Menu item ID")),
    responses(
        (status = 200, description = "Modifier groups with their modifiers", body = ApiResponse<ModifierGroupList>)
    ),
    tag = "Menu"
)]
pub async fn item_modifier_groups(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ModifierGroupList>>> {
    Ok(Json(
        catalog_service::item_modifier_groups(&state.pool, id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/menu/promotions",
    responses(
        (status = 200, description = "Active promotions", body = ApiResponse<PromotionList>)
    ),
    tag = "Menu"
)]
pub async fn list_promotions(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<PromotionList>>> {
    Ok(Json(catalog_service::list_promotions(&state.pool).await?))
}

#[utoipa::path(
    get,
    path = "/api/menu/settings",
    responses(
        (status = 200, description = "Store settings (defaults when unset)", body = ApiResponse<StoreSettings>)
    ),
    tag = "Menu"
)]
pub async fn store_settings(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<StoreSettings>>> {
    let settings = catalog_service::store_settings(&state.pool).await?;
    Ok(Json(ApiResponse::success("Settings", settings, None)))
}
