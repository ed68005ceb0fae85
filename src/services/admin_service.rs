//! Admin back office: thin CRUD over the catalog tables, order management,
//! and the driver workflow. Every entry point requires the admin role.

use uuid::Uuid;

use crate::{
    audit::log_audit,
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
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{
        Category, MenuItem, Modifier, ModifierGroup, Order, OrderStatus, Promotion, StoreSettings,
    },
    response::{ApiResponse, Meta},
    routes::params::OrderListQuery,
    services::{catalog_service, order_service},
    state::AppState,
    watcher::StatusEvent,
};

// ---------------------------------------------------------------- orders

pub async fn list_all_orders(
    state: &AppState,
    user: &AuthUser,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    ensure_admin(user)?;
    let (page, limit, offset) = query.normalize();

    let items = sqlx::query_as::<_, Order>(
        r#"
        SELECT * FROM orders
        WHERE ($1::order_status IS NULL OR status = $1)
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(query.status)
    .bind(limit)
    .bind(offset)
    .fetch_all(&state.pool)
    .await?;

    let total: (i64,) = sqlx::query_as(
        "SELECT count(*) FROM orders WHERE ($1::order_status IS NULL OR status = $1)",
    )
    .bind(query.status)
    .fetch_one(&state.pool)
    .await?;

    let meta = Meta::new(page, limit, total.0);
    Ok(ApiResponse::success("Ok", OrderList { items }, Some(meta)))
}

pub async fn get_order_admin(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<OrderWithItems>> {
    ensure_admin(user)?;
    let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?;
    let order = match order {
        Some(order) => order,
        None => return Err(AppError::NotFound),
    };

    let items = order_service::order_items_with_modifiers(&state.pool, order.id).await?;

    Ok(ApiResponse::success(
        "OK",
        OrderWithItems { order, items },
        Some(Meta::empty()),
    ))
}

/// Free-form status update: the back office may set any status in any order,
/// including cancellation from any state. Publishes the change to the status
/// bus for live watchers.
pub async fn update_order_status(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<Order>> {
    ensure_admin(user)?;
    set_status(state, user, id, payload.status, None).await
}

async fn set_status(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    status: OrderStatus,
    required_current: Option<OrderStatus>,
) -> AppResult<ApiResponse<Order>> {
    let current = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?;
    let current = match current {
        Some(order) => order,
        None => return Err(AppError::NotFound),
    };

    if let Some(required) = required_current {
        if current.status != required {
            return Err(AppError::BadRequest(format!(
                "order is not in the expected status ({:?})",
                required
            )));
        }
    }

    let order = sqlx::query_as::<_, Order>(
        "UPDATE orders SET status = $2, updated_at = now() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(status)
    .fetch_one(&state.pool)
    .await?;

    state.publish_status(StatusEvent {
        order_id: order.id,
        status: order.status,
    });

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "order_status_update",
        Some("orders"),
        Some(serde_json::json!({ "order_id": order.id, "status": order.status })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success("Status updated", order, None))
}

// ---------------------------------------------------------------- driver

/// Orders the driver screen works with: out for delivery or waiting at the
/// customer's door.
pub async fn driver_orders(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<OrderList>> {
    ensure_admin(user)?;
    let items = sqlx::query_as::<_, Order>(
        r#"
        SELECT * FROM orders
        WHERE status IN ('ready', 'driver_arrived') AND order_type = 'delivery'
        ORDER BY created_at
        "#,
    )
    .fetch_all(&state.pool)
    .await?;

    Ok(ApiResponse::success(
        "Ok",
        OrderList { items },
        Some(Meta::empty()),
    ))
}

pub async fn driver_mark_arrived(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Order>> {
    ensure_admin(user)?;
    set_status(
        state,
        user,
        id,
        OrderStatus::DriverArrived,
        Some(OrderStatus::Ready),
    )
    .await
}

pub async fn driver_mark_delivered(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Order>> {
    ensure_admin(user)?;
    set_status(
        state,
        user,
        id,
        OrderStatus::Delivered,
        Some(OrderStatus::DriverArrived),
    )
    .await
}

// ------------------------------------------------------------ categories

pub async fn list_categories(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<CategoryList>> {
    ensure_admin(user)?;
    let items =
        sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY sort_order, name_en")
            .fetch_all(&state.pool)
            .await?;
    Ok(ApiResponse::success(
        "Categories",
        CategoryList { items },
        Some(Meta::empty()),
    ))
}

pub async fn create_category(
    state: &AppState,
    user: &AuthUser,
    payload: CreateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    ensure_admin(user)?;
    let category = sqlx::query_as::<_, Category>(
        r#"
        INSERT INTO categories (id, name_ar, name_en, image_url, is_active, sort_order)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(payload.name_ar)
    .bind(payload.name_en)
    .bind(payload.image_url)
    .bind(payload.is_active)
    .bind(payload.sort_order)
    .fetch_one(&state.pool)
    .await?;
    Ok(ApiResponse::success("Category created", category, None))
}

pub async fn update_category(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    ensure_admin(user)?;
    let category = sqlx::query_as::<_, Category>(
        r#"
        UPDATE categories SET
            name_ar = COALESCE($2, name_ar),
            name_en = COALESCE($3, name_en),
            image_url = COALESCE($4, image_url),
            is_active = COALESCE($5, is_active),
            sort_order = COALESCE($6, sort_order),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(payload.name_ar)
    .bind(payload.name_en)
    .bind(payload.image_url)
    .bind(payload.is_active)
    .bind(payload.sort_order)
    .fetch_optional(&state.pool)
    .await?;
    match category {
        Some(category) => Ok(ApiResponse::success("Category updated", category, None)),
        None => Err(AppError::NotFound),
    }
}

pub async fn delete_category(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    delete_by_id(state, user, "categories", id).await
}

// ------------------------------------------------------------ menu items

pub async fn list_menu_items(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<MenuItemList>> {
    ensure_admin(user)?;
    let items =
        sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items ORDER BY sort_order, name_en")
            .fetch_all(&state.pool)
            .await?;
    Ok(ApiResponse::success(
        "Menu items",
        MenuItemList { items },
        Some(Meta::empty()),
    ))
}

pub async fn create_menu_item(
    state: &AppState,
    user: &AuthUser,
    payload: CreateMenuItemRequest,
) -> AppResult<ApiResponse<MenuItem>> {
    ensure_admin(user)?;
    let item = sqlx::query_as::<_, MenuItem>(
        r#"
        INSERT INTO menu_items (
            id, category_id, name_ar, name_en, description_ar, description_en,
            base_price, calories, image_url, is_available, is_featured, sort_order
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(payload.category_id)
    .bind(payload.name_ar)
    .bind(payload.name_en)
    .bind(payload.description_ar)
    .bind(payload.description_en)
    .bind(payload.base_price)
    .bind(payload.calories)
    .bind(payload.image_url)
    .bind(payload.is_available)
    .bind(payload.is_featured)
    .bind(payload.sort_order)
    .fetch_one(&state.pool)
    .await?;
    Ok(ApiResponse::success("Menu item created", item, None))
}

pub async fn update_menu_item(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateMenuItemRequest,
) -> AppResult<ApiResponse<MenuItem>> {
    ensure_admin(user)?;
    let item = sqlx::query_as::<_, MenuItem>(
        r#"
        UPDATE menu_items SET
            category_id = COALESCE($2, category_id),
            name_ar = COALESCE($3, name_ar),
            name_en = COALESCE($4, name_en),
            description_ar = COALESCE($5, description_ar),
            description_en = COALESCE($6, description_en),
            base_price = COALESCE($7, base_price),
            calories = COALESCE($8, calories),
            image_url = COALESCE($9, image_url),
            is_available = COALESCE($10, is_available),
            is_featured = COALESCE($11, is_featured),
            sort_order = COALESCE($12, sort_order),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(payload.category_id)
    .bind(payload.name_ar)
    .bind(payload.name_en)
    .bind(payload.description_ar)
    .bind(payload.description_en)
    .bind(payload.base_price)
    .bind(payload.calories)
    .bind(payload.image_url)
    .bind(payload.is_available)
    .bind(payload.is_featured)
    .bind(payload.sort_order)
    .fetch_optional(&state.pool)
    .await?;
    match item {
        Some(item) => Ok(ApiResponse::success("Menu item updated", item, None)),
        None => Err(AppError::NotFound),
    }
}

pub async fn delete_menu_item(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    delete_by_id(state, user, "menu_items", id).await
}

/// Replaces the item's linked modifier groups with the submitted set.
pub async fn set_item_modifier_groups(
    state: &AppState,
    user: &AuthUser,
    menu_item_id: Uuid,
    payload: SetItemModifierGroupsRequest,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;

    let exists: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM menu_items WHERE id = $1")
        .bind(menu_item_id)
        .fetch_optional(&state.pool)
        .await?;
    if exists.is_none() {
        return Err(AppError::NotFound);
    }

    let mut txn = state.pool.begin().await?;
    sqlx::query("DELETE FROM menu_item_modifier_groups WHERE menu_item_id = $1")
        .bind(menu_item_id)
        .execute(&mut *txn)
        .await?;
    for group_id in &payload.modifier_group_ids {
        sqlx::query(
            r#"
            INSERT INTO menu_item_modifier_groups (id, menu_item_id, modifier_group_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(menu_item_id)
        .bind(group_id)
        .execute(&mut *txn)
        .await?;
    }
    txn.commit().await?;

    Ok(ApiResponse::success(
        "Modifier groups linked",
        serde_json::json!({ "menu_item_id": menu_item_id }),
        Some(Meta::empty()),
    ))
}

// --------------------------------------------------- modifier groups

pub async fn create_modifier_group(
    state: &AppState,
    user: &AuthUser,
    payload: CreateModifierGroupRequest,
) -> AppResult<ApiResponse<ModifierGroup>> {
    ensure_admin(user)?;
    let group = sqlx::query_as::<_, ModifierGroup>(
        r#"
        INSERT INTO modifier_groups (
            id, name_ar, name_en, is_required, is_multiple, min_selections, max_selections
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(payload.name_ar)
    .bind(payload.name_en)
    .bind(payload.is_required)
    .bind(payload.is_multiple)
    .bind(payload.min_selections)
    .bind(payload.max_selections)
    .fetch_one(&state.pool)
    .await?;
    Ok(ApiResponse::success("Modifier group created", group, None))
}

pub async fn update_modifier_group(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateModifierGroupRequest,
) -> AppResult<ApiResponse<ModifierGroup>> {
    ensure_admin(user)?;
    let group = sqlx::query_as::<_, ModifierGroup>(
        r#"
        UPDATE modifier_groups SET
            name_ar = COALESCE($2, name_ar),
            name_en = COALESCE($3, name_en),
            is_required = COALESCE($4, is_required),
            is_multiple = COALESCE($5, is_multiple),
            min_selections = COALESCE($6, min_selections),
            max_selections = COALESCE($7, max_selections),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(payload.name_ar)
    .bind(payload.name_en)
    .bind(payload.is_required)
    .bind(payload.is_multiple)
    .bind(payload.min_selections)
    .bind(payload.max_selections)
    .fetch_optional(&state.pool)
    .await?;
    match group {
        Some(group) => Ok(ApiResponse::success("Modifier group updated", group, None)),
        None => Err(AppError::NotFound),
    }
}

pub async fn delete_modifier_group(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    delete_by_id(state, user, "modifier_groups", id).await
}

// --------------------------------------------------------- modifiers

pub async fn create_modifier(
    state: &AppState,
    user: &AuthUser,
    payload: CreateModifierRequest,
) -> AppResult<ApiResponse<Modifier>> {
    ensure_admin(user)?;
    if payload.price < 0 {
        return Err(AppError::BadRequest("price must not be negative".into()));
    }
    let modifier = sqlx::query_as::<_, Modifier>(
        r#"
        INSERT INTO modifiers (id, group_id, name_ar, name_en, price, is_available, sort_order)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(payload.group_id)
    .bind(payload.name_ar)
    .bind(payload.name_en)
    .bind(payload.price)
    .bind(payload.is_available)
    .bind(payload.sort_order)
    .fetch_one(&state.pool)
    .await?;
    Ok(ApiResponse::success("Modifier created", modifier, None))
}

pub async fn update_modifier(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateModifierRequest,
) -> AppResult<ApiResponse<Modifier>> {
    ensure_admin(user)?;
    if payload.price.is_some_and(|p| p < 0) {
        return Err(AppError::BadRequest("price must not be negative".into()));
    }
    let modifier = sqlx::query_as::<_, Modifier>(
        r#"
        UPDATE modifiers SET
            name_ar = COALESCE($2, name_ar),
            name_en = COALESCE($3, name_en),
            price = COALESCE($4, price),
            is_available = COALESCE($5, is_available),
            sort_order = COALESCE($6, sort_order),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(payload.name_ar)
    .bind(payload.name_en)
    .bind(payload.price)
    .bind(payload.is_available)
    .bind(payload.sort_order)
    .fetch_optional(&state.pool)
    .await?;
    match modifier {
        Some(modifier) => Ok(ApiResponse::success("Modifier updated", modifier, None)),
        None => Err(AppError::NotFound),
    }
}

pub async fn delete_modifier(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    delete_by_id(state, user, "modifiers", id).await
}

// -------------------------------------------------------- promotions

pub async fn list_promotions(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<PromotionList>> {
    ensure_admin(user)?;
    let items = sqlx::query_as::<_, Promotion>(
        "SELECT * FROM promotions ORDER BY sort_order, created_at DESC",
    )
    .fetch_all(&state.pool)
    .await?;
    Ok(ApiResponse::success(
        "Promotions",
        PromotionList { items },
        Some(Meta::empty()),
    ))
}

pub async fn create_promotion(
    state: &AppState,
    user: &AuthUser,
    payload: CreatePromotionRequest,
) -> AppResult<ApiResponse<Promotion>> {
    ensure_admin(user)?;
    let promotion = sqlx::query_as::<_, Promotion>(
        r#"
        INSERT INTO promotions (
            id, title_ar, title_en, description_ar, description_en,
            image_url, is_active, sort_order, start_date, end_date
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(payload.title_ar)
    .bind(payload.title_en)
    .bind(payload.description_ar)
    .bind(payload.description_en)
    .bind(payload.image_url)
    .bind(payload.is_active)
    .bind(payload.sort_order)
    .bind(payload.start_date)
    .bind(payload.end_date)
    .fetch_one(&state.pool)
    .await?;
    Ok(ApiResponse::success("Promotion created", promotion, None))
}

pub async fn update_promotion(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdatePromotionRequest,
) -> AppResult<ApiResponse<Promotion>> {
    ensure_admin(user)?;
    let promotion = sqlx::query_as::<_, Promotion>(
        r#"
        UPDATE promotions SET
            title_ar = COALESCE($2, title_ar),
            title_en = COALESCE($3, title_en),
            description_ar = COALESCE($4, description_ar),
            description_en = COALESCE($5, description_en),
            image_url = COALESCE($6, image_url),
            is_active = COALESCE($7, is_active),
            sort_order = COALESCE($8, sort_order),
            start_date = COALESCE($9, start_date),
            end_date = COALESCE($10, end_date),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(payload.title_ar)
    .bind(payload.title_en)
    .bind(payload.description_ar)
    .bind(payload.description_en)
    .bind(payload.image_url)
    .bind(payload.is_active)
    .bind(payload.sort_order)
    .bind(payload.start_date)
    .bind(payload.end_date)
    .fetch_optional(&state.pool)
    .await?;
    match promotion {
        Some(promotion) => Ok(ApiResponse::success("Promotion updated", promotion, None)),
        None => Err(AppError::NotFound),
    }
}

pub async fn delete_promotion(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    delete_by_id(state, user, "promotions", id).await
}

// ---------------------------------------------------------- settings

pub async fn get_settings(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<StoreSettings>> {
    ensure_admin(user)?;
    let settings = catalog_service::store_settings(&state.pool).await?;
    Ok(ApiResponse::success("Settings", settings, None))
}

/// Upserts the single settings row; the first update creates it from the
/// compiled defaults merged with the submitted fields.
pub async fn update_settings(
    state: &AppState,
    user: &AuthUser,
    payload: UpdateStoreSettingsRequest,
) -> AppResult<ApiResponse<StoreSettings>> {
    ensure_admin(user)?;

    let existing: Option<StoreSettings> =
        sqlx::query_as("SELECT * FROM store_settings ORDER BY created_at LIMIT 1")
            .fetch_optional(&state.pool)
            .await?;

    let settings = match existing {
        Some(current) => {
            sqlx::query_as::<_, StoreSettings>(
                r#"
                UPDATE store_settings SET
                    store_name_ar = COALESCE($2, store_name_ar),
                    store_name_en = COALESCE($3, store_name_en),
                    whatsapp_number = COALESCE($4, whatsapp_number),
                    delivery_fee = COALESCE($5, delivery_fee),
                    minimum_order = COALESCE($6, minimum_order),
                    is_open = COALESCE($7, is_open),
                    opening_time = COALESCE($8, opening_time),
                    closing_time = COALESCE($9, closing_time),
                    updated_at = now()
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(current.id)
            .bind(payload.store_name_ar)
            .bind(payload.store_name_en)
            .bind(payload.whatsapp_number)
            .bind(payload.delivery_fee)
            .bind(payload.minimum_order)
            .bind(payload.is_open)
            .bind(payload.opening_time)
            .bind(payload.closing_time)
            .fetch_one(&state.pool)
            .await?
        }
        None => {
            let defaults = catalog_service::default_settings();
            sqlx::query_as::<_, StoreSettings>(
                r#"
                INSERT INTO store_settings (
                    id, store_name_ar, store_name_en, whatsapp_number,
                    delivery_fee, minimum_order, is_open, opening_time, closing_time
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING *
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(payload.store_name_ar.unwrap_or(defaults.store_name_ar))
            .bind(payload.store_name_en.unwrap_or(defaults.store_name_en))
            .bind(payload.whatsapp_number.unwrap_or(defaults.whatsapp_number))
            .bind(payload.delivery_fee.unwrap_or(defaults.delivery_fee))
            .bind(payload.minimum_order.unwrap_or(defaults.minimum_order))
            .bind(payload.is_open.unwrap_or(defaults.is_open))
            .bind(payload.opening_time)
            .bind(payload.closing_time)
            .fetch_one(&state.pool)
            .await?
        }
    };

    Ok(ApiResponse::success("Settings updated", settings, None))
}

// ------------------------------------------------------------- shared

async fn delete_by_id(
    state: &AppState,
    user: &AuthUser,
    table: &'static str,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = sqlx::query(&format!("DELETE FROM {table} WHERE id = $1"))
        .bind(id)
        .execute(&state.pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "delete",
        Some(table),
        Some(serde_json::json!({ "id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
