//! Read-only catalog queries for the storefront. No business logic beyond
//! filtering; the admin surface owns all writes.

use chrono::Utc;
use uuid::Uuid;

use crate::{
    db::DbPool,
    dto::menu::{
        CategoryList, MenuItemList, ModifierGroupList, ModifierGroupWithModifiers, PromotionList,
    },
    error::{AppError, AppResult},
    models::{Category, MenuItem, Modifier, ModifierGroup, Promotion, StoreSettings},
    response::{ApiResponse, Meta},
    routes::params::MenuItemQuery,
};

pub async fn list_categories(pool: &DbPool) -> AppResult<ApiResponse<CategoryList>> {
    let items = sqlx::query_as::<_, Category>(
        "SELECT * FROM categories WHERE is_active ORDER BY sort_order, name_en",
    )
    .fetch_all(pool)
    .await?;

    Ok(ApiResponse::success(
        "Categories",
        CategoryList { items },
        Some(Meta::empty()),
    ))
}

pub async fn list_menu_items(
    pool: &DbPool,
    query: MenuItemQuery,
) -> AppResult<ApiResponse<MenuItemList>> {
    let pattern = query
        .q
        .as_ref()
        .filter(|q| !q.is_empty())
        .map(|q| format!("%{q}%"));

    let items = sqlx::query_as::<_, MenuItem>(
        r#"
        SELECT * FROM menu_items
        WHERE is_available
          AND ($1::uuid IS NULL OR category_id = $1)
          AND ($2::text IS NULL OR name_ar ILIKE $2 OR name_en ILIKE $2)
          AND ($3::bool IS NULL OR is_featured = $3)
        ORDER BY sort_order, name_en
        "#,
    )
    .bind(query.category_id)
    .bind(pattern)
    .bind(query.featured)
    .fetch_all(pool)
    .await?;

    Ok(ApiResponse::success(
        "Menu items",
        MenuItemList { items },
        Some(Meta::empty()),
    ))
}

pub async fn get_menu_item(pool: &DbPool, id: Uuid) -> AppResult<ApiResponse<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    let item = match item {
        Some(item) => item,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Menu item", item, None))
}

/// Modifier groups linked to one menu item, each with its available
/// modifiers in display order.
pub async fn item_modifier_groups(
    pool: &DbPool,
    menu_item_id: Uuid,
) -> AppResult<ApiResponse<ModifierGroupList>> {
    let groups = sqlx::query_as::<_, ModifierGroup>(
        r#"
        SELECT mg.* FROM modifier_groups mg
        JOIN menu_item_modifier_groups link ON link.modifier_group_id = mg.id
        WHERE link.menu_item_id = $1
        ORDER BY mg.name_en
        "#,
    )
    .bind(menu_item_id)
    .fetch_all(pool)
    .await?;

    let group_ids: Vec<Uuid> = groups.iter().map(|g| g.id).collect();
    let modifiers = sqlx::query_as::<_, Modifier>(
        r#"
        SELECT * FROM modifiers
        WHERE group_id = ANY($1) AND is_available
        ORDER BY sort_order, name_en
        "#,
    )
    .bind(&group_ids)
    .fetch_all(pool)
    .await?;

    let items = groups
        .into_iter()
        .map(|group| {
            let group_modifiers = modifiers
                .iter()
                .filter(|m| m.group_id == group.id)
                .cloned()
                .collect();
            ModifierGroupWithModifiers {
                group,
                modifiers: group_modifiers,
            }
        })
        .collect();

    Ok(ApiResponse::success(
        "Modifier groups",
        ModifierGroupList { items },
        Some(Meta::empty()),
    ))
}

pub async fn list_promotions(pool: &DbPool) -> AppResult<ApiResponse<PromotionList>> {
    let items = sqlx::query_as::<_, Promotion>(
        r#"
        SELECT * FROM promotions
        WHERE is_active
          AND (start_date IS NULL OR start_date <= now())
          AND (end_date IS NULL OR end_date >= now())
        ORDER BY sort_order, created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(ApiResponse::success(
        "Promotions",
        PromotionList { items },
        Some(Meta::empty()),
    ))
}

/// Store settings with compiled fallbacks when no row exists yet, matching
/// the storefront defaults (15.00 SAR delivery fee, default store number).
pub async fn store_settings(pool: &DbPool) -> AppResult<StoreSettings> {
    let settings =
        sqlx::query_as::<_, StoreSettings>("SELECT * FROM store_settings ORDER BY created_at LIMIT 1")
            .fetch_optional(pool)
            .await?;
    Ok(settings.unwrap_or_else(default_settings))
}

pub fn default_settings() -> StoreSettings {
    let now = Utc::now();
    StoreSettings {
        id: Uuid::nil(),
        store_name_ar: "مطعم الرومنسية".to_string(),
        store_name_en: "Romansiah Restaurant".to_string(),
        whatsapp_number: "966552065055".to_string(),
        delivery_fee: 1500,
        minimum_order: 0,
        is_open: true,
        opening_time: None,
        closing_time: None,
        created_at: now,
        updated_at: now,
    }
}
