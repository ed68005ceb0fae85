//! Per-device cart persistence and mutation. The cart itself is pure logic
//! in [`crate::cart`]; this layer reads the `carts` row, applies one
//! mutation, and writes the whole collection back, mirroring the
//! write-on-every-mutation behavior of the original on-device storage.

use uuid::Uuid;

use crate::{
    cart::{Cart, CartModifier, ModifierSelection, NewCartItem},
    db::DbPool,
    dto::cart::{AddCartItemRequest, CartView, UpdateCartQuantityRequest},
    error::{AppError, AppResult},
    middleware::device::DeviceId,
    models::{MenuItem, Modifier, ModifierGroup},
    response::{ApiResponse, Meta},
};

pub async fn load_cart(pool: &DbPool, device: &DeviceId) -> AppResult<Cart> {
    let row: Option<(serde_json::Value,)> =
        sqlx::query_as("SELECT data FROM carts WHERE device_id = $1")
            .bind(&device.0)
            .fetch_optional(pool)
            .await?;
    Ok(Cart::from_json(row.map(|(data,)| data)))
}

pub async fn save_cart(pool: &DbPool, device: &DeviceId, cart: &Cart) -> AppResult<()> {
    let data = serde_json::to_value(cart).map_err(|e| AppError::Internal(e.into()))?;
    sqlx::query(
        r#"
        INSERT INTO carts (device_id, data, updated_at)
        VALUES ($1, $2, now())
        ON CONFLICT (device_id) DO UPDATE SET data = EXCLUDED.data, updated_at = now()
        "#,
    )
    .bind(&device.0)
    .bind(data)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn clear_cart(pool: &DbPool, device: &DeviceId) -> AppResult<()> {
    sqlx::query("DELETE FROM carts WHERE device_id = $1")
        .bind(&device.0)
        .execute(pool)
        .await?;
    Ok(())
}

fn view(cart: &Cart) -> CartView {
    CartView {
        items: cart.items().to_vec(),
        subtotal: cart.subtotal(),
        item_count: cart.item_count(),
    }
}

pub async fn get_cart(pool: &DbPool, device: &DeviceId) -> AppResult<ApiResponse<CartView>> {
    let cart = load_cart(pool, device).await?;
    Ok(ApiResponse::success("OK", view(&cart), Some(Meta::empty())))
}

pub async fn add_item(
    pool: &DbPool,
    device: &DeviceId,
    payload: AddCartItemRequest,
) -> AppResult<ApiResponse<CartView>> {
    if payload.quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }

    let item = sqlx::query_as::<_, MenuItem>(
        "SELECT * FROM menu_items WHERE id = $1 AND is_available",
    )
    .bind(payload.menu_item_id)
    .fetch_optional(pool)
    .await?;
    let item = match item {
        Some(item) => item,
        None => return Err(AppError::BadRequest("menu item not found".to_string())),
    };

    let modifiers = resolve_modifiers(pool, item.id, &payload.modifier_ids).await?;

    let mut cart = load_cart(pool, device).await?;
    cart.add_item(NewCartItem {
        menu_item_id: item.id,
        name_ar: item.name_ar,
        name_en: item.name_en,
        base_price: item.base_price,
        quantity: payload.quantity,
        modifiers,
        notes: payload.notes.filter(|n| !n.trim().is_empty()),
        image_url: item.image_url,
    });
    save_cart(pool, device, &cart).await?;

    Ok(ApiResponse::success("Added to cart", view(&cart), None))
}

/// Validates the submitted modifier ids against the item's linked groups and
/// folds them through the selection rules, so single-select groups end up
/// with at most one choice no matter what the client sent.
async fn resolve_modifiers(
    pool: &DbPool,
    menu_item_id: Uuid,
    modifier_ids: &[Uuid],
) -> AppResult<Vec<CartModifier>> {
    if modifier_ids.is_empty() {
        return Ok(Vec::new());
    }

    let groups = sqlx::query_as::<_, ModifierGroup>(
        r#"
        SELECT mg.* FROM modifier_groups mg
        JOIN menu_item_modifier_groups link ON link.modifier_group_id = mg.id
        WHERE link.menu_item_id = $1
        "#,
    )
    .bind(menu_item_id)
    .fetch_all(pool)
    .await?;

    let group_ids: Vec<Uuid> = groups.iter().map(|g| g.id).collect();
    let available = sqlx::query_as::<_, Modifier>(
        "SELECT * FROM modifiers WHERE group_id = ANY($1) AND is_available",
    )
    .bind(&group_ids)
    .fetch_all(pool)
    .await?;

    let mut selection = ModifierSelection::default();
    for id in modifier_ids {
        let modifier = available
            .iter()
            .find(|m| m.id == *id)
            .ok_or_else(|| AppError::BadRequest("modifier not available for this item".into()))?;
        let group = groups
            .iter()
            .find(|g| g.id == modifier.group_id)
            .ok_or_else(|| AppError::BadRequest("modifier not available for this item".into()))?;
        selection.toggle(
            group.id,
            CartModifier {
                id: modifier.id,
                name_ar: modifier.name_ar.clone(),
                name_en: modifier.name_en.clone(),
                price: modifier.price,
            },
            group.is_multiple,
        );
    }

    Ok(selection.selected())
}

pub async fn update_quantity(
    pool: &DbPool,
    device: &DeviceId,
    line_id: Uuid,
    payload: UpdateCartQuantityRequest,
) -> AppResult<ApiResponse<CartView>> {
    let mut cart = load_cart(pool, device).await?;
    cart.update_quantity(line_id, payload.quantity);
    save_cart(pool, device, &cart).await?;
    Ok(ApiResponse::success("OK", view(&cart), None))
}

pub async fn remove_item(
    pool: &DbPool,
    device: &DeviceId,
    line_id: Uuid,
) -> AppResult<ApiResponse<CartView>> {
    let mut cart = load_cart(pool, device).await?;
    cart.remove_item(line_id);
    save_cart(pool, device, &cart).await?;
    Ok(ApiResponse::success(
        "Removed from cart",
        view(&cart),
        Some(Meta::empty()),
    ))
}

pub async fn clear(pool: &DbPool, device: &DeviceId) -> AppResult<ApiResponse<CartView>> {
    clear_cart(pool, device).await?;
    Ok(ApiResponse::success(
        "Cart cleared",
        view(&Cart::default()),
        Some(Meta::empty()),
    ))
}
