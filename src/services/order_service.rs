//! The order composer: turns a device's cart plus the checkout form into
//! persisted order records and the outbound WhatsApp handoff.
//!
//! The order, its item snapshots and their modifier snapshots are written
//! parent-before-child inside a single transaction, and the cart row is
//! deleted in the same transaction. A failure anywhere rolls everything back
//! and leaves the cart intact, so the user can retry the whole submission.

use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    cart::Cart,
    db::DbPool,
    dto::orders::{
        CheckoutRequest, CheckoutResponse, OrderHistory, OrderItemWithModifiers, OrderLineSummary,
        OrderSummary, OrderWithItems,
    },
    error::{AppError, AppResult},
    i18n::Lang,
    middleware::device::DeviceId,
    models::{Order, OrderItem, OrderItemModifier, OrderType},
    response::{ApiResponse, Meta},
    services::{cart_service, catalog_service},
    whatsapp::{self, OrderMessage},
};

/// Orders shown in a device's history view; older entries stay in the
/// database but out of the storefront.
const HISTORY_LIMIT: i64 = 50;

fn validate(payload: &CheckoutRequest, cart: &Cart) -> Result<(), AppError> {
    let lang = payload.lang;
    if cart.is_empty() {
        return Err(AppError::BadRequest(lang.t("checkout.cart_empty").into()));
    }
    if payload.customer_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            lang.t("checkout.name_required").into(),
        ));
    }
    if payload.customer_phone.trim().is_empty() {
        return Err(AppError::BadRequest(
            lang.t("checkout.phone_required").into(),
        ));
    }
    if payload.order_type == OrderType::Delivery
        && payload
            .district
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .is_empty()
    {
        return Err(AppError::BadRequest(
            lang.t("checkout.district_required").into(),
        ));
    }
    Ok(())
}

/// `ROM-YYYYMMDD-<id prefix>`: readable like the original scheme but unique
/// per order id, so rapid concurrent submissions cannot collide.
fn build_order_number(order_id: Uuid) -> String {
    let date = Utc::now().format("%Y%m%d");
    let id = order_id.to_string();
    format!("ROM-{}-{}", date, &id[..8])
}

pub async fn checkout(
    pool: &DbPool,
    device: &DeviceId,
    payload: CheckoutRequest,
) -> AppResult<ApiResponse<CheckoutResponse>> {
    let cart = cart_service::load_cart(pool, device).await?;
    validate(&payload, &cart)?;

    let settings = catalog_service::store_settings(pool).await?;
    let subtotal = cart.subtotal();
    let delivery_fee = match payload.order_type {
        OrderType::Delivery => settings.delivery_fee,
        OrderType::Pickup => 0,
    };
    let total = subtotal + delivery_fee;

    let order_id = Uuid::new_v4();
    let order_number = build_order_number(order_id);
    let district = payload.district.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let street = payload.street.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let maps_link = payload
        .google_maps_link
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let general_notes = payload
        .general_notes
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let mut txn = pool.begin().await?;

    let order = sqlx::query_as::<_, Order>(
        r#"
        INSERT INTO orders (
            id, device_id, order_number, customer_name, customer_phone,
            order_type, payment_method, district, street, google_maps_link,
            subtotal, delivery_fee, total, general_notes
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        RETURNING *
        "#,
    )
    .bind(order_id)
    .bind(&device.0)
    .bind(&order_number)
    .bind(payload.customer_name.trim())
    .bind(payload.customer_phone.trim())
    .bind(payload.order_type)
    .bind(payload.payment_method)
    .bind(district)
    .bind(street)
    .bind(maps_link)
    .bind(subtotal)
    .bind(delivery_fee)
    .bind(total)
    .bind(general_notes)
    .fetch_one(&mut *txn)
    .await?;

    let mut order_items: Vec<OrderItem> = Vec::with_capacity(cart.items().len());
    for line in cart.items() {
        let item = sqlx::query_as::<_, OrderItem>(
            r#"
            INSERT INTO order_items (
                id, order_id, menu_item_id, item_name_ar, item_name_en,
                quantity, base_price, modifiers_price, total_price, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(order.id)
        .bind(line.menu_item_id)
        .bind(&line.name_ar)
        .bind(&line.name_en)
        .bind(line.quantity)
        .bind(line.base_price)
        .bind(line.modifiers_price)
        .bind(line.total_price)
        .bind(line.notes.as_deref())
        .fetch_one(&mut *txn)
        .await?;

        for modifier in &line.modifiers {
            sqlx::query(
                r#"
                INSERT INTO order_item_modifiers (
                    id, order_item_id, modifier_id,
                    modifier_name_ar, modifier_name_en, price
                )
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(item.id)
            .bind(modifier.id)
            .bind(&modifier.name_ar)
            .bind(&modifier.name_en)
            .bind(modifier.price)
            .execute(&mut *txn)
            .await?;
        }

        order_items.push(item);
    }

    sqlx::query("DELETE FROM carts WHERE device_id = $1")
        .bind(&device.0)
        .execute(&mut *txn)
        .await?;

    txn.commit().await?;

    let store_name = match payload.lang {
        Lang::Ar => settings.store_name_ar.as_str(),
        Lang::En => settings.store_name_en.as_str(),
    };
    let message = OrderMessage {
        lang: payload.lang,
        store_name,
        order_number: &order.order_number,
        placed_at: order.created_at,
        items: cart.items(),
        subtotal,
        delivery_fee,
        total,
        order_type: payload.order_type,
        payment_method: payload.payment_method,
        district,
        street,
        maps_link,
        general_notes,
        customer_name: payload.customer_name.trim(),
        customer_phone: payload.customer_phone.trim(),
    }
    .render();
    let whatsapp_url = whatsapp::deep_link(&settings.whatsapp_number, &message);

    if let Err(err) = log_audit(
        pool,
        None,
        "checkout",
        Some("orders"),
        Some(serde_json::json!({
            "order_id": order.id,
            "order_number": order.order_number,
            "total": total,
        })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        payload.lang.t("checkout.success"),
        CheckoutResponse {
            order,
            items: order_items,
            message,
            whatsapp_url,
        },
        Some(Meta::empty()),
    ))
}

/// Order history re-derived from the orders table (newest first, capped),
/// so statuses are always the live ones.
pub async fn order_history(
    pool: &DbPool,
    device: &DeviceId,
) -> AppResult<ApiResponse<OrderHistory>> {
    let orders = sqlx::query_as::<_, Order>(
        "SELECT * FROM orders WHERE device_id = $1 ORDER BY created_at DESC LIMIT $2",
    )
    .bind(&device.0)
    .bind(HISTORY_LIMIT)
    .fetch_all(pool)
    .await?;

    let order_ids: Vec<Uuid> = orders.iter().map(|o| o.id).collect();
    let lines = sqlx::query_as::<_, OrderItem>(
        "SELECT * FROM order_items WHERE order_id = ANY($1) ORDER BY created_at",
    )
    .bind(&order_ids)
    .fetch_all(pool)
    .await?;

    let items = orders
        .into_iter()
        .map(|order| {
            let order_lines = lines
                .iter()
                .filter(|line| line.order_id == order.id)
                .map(|line| OrderLineSummary {
                    name_ar: line.item_name_ar.clone(),
                    name_en: line.item_name_en.clone(),
                    quantity: line.quantity,
                })
                .collect();
            OrderSummary {
                id: order.id,
                order_number: order.order_number,
                total: order.total,
                status: order.status,
                created_at: order.created_at,
                items: order_lines,
            }
        })
        .collect();

    Ok(ApiResponse::success(
        "Ok",
        OrderHistory { items },
        Some(Meta::empty()),
    ))
}

pub async fn get_order(
    pool: &DbPool,
    device: &DeviceId,
    id: Uuid,
) -> AppResult<ApiResponse<OrderWithItems>> {
    let order =
        sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1 AND device_id = $2")
            .bind(id)
            .bind(&device.0)
            .fetch_optional(pool)
            .await?;
    let order = match order {
        Some(order) => order,
        None => return Err(AppError::NotFound),
    };

    let items = order_items_with_modifiers(pool, order.id).await?;

    Ok(ApiResponse::success(
        "OK",
        OrderWithItems { order, items },
        Some(Meta::empty()),
    ))
}

pub async fn order_items_with_modifiers(
    pool: &DbPool,
    order_id: Uuid,
) -> AppResult<Vec<OrderItemWithModifiers>> {
    let items = sqlx::query_as::<_, OrderItem>(
        "SELECT * FROM order_items WHERE order_id = $1 ORDER BY created_at",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;

    let item_ids: Vec<Uuid> = items.iter().map(|i| i.id).collect();
    let modifiers = sqlx::query_as::<_, OrderItemModifier>(
        "SELECT * FROM order_item_modifiers WHERE order_item_id = ANY($1) ORDER BY created_at",
    )
    .bind(&item_ids)
    .fetch_all(pool)
    .await?;

    Ok(items
        .into_iter()
        .map(|item| {
            let item_modifiers = modifiers
                .iter()
                .filter(|m| m.order_item_id == item.id)
                .cloned()
                .collect();
            OrderItemWithModifiers {
                item,
                modifiers: item_modifiers,
            }
        })
        .collect())
}
