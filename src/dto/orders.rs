use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    i18n::Lang,
    models::{Order, OrderItem, OrderItemModifier, OrderStatus, OrderType, PaymentMethod},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub lang: Lang,
    pub customer_name: String,
    pub customer_phone: String,
    pub order_type: OrderType,
    pub payment_method: PaymentMethod,
    pub district: Option<String>,
    pub street: Option<String>,
    pub google_maps_link: Option<String>,
    pub general_notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutResponse {
    pub order: Order,
    pub items: Vec<OrderItem>,
    /// The rendered summary text, returned for display alongside the link.
    pub message: String,
    /// Deep link the client opens in a new browsing context.
    pub whatsapp_url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderLineSummary {
    pub name_ar: String,
    pub name_en: String,
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderSummary {
    pub id: Uuid,
    pub order_number: String,
    pub total: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderLineSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderHistory {
    pub items: Vec<OrderSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemWithModifiers {
    #[serde(flatten)]
    pub item: OrderItem,
    pub modifiers: Vec<OrderItemModifier>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderItemWithModifiers>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}

/// SSE payload for the status watcher; `alert` marks the driver-arrived
/// transition for this subscriber.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderStatusUpdate {
    pub order_id: Uuid,
    pub status: OrderStatus,
    pub alert: bool,
}
