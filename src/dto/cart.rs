use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::cart::CartItem;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCartItemRequest {
    pub menu_item_id: Uuid,
    pub quantity: i32,
    /// Chosen modifiers in selection order; ids outside the item's linked
    /// groups are rejected.
    #[serde(default)]
    pub modifier_ids: Vec<Uuid>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCartQuantityRequest {
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub subtotal: i64,
    pub item_count: i32,
}
