use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::OrderStatus;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name_ar: String,
    pub name_en: String,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    pub name_ar: Option<String>,
    pub name_en: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMenuItemRequest {
    pub category_id: Uuid,
    pub name_ar: String,
    pub name_en: String,
    pub description_ar: Option<String>,
    pub description_en: Option<String>,
    pub base_price: i64,
    pub calories: Option<i32>,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMenuItemRequest {
    pub category_id: Option<Uuid>,
    pub name_ar: Option<String>,
    pub name_en: Option<String>,
    pub description_ar: Option<String>,
    pub description_en: Option<String>,
    pub base_price: Option<i64>,
    pub calories: Option<i32>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
    pub is_featured: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetItemModifierGroupsRequest {
    pub modifier_group_ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateModifierGroupRequest {
    pub name_ar: String,
    pub name_en: String,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_multiple: bool,
    #[serde(default)]
    pub min_selections: i32,
    #[serde(default = "default_one")]
    pub max_selections: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateModifierGroupRequest {
    pub name_ar: Option<String>,
    pub name_en: Option<String>,
    pub is_required: Option<bool>,
    pub is_multiple: Option<bool>,
    pub min_selections: Option<i32>,
    pub max_selections: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateModifierRequest {
    pub group_id: Uuid,
    pub name_ar: String,
    pub name_en: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateModifierRequest {
    pub name_ar: Option<String>,
    pub name_en: Option<String>,
    pub price: Option<i64>,
    pub is_available: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePromotionRequest {
    pub title_ar: String,
    pub title_en: String,
    pub description_ar: Option<String>,
    pub description_en: Option<String>,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePromotionRequest {
    pub title_ar: Option<String>,
    pub title_en: Option<String>,
    pub description_ar: Option<String>,
    pub description_en: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStoreSettingsRequest {
    pub store_name_ar: Option<String>,
    pub store_name_en: Option<String>,
    pub whatsapp_number: Option<String>,
    pub delivery_fee: Option<i64>,
    pub minimum_order: Option<i64>,
    pub is_open: Option<bool>,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

fn default_true() -> bool {
    true
}

fn default_one() -> i32 {
    1
}
