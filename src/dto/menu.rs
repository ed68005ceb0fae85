use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Category, MenuItem, Modifier, ModifierGroup, Promotion};

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryList {
    pub items: Vec<Category>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuItemList {
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModifierGroupWithModifiers {
    #[serde(flatten)]
    pub group: ModifierGroup,
    pub modifiers: Vec<Modifier>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModifierGroupList {
    pub items: Vec<ModifierGroupWithModifiers>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PromotionList {
    pub items: Vec<Promotion>,
}
