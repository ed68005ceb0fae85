use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    cart::{CartItem, CartModifier},
    dto::{
        admin::{
            CreateCategoryRequest, CreateMenuItemRequest, CreateModifierGroupRequest,
            CreateModifierRequest, CreatePromotionRequest, SetItemModifierGroupsRequest,
            UpdateCategoryRequest, UpdateMenuItemRequest, UpdateModifierGroupRequest,
            UpdateModifierRequest, UpdateOrderStatusRequest, UpdatePromotionRequest,
            UpdateStoreSettingsRequest,
        },
        auth::{LoginRequest, LoginResponse, MeResponse},
        cart::{AddCartItemRequest, CartView, UpdateCartQuantityRequest},
        menu::{
            CategoryList, MenuItemList, ModifierGroupList, ModifierGroupWithModifiers,
            PromotionList,
        },
        orders::{
            CheckoutRequest, CheckoutResponse, OrderHistory, OrderItemWithModifiers,
            OrderLineSummary, OrderList, OrderStatusUpdate, OrderSummary, OrderWithItems,
        },
    },
    models::{
        Category, MenuItem, Modifier, ModifierGroup, Order, OrderItem, OrderItemModifier,
        OrderStatus, OrderType, PaymentMethod, Promotion, StoreSettings,
    },
    response::{ApiResponse, Meta},
    routes::{admin, auth, cart, health, menu, orders, params},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        menu::list_categories,
        menu::list_menu_items,
        menu::get_menu_item,
        menu::item_modifier_groups,
        menu::list_promotions,
        menu::store_settings,
        cart::get_cart,
        cart::add_item,
        cart::update_quantity,
        cart::remove_item,
        cart::clear_cart,
        orders::checkout,
        orders::order_history,
        orders::get_order,
        orders::order_events,
        auth::login,
        auth::me,
        admin::list_all_orders,
        admin::get_order_admin,
        admin::update_order_status,
        admin::driver_orders,
        admin::driver_mark_arrived,
        admin::driver_mark_delivered,
        admin::list_categories,
        admin::create_category,
        admin::update_category,
        admin::delete_category,
        admin::list_menu_items,
        admin::create_menu_item,
        admin::update_menu_item,
        admin::delete_menu_item,
        admin::set_item_modifier_groups,
        admin::create_modifier_group,
        admin::update_modifier_group,
        admin::delete_modifier_group,
        admin::create_modifier,
        admin::update_modifier,
        admin::delete_modifier,
        admin::list_promotions,
        admin::create_promotion,
        admin::update_promotion,
        admin::delete_promotion,
        admin::get_settings,
        admin::update_settings,
    ),
    components(
        schemas(
            OrderStatus,
            OrderType,
            PaymentMethod,
            Category,
            MenuItem,
            ModifierGroup,
            Modifier,
            Promotion,
            StoreSettings,
            Order,
            OrderItem,
            OrderItemModifier,
            CartItem,
            CartModifier,
            CartView,
            AddCartItemRequest,
            UpdateCartQuantityRequest,
            CheckoutRequest,
            CheckoutResponse,
            OrderLineSummary,
            OrderSummary,
            OrderHistory,
            OrderItemWithModifiers,
            OrderWithItems,
            OrderList,
            OrderStatusUpdate,
            CategoryList,
            MenuItemList,
            ModifierGroupWithModifiers,
            ModifierGroupList,
            PromotionList,
            LoginRequest,
            LoginResponse,
            MeResponse,
            CreateCategoryRequest,
            UpdateCategoryRequest,
            CreateMenuItemRequest,
            UpdateMenuItemRequest,
            SetItemModifierGroupsRequest,
            CreateModifierGroupRequest,
            UpdateModifierGroupRequest,
            CreateModifierRequest,
            UpdateModifierRequest,
            CreatePromotionRequest,
            UpdatePromotionRequest,
            UpdateStoreSettingsRequest,
            UpdateOrderStatusRequest,
            params::MenuItemQuery,
            params::OrderListQuery,
            Meta,
            ApiResponse<CartView>,
            ApiResponse<CheckoutResponse>,
            ApiResponse<OrderHistory>,
            ApiResponse<OrderWithItems>,
            ApiResponse<OrderList>,
            ApiResponse<MenuItemList>,
            ApiResponse<CategoryList>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Menu", description = "Public catalog endpoints"),
        (name = "Cart", description = "Per-device cart endpoints"),
        (name = "Orders", description = "Checkout and order tracking endpoints"),
        (name = "Auth", description = "Back-office authentication"),
        (name = "Admin", description = "Back-office management endpoints"),
        (name = "Driver", description = "Driver workflow endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
