use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::OrderStatus;

/// Customer-facing locale. Arabic is the storefront default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Ar,
    En,
}

impl Lang {
    /// Key lookup. Unknown keys fall back to the key itself so a missing
    /// translation is visible instead of crashing the request.
    pub fn t<'a>(self, key: &'a str) -> &'a str {
        match (self, key) {
            (Lang::Ar, "checkout.name_required") => "الرجاء إدخال الاسم",
            (Lang::En, "checkout.name_required") => "Please enter your name",
            (Lang::Ar, "checkout.phone_required") => "الرجاء إدخال رقم الجوال",
            (Lang::En, "checkout.phone_required") => "Please enter your phone number",
            (Lang::Ar, "checkout.district_required") => "الرجاء إدخال الحي",
            (Lang::En, "checkout.district_required") => "Please enter the district",
            (Lang::Ar, "checkout.cart_empty") => "السلة فارغة",
            (Lang::En, "checkout.cart_empty") => "Cart is empty",
            (Lang::Ar, "checkout.failed") => "حدث خطأ في إنشاء الطلب",
            (Lang::En, "checkout.failed") => "Error creating order",
            (Lang::Ar, "checkout.success") => "تم إنشاء الطلب بنجاح! يتم فتح واتساب...",
            (Lang::En, "checkout.success") => "Order created successfully! Opening WhatsApp...",
            (Lang::Ar, "cart.added") => "تمت الإضافة للسلة",
            (Lang::En, "cart.added") => "Added to cart",
            _ => key,
        }
    }
}

pub fn status_label(lang: Lang, status: OrderStatus) -> &'static str {
    match (lang, status) {
        (Lang::Ar, OrderStatus::Pending) => "قيد الانتظار",
        (Lang::En, OrderStatus::Pending) => "Pending",
        (Lang::Ar, OrderStatus::Confirmed) => "تم التأكيد",
        (Lang::En, OrderStatus::Confirmed) => "Confirmed",
        (Lang::Ar, OrderStatus::Preparing) => "قيد التحضير",
        (Lang::En, OrderStatus::Preparing) => "Preparing",
        (Lang::Ar, OrderStatus::Ready) => "جاهز / في الطريق",
        (Lang::En, OrderStatus::Ready) => "Ready / On the way",
        (Lang::Ar, OrderStatus::DriverArrived) => "السائق وصل!",
        (Lang::En, OrderStatus::DriverArrived) => "Driver Arrived!",
        (Lang::Ar, OrderStatus::Delivered) => "تم التوصيل",
        (Lang::En, OrderStatus::Delivered) => "Delivered",
        (Lang::Ar, OrderStatus::Cancelled) => "ملغي",
        (Lang::En, OrderStatus::Cancelled) => "Cancelled",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(Lang::Ar.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn both_locales_cover_validation_messages() {
        for key in [
            "checkout.name_required",
            "checkout.phone_required",
            "checkout.district_required",
            "checkout.cart_empty",
        ] {
            assert_ne!(Lang::Ar.t(key), key);
            assert_ne!(Lang::En.t(key), key);
        }
    }
}
