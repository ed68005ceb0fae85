//! Outbound WhatsApp handoff: a structured plain-text order summary and the
//! `wa.me` deep link that carries it. The rendered text must stay
//! byte-for-byte reproducible per locale; customers and the store staff read
//! it verbatim.

use chrono::{DateTime, Utc};

use crate::{
    cart::CartItem,
    i18n::Lang,
    models::{OrderType, PaymentMethod},
};

const DIVIDER: &str = "————————————";

/// Formats halalas as a two-decimal SAR amount, e.g. `7000` -> `"70.00"`.
pub fn fmt_price(halalas: i64) -> String {
    format!("{}.{:02}", halalas / 100, halalas % 100)
}

struct Labels {
    header: &'static str,
    order_number: &'static str,
    date: &'static str,
    details: &'static str,
    note: &'static str,
    bill: &'static str,
    subtotal: &'static str,
    delivery_fee: &'static str,
    total: &'static str,
    order_type: &'static str,
    type_delivery: &'static str,
    type_pickup: &'static str,
    payment: &'static str,
    pay_cash: &'static str,
    pay_card: &'static str,
    location: &'static str,
    district: &'static str,
    street: &'static str,
    maps_link: &'static str,
    notes: &'static str,
    customer: &'static str,
    name: &'static str,
    phone: &'static str,
    footer: &'static str,
    currency: &'static str,
    modifier_join: &'static str,
}

fn labels(lang: Lang) -> Labels {
    match lang {
        Lang::Ar => Labels {
            header: "طلب جديد",
            order_number: "رقم الطلب",
            date: "التاريخ",
            details: "تفاصيل الطلب",
            note: "ملاحظة",
            bill: "ملخص الحساب",
            subtotal: "المجموع الفرعي",
            delivery_fee: "رسوم التوصيل",
            total: "الإجمالي",
            order_type: "نوع الطلب",
            type_delivery: "توصيل",
            type_pickup: "استلام من الفرع",
            payment: "طريقة الدفع",
            pay_cash: "💵 كاش",
            pay_card: "💳 شبكة (يحتاج جهاز الدفع)",
            location: "موقع العميل",
            district: "الحي",
            street: "الشارع",
            maps_link: "رابط الموقع",
            notes: "ملاحظات",
            customer: "بيانات العميل",
            name: "الاسم",
            phone: "الجوال",
            footer: "تم الإرسال عبر تطبيق الرومنسية",
            currency: "ر.س",
            modifier_join: "، ",
        },
        Lang::En => Labels {
            header: "New order",
            order_number: "Order number",
            date: "Date",
            details: "Order details",
            note: "Note",
            bill: "Bill summary",
            subtotal: "Subtotal",
            delivery_fee: "Delivery fee",
            total: "Total",
            order_type: "Order type",
            type_delivery: "Delivery",
            type_pickup: "Pickup from branch",
            payment: "Payment method",
            pay_cash: "💵 Cash",
            pay_card: "💳 Card (payment device needed)",
            location: "Customer location",
            district: "District",
            street: "Street",
            maps_link: "Maps link",
            notes: "Notes",
            customer: "Customer details",
            name: "Name",
            phone: "Phone",
            footer: "Sent via the Romansiah app",
            currency: "SAR",
            modifier_join: ", ",
        },
    }
}

/// Everything the message needs, captured by reference at checkout time.
pub struct OrderMessage<'a> {
    pub lang: Lang,
    pub store_name: &'a str,
    pub order_number: &'a str,
    pub placed_at: DateTime<Utc>,
    pub items: &'a [CartItem],
    pub subtotal: i64,
    pub delivery_fee: i64,
    pub total: i64,
    pub order_type: OrderType,
    pub payment_method: PaymentMethod,
    pub district: Option<&'a str>,
    pub street: Option<&'a str>,
    pub maps_link: Option<&'a str>,
    pub general_notes: Option<&'a str>,
    pub customer_name: &'a str,
    pub customer_phone: &'a str,
}

impl OrderMessage<'_> {
    pub fn render(&self) -> String {
        let l = labels(self.lang);
        let date = self.placed_at.format("%Y-%m-%d %H:%M").to_string();
        let mut message = String::new();

        message.push_str(&format!("{} — {} 🍕\n\n", l.header, self.store_name));
        message.push_str(&format!("{}: {}\n", l.order_number, self.order_number));
        message.push_str(&format!("{}: {}\n", l.date, date));
        message.push_str(&format!("{DIVIDER}\n\n"));

        message.push_str(&format!("{}:\n", l.details));
        for (index, item) in self.items.iter().enumerate() {
            let item_name = match self.lang {
                Lang::Ar => &item.name_ar,
                Lang::En => &item.name_en,
            };
            message.push_str(&format!("{}. {} x{}", index + 1, item_name, item.quantity));

            if !item.modifiers.is_empty() {
                let modifier_names: Vec<&str> = item
                    .modifiers
                    .iter()
                    .map(|m| match self.lang {
                        Lang::Ar => m.name_ar.as_str(),
                        Lang::En => m.name_en.as_str(),
                    })
                    .collect();
                message.push_str(&format!(" ({})", modifier_names.join(l.modifier_join)));
            }

            message.push_str(&format!(
                " - {} {}\n",
                fmt_price(item.total_price),
                l.currency
            ));

            if let Some(notes) = item.notes.as_deref().filter(|n| !n.is_empty()) {
                message.push_str(&format!("   {}: {}\n", l.note, notes));
            }
        }

        message.push_str(&format!("\n{DIVIDER}\n\n"));

        message.push_str(&format!("{}:\n", l.bill));
        message.push_str(&format!(
            "{}: {} {}\n",
            l.subtotal,
            fmt_price(self.subtotal),
            l.currency
        ));
        message.push_str(&format!(
            "{}: {} {}\n",
            l.delivery_fee,
            fmt_price(self.delivery_fee),
            l.currency
        ));
        message.push_str(&format!(
            "{}: {} {}\n",
            l.total,
            fmt_price(self.total),
            l.currency
        ));
        message.push_str(&format!("\n{DIVIDER}\n\n"));

        let order_type_text = match self.order_type {
            OrderType::Delivery => l.type_delivery,
            OrderType::Pickup => l.type_pickup,
        };
        message.push_str(&format!("{}: {}\n", l.order_type, order_type_text));

        let payment_text = match self.payment_method {
            PaymentMethod::Cash => l.pay_cash,
            PaymentMethod::Card => l.pay_card,
        };
        message.push_str(&format!("{}: {}\n", l.payment, payment_text));

        if self.order_type == OrderType::Delivery {
            message.push_str(&format!("\n{}:\n", l.location));
            message.push_str(&format!(
                "{}: {}\n",
                l.district,
                self.district.unwrap_or_default()
            ));
            if let Some(street) = self.street.filter(|s| !s.is_empty()) {
                message.push_str(&format!("{}: {}\n", l.street, street));
            }
            if let Some(link) = self.maps_link.filter(|s| !s.is_empty()) {
                message.push_str(&format!("{}: {}\n", l.maps_link, link));
            }
        }

        if let Some(notes) = self.general_notes.filter(|s| !s.is_empty()) {
            message.push_str(&format!("\n{}:\n{}\n", l.notes, notes));
        }

        message.push_str(&format!("\n{DIVIDER}\n\n"));

        message.push_str(&format!("{}:\n", l.customer));
        message.push_str(&format!("{}: {}\n", l.name, self.customer_name));
        message.push_str(&format!("{}: {}\n", l.phone, self.customer_phone));
        // The footer names the app itself, not the configurable store.
        message.push_str(&format!("\n{}", l.footer));

        message
    }
}

/// `https://wa.me/<number>?text=<url-encoded message>`, opened by the client
/// in a new browsing context.
pub fn deep_link(whatsapp_number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        whatsapp_number,
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use uuid::Uuid;

    use super::*;
    use crate::cart::{Cart, CartModifier, NewCartItem};

    fn sample_cart() -> Cart {
        let mut cart = Cart::default();
        cart.add_item(NewCartItem {
            menu_item_id: Uuid::new_v4(),
            name_ar: "بيتزا مارجريتا".into(),
            name_en: "Margherita".into(),
            base_price: 3000,
            quantity: 2,
            modifiers: vec![CartModifier {
                id: Uuid::new_v4(),
                name_ar: "جبنة إضافية".into(),
                name_en: "Extra cheese".into(),
                price: 500,
            }],
            notes: Some("بدون زيتون".into()),
            image_url: None,
        });
        cart
    }

    fn message<'a>(cart: &'a Cart, order_type: OrderType, delivery_fee: i64) -> OrderMessage<'a> {
        let subtotal = cart.subtotal();
        OrderMessage {
            lang: Lang::En,
            store_name: "Romansiah",
            order_number: "ROM-20260825-abc12345",
            placed_at: Utc.with_ymd_and_hms(2026, 8, 25, 18, 30, 0).unwrap(),
            items: cart.items(),
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
            order_type,
            payment_method: PaymentMethod::Cash,
            district: Some("Al Olaya"),
            street: None,
            maps_link: None,
            general_notes: None,
            customer_name: "Sara",
            customer_phone: "0551234567",
        }
    }

    #[test]
    fn price_formatting_is_two_decimal_sar() {
        assert_eq!(fmt_price(7000), "70.00");
        assert_eq!(fmt_price(8505), "85.05");
        assert_eq!(fmt_price(0), "0.00");
        assert_eq!(fmt_price(7), "0.07");
    }

    #[test]
    fn pickup_order_carries_zero_fee_and_no_address_block() {
        let cart = sample_cart();
        assert_eq!(cart.subtotal(), 7000);

        let rendered = message(&cart, OrderType::Pickup, 0).render();
        assert!(rendered.contains("Subtotal: 70.00 SAR"));
        assert!(rendered.contains("Delivery fee: 0.00 SAR"));
        assert!(rendered.contains("Total: 70.00 SAR"));
        assert!(rendered.contains("Order type: Pickup from branch"));
        assert!(!rendered.contains("Customer location"));
    }

    #[test]
    fn delivery_order_adds_flat_fee_and_address() {
        let cart = sample_cart();
        let rendered = message(&cart, OrderType::Delivery, 1500).render();
        assert!(rendered.contains("Delivery fee: 15.00 SAR"));
        assert!(rendered.contains("Total: 85.00 SAR"));
        assert!(rendered.contains("District: Al Olaya"));
    }

    #[test]
    fn line_items_include_modifiers_and_notes() {
        let cart = sample_cart();
        let rendered = message(&cart, OrderType::Pickup, 0).render();
        assert!(rendered.contains("1. Margherita x2 (Extra cheese) - 70.00 SAR"));
        assert!(rendered.contains("   Note: بدون زيتون"));
    }

    #[test]
    fn arabic_rendering_is_stable() {
        let cart = sample_cart();
        let mut msg = message(&cart, OrderType::Pickup, 0);
        msg.lang = Lang::Ar;
        let rendered = msg.render();
        assert!(rendered.starts_with("طلب جديد — Romansiah 🍕\n\nرقم الطلب: ROM-20260825-abc12345\nالتاريخ: 2026-08-25 18:30\n"));
        assert!(rendered.contains("1. بيتزا مارجريتا x2 (جبنة إضافية) - 70.00 ر.س"));
        assert!(rendered.contains("المجموع الفرعي: 70.00 ر.س"));
        assert!(rendered.ends_with("الجوال: 0551234567\n\nتم الإرسال عبر تطبيق الرومنسية"));

        // Identical input renders identical bytes.
        assert_eq!(rendered, msg.render());
    }

    #[test]
    fn default_store_header_and_footer_bytes() {
        let cart = sample_cart();
        let mut msg = message(&cart, OrderType::Pickup, 0);
        msg.lang = Lang::Ar;
        msg.store_name = "مطعم الرومنسية";
        let rendered = msg.render();
        assert!(rendered.starts_with("طلب جديد — مطعم الرومنسية 🍕\n\n"));
        assert!(rendered.ends_with("\n\nتم الإرسال عبر تطبيق الرومنسية"));
    }

    #[test]
    fn deep_link_url_encodes_the_message() {
        let link = deep_link("966552065055", "طلب جديد - Test 🍕\nLine");
        assert!(link.starts_with("https://wa.me/966552065055?text="));
        assert!(!link.contains('\n'));
        assert!(link.contains("%0A"));
        assert!(!link.contains(' '));
    }
}
