//! Shopping cart domain logic.
//!
//! A cart is an ordered collection of lines keyed by a generated id that is
//! distinct from the catalog item id, so the same menu item can appear as
//! several lines with different modifiers or notes. All money values are
//! halalas (1 SAR = 100). Carts serialize to JSON for the per-device `carts`
//! row; anything unreadable deserializes as an empty cart.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartModifier {
    pub id: Uuid,
    pub name_ar: String,
    pub name_en: String,
    pub price: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub id: Uuid,
    pub menu_item_id: Uuid,
    pub name_ar: String,
    pub name_en: String,
    pub base_price: i64,
    pub quantity: i32,
    pub modifiers: Vec<CartModifier>,
    pub modifiers_price: i64,
    pub total_price: i64,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}

/// Line data supplied by the caller; id and derived prices are filled in by
/// [`Cart::add_item`].
#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub menu_item_id: Uuid,
    pub name_ar: String,
    pub name_en: String,
    pub base_price: i64,
    pub quantity: i32,
    pub modifiers: Vec<CartModifier>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Reads a persisted cart. Absent or corrupt data yields an empty cart;
    /// no error is surfaced.
    pub fn from_json(raw: Option<serde_json::Value>) -> Self {
        raw.and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a new line. Insertion order is preserved and meaningful for
    /// display.
    pub fn add_item(&mut self, new: NewCartItem) -> &CartItem {
        let modifiers_price: i64 = new.modifiers.iter().map(|m| m.price).sum();
        let total_price = (new.base_price + modifiers_price) * i64::from(new.quantity);
        self.items.push(CartItem {
            id: Uuid::new_v4(),
            menu_item_id: new.menu_item_id,
            name_ar: new.name_ar,
            name_en: new.name_en,
            base_price: new.base_price,
            quantity: new.quantity,
            modifiers: new.modifiers,
            modifiers_price,
            total_price,
            notes: new.notes,
            image_url: new.image_url,
        });
        self.items.last().unwrap()
    }

    /// No-op when the id is absent.
    pub fn remove_item(&mut self, id: Uuid) {
        self.items.retain(|item| item.id != id);
    }

    /// A quantity below one removes the line; otherwise only that line's
    /// derived total is recomputed.
    pub fn update_quantity(&mut self, id: Uuid, quantity: i32) {
        if quantity < 1 {
            self.remove_item(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = quantity;
            item.total_price = (item.base_price + item.modifiers_price) * i64::from(quantity);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn subtotal(&self) -> i64 {
        self.items.iter().map(|item| item.total_price).sum()
    }

    /// Sum of quantities, not the number of lines.
    pub fn item_count(&self) -> i32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

/// Per-group modifier selection, as driven by the product configuration
/// dialog. Groups keep their selections independently; the derived price
/// spans all groups.
#[derive(Debug, Default, Clone)]
pub struct ModifierSelection {
    groups: Vec<(Uuid, Vec<CartModifier>)>,
}

impl ModifierSelection {
    /// Single-select groups replace their selection, and reselecting the
    /// current choice clears it. Multi-select groups toggle membership.
    pub fn toggle(&mut self, group_id: Uuid, modifier: CartModifier, is_multiple: bool) {
        let group = match self.groups.iter_mut().find(|(id, _)| *id == group_id) {
            Some((_, selected)) => selected,
            None => {
                self.groups.push((group_id, Vec::new()));
                &mut self.groups.last_mut().unwrap().1
            }
        };

        let exists = group.iter().any(|m| m.id == modifier.id);
        if is_multiple {
            if exists {
                group.retain(|m| m.id != modifier.id);
            } else {
                group.push(modifier);
            }
        } else if exists {
            group.clear();
        } else {
            group.clear();
            group.push(modifier);
        }
    }

    pub fn is_selected(&self, group_id: Uuid, modifier_id: Uuid) -> bool {
        self.groups
            .iter()
            .find(|(id, _)| *id == group_id)
            .map(|(_, selected)| selected.iter().any(|m| m.id == modifier_id))
            .unwrap_or(false)
    }

    pub fn group_selection(&self, group_id: Uuid) -> &[CartModifier] {
        self.groups
            .iter()
            .find(|(id, _)| *id == group_id)
            .map(|(_, selected)| selected.as_slice())
            .unwrap_or(&[])
    }

    /// All selected modifiers across groups, in selection order.
    pub fn selected(&self) -> Vec<CartModifier> {
        self.groups
            .iter()
            .flat_map(|(_, selected)| selected.iter().cloned())
            .collect()
    }

    pub fn price(&self) -> i64 {
        self.groups
            .iter()
            .flat_map(|(_, selected)| selected.iter())
            .map(|m| m.price)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modifier(price: i64) -> CartModifier {
        CartModifier {
            id: Uuid::new_v4(),
            name_ar: "جبنة إضافية".into(),
            name_en: "Extra cheese".into(),
            price,
        }
    }

    fn line(base_price: i64, quantity: i32, modifiers: Vec<CartModifier>) -> NewCartItem {
        NewCartItem {
            menu_item_id: Uuid::new_v4(),
            name_ar: "بيتزا مارجريتا".into(),
            name_en: "Margherita".into(),
            base_price,
            quantity,
            modifiers,
            notes: None,
            image_url: None,
        }
    }

    #[test]
    fn add_item_derives_total_from_base_modifiers_and_quantity() {
        let mut cart = Cart::default();
        let added = cart.add_item(line(3000, 2, vec![modifier(500)]));
        assert_eq!(added.modifiers_price, 500);
        assert_eq!(added.total_price, (3000 + 500) * 2);
        assert_eq!(cart.subtotal(), 7000);
    }

    #[test]
    fn subtotal_tracks_every_mutation_sequence() {
        let mut cart = Cart::default();
        let a = cart.add_item(line(3000, 2, vec![modifier(500)])).id;
        let b = cart.add_item(line(1200, 1, vec![])).id;
        cart.add_item(line(800, 3, vec![modifier(100), modifier(200)]));

        let expected: i64 = cart
            .items()
            .iter()
            .map(|i| (i.base_price + i.modifiers_price) * i64::from(i.quantity))
            .sum();
        assert_eq!(cart.subtotal(), expected);

        cart.update_quantity(a, 5);
        cart.remove_item(b);
        let expected: i64 = cart
            .items()
            .iter()
            .map(|i| (i.base_price + i.modifiers_price) * i64::from(i.quantity))
            .sum();
        assert_eq!(cart.subtotal(), expected);
    }

    #[test]
    fn zero_or_negative_quantity_removes_the_line() {
        let mut cart = Cart::default();
        let a = cart.add_item(line(3000, 2, vec![])).id;
        let b = cart.add_item(line(1200, 1, vec![])).id;

        cart.update_quantity(a, 0);
        assert!(cart.items().iter().all(|i| i.id != a));

        cart.update_quantity(b, -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn removing_a_missing_line_is_a_noop() {
        let mut cart = Cart::default();
        cart.add_item(line(1000, 1, vec![]));
        cart.remove_item(Uuid::new_v4());
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn same_menu_item_occupies_separate_lines() {
        let mut cart = Cart::default();
        let menu_item_id = Uuid::new_v4();
        let mut first = line(1000, 1, vec![]);
        first.menu_item_id = menu_item_id;
        let mut second = line(1000, 1, vec![modifier(300)]);
        second.menu_item_id = menu_item_id;

        let first_id = cart.add_item(first).id;
        let second_id = cart.add_item(second).id;
        assert_ne!(first_id, second_id);
        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn item_count_sums_quantities_not_lines() {
        let mut cart = Cart::default();
        cart.add_item(line(1000, 2, vec![]));
        cart.add_item(line(1000, 3, vec![]));
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn persisted_cart_round_trips_with_identical_lines_and_totals() {
        let mut cart = Cart::default();
        cart.add_item(line(3000, 2, vec![modifier(500)]));
        cart.add_item(line(1200, 4, vec![]));

        let raw = serde_json::to_value(&cart).unwrap();
        let reloaded = Cart::from_json(Some(raw));
        assert_eq!(reloaded, cart);
        assert_eq!(reloaded.subtotal(), cart.subtotal());
    }

    #[test]
    fn corrupt_or_absent_storage_yields_an_empty_cart() {
        assert!(Cart::from_json(None).is_empty());
        assert!(Cart::from_json(Some(serde_json::json!("garbage"))).is_empty());
        assert!(Cart::from_json(Some(serde_json::json!({ "items": 42 }))).is_empty());
    }

    #[test]
    fn single_select_group_replaces_and_toggles_off() {
        let group = Uuid::new_v4();
        let first = modifier(500);
        let second = modifier(700);
        let mut selection = ModifierSelection::default();

        selection.toggle(group, first.clone(), false);
        assert_eq!(selection.group_selection(group), &[first.clone()]);

        // Selecting another replaces the whole selection.
        selection.toggle(group, second.clone(), false);
        assert_eq!(selection.group_selection(group), &[second.clone()]);

        // Reselecting the current one clears, not restores.
        selection.toggle(group, second, false);
        assert!(selection.group_selection(group).is_empty());
        assert_eq!(selection.price(), 0);
    }

    #[test]
    fn multi_select_group_toggles_back_to_prior_set() {
        let group = Uuid::new_v4();
        let first = modifier(100);
        let second = modifier(200);
        let mut selection = ModifierSelection::default();

        selection.toggle(group, first.clone(), true);
        selection.toggle(group, second.clone(), true);
        let before: Vec<_> = selection.group_selection(group).to_vec();
        assert_eq!(selection.price(), 300);

        let third = modifier(400);
        selection.toggle(group, third.clone(), true);
        selection.toggle(group, third, true);
        assert_eq!(selection.group_selection(group), before.as_slice());
        assert_eq!(selection.price(), 300);
    }

    #[test]
    fn selection_price_spans_all_groups() {
        let mut selection = ModifierSelection::default();
        selection.toggle(Uuid::new_v4(), modifier(100), false);
        selection.toggle(Uuid::new_v4(), modifier(250), true);
        assert_eq!(selection.price(), 350);
        assert_eq!(selection.selected().len(), 2);
    }
}
