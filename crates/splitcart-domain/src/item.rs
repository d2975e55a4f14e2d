//! Domain types representing shopping items and their purchase lifecycle.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Recognized category labels. The field stays a free-form string so the
/// set can grow without a schema change; unknown labels are accepted.
pub const CATEGORIES: [&str; 6] = [
    "Groceries",
    "Household",
    "Personal Care",
    "Electronics",
    "Clothing",
    "Other",
];

pub const DEFAULT_CATEGORY: &str = "Groceries";

/// Returns `true` when `label` matches one of [`CATEGORIES`].
pub fn is_known_category(label: &str) -> bool {
    CATEGORIES.iter().any(|known| known.eq_ignore_ascii_case(label))
}

/// A single entry on the shopping list.
///
/// The three purchase fields move together: `purchased`, `purchased_by` and
/// `actual_price` are either all set or all cleared. Use
/// [`ShoppingItem::mark_purchased`] and [`ShoppingItem::mark_unpurchased`]
/// rather than editing the fields directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: u32,
    pub estimated_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_price: Option<f64>,
    pub category: String,
    pub added_by: Uuid,
    pub purchased: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchased_by: Option<Uuid>,
}

impl ShoppingItem {
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        estimated_price: f64,
        category: impl Into<String>,
        added_by: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity,
            estimated_price,
            actual_price: None,
            category: category.into(),
            added_by,
            purchased: false,
            purchased_by: None,
        }
    }

    /// Price the item contributes to cost computations: the recorded actual
    /// price when present, otherwise the estimate. Quantity is not a factor.
    pub fn effective_price(&self) -> f64 {
        self.actual_price.unwrap_or(self.estimated_price)
    }

    /// Marks the item purchased, atomically setting the three correlated
    /// fields. The purchaser defaults to whoever added the item; the price
    /// defaults to the current effective price.
    pub fn mark_purchased(&mut self, price: Option<f64>, purchaser: Option<Uuid>) {
        let price = price.unwrap_or_else(|| self.effective_price());
        self.purchased = true;
        self.actual_price = Some(price);
        self.purchased_by = Some(purchaser.unwrap_or(self.added_by));
    }

    /// Reverts a purchase, clearing the purchaser and the actual price.
    pub fn mark_unpurchased(&mut self) {
        self.purchased = false;
        self.actual_price = None;
        self.purchased_by = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_purchased_sets_all_three_fields() {
        let member = Uuid::new_v4();
        let mut item = ShoppingItem::new("Milk", 2, 120.0, DEFAULT_CATEGORY, member);
        assert!(!item.purchased);
        assert!(item.actual_price.is_none());

        item.mark_purchased(Some(110.0), None);
        assert!(item.purchased);
        assert_eq!(item.actual_price, Some(110.0));
        assert_eq!(item.purchased_by, Some(member));
    }

    #[test]
    fn mark_purchased_defaults_price_to_estimate() {
        let mut item = ShoppingItem::new("Bread", 1, 60.0, DEFAULT_CATEGORY, Uuid::new_v4());
        item.mark_purchased(None, None);
        assert_eq!(item.actual_price, Some(60.0));
        assert_eq!(item.effective_price(), 60.0);
    }

    #[test]
    fn mark_unpurchased_clears_all_three_fields() {
        let buyer = Uuid::new_v4();
        let mut item = ShoppingItem::new("Soap", 1, 80.0, "Personal Care", Uuid::new_v4());
        item.mark_purchased(Some(75.0), Some(buyer));
        item.mark_unpurchased();

        assert!(!item.purchased);
        assert!(item.actual_price.is_none());
        assert!(item.purchased_by.is_none());
    }

    #[test]
    fn effective_price_falls_back_to_estimate() {
        let item = ShoppingItem::new("Rice", 3, 200.0, DEFAULT_CATEGORY, Uuid::new_v4());
        assert_eq!(item.effective_price(), 200.0);
    }

    #[test]
    fn category_labels_are_recognized_case_insensitively() {
        assert!(is_known_category("Groceries"));
        assert!(is_known_category("personal care"));
        assert!(!is_known_category("Automotive"));
    }

    #[test]
    fn item_round_trips_through_json() {
        let item = ShoppingItem::new("Eggs", 12, 15.0, DEFAULT_CATEGORY, Uuid::new_v4());
        let json = serde_json::to_string(&item).expect("serialize");
        let back: ShoppingItem = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, item);
    }
}
