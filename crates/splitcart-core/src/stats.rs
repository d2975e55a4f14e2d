//! Quick list statistics, separate from the settlement computation.

use splitcart_domain::ShoppingList;

/// Headline numbers for a list view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListStats {
    pub member_count: usize,
    pub item_count: usize,
    /// Items not yet purchased.
    pub items_left: usize,
    /// Σ quantity × estimated price over ALL items. This is the only place
    /// quantity acts as a multiplier.
    pub estimated_total: f64,
    /// Σ effective price over purchased items; matches the split total.
    pub purchased_total: f64,
}

pub struct StatsService;

impl StatsService {
    pub fn compute(list: &ShoppingList) -> ListStats {
        let estimated_total = list
            .items
            .iter()
            .map(|item| item.estimated_price * item.quantity as f64)
            .sum();
        let purchased_total = list
            .items
            .iter()
            .filter(|item| item.purchased)
            .map(|item| item.effective_price())
            .sum();
        let items_left = list.items.iter().filter(|item| !item.purchased).count();
        ListStats {
            member_count: list.member_count(),
            item_count: list.item_count(),
            items_left,
            estimated_total,
            purchased_total,
        }
    }
}
