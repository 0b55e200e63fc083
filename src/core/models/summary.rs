//! Aggregate view over a shopping list

use serde::Serialize;

use super::Item;

/// Counts and values computed over every item in a list
///
/// `total_value == purchased_value + remaining_value` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Number of items
    pub count: usize,
    /// Items marked as purchased
    pub purchased_count: usize,
    /// Items still to buy
    pub unpurchased_count: usize,
    /// Sum of all subtotals
    pub total_value: f64,
    /// Sum of subtotals of purchased items
    pub purchased_value: f64,
    /// Value still to spend
    pub remaining_value: f64,
}

impl Summary {
    /// Aggregate a sequence of items
    #[must_use]
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut summary = Self::default();
        for item in items {
            let subtotal = item.subtotal();
            summary.count += 1;
            summary.total_value += subtotal;
            if item.purchased() {
                summary.purchased_count += 1;
                summary.purchased_value += subtotal;
            }
        }
        summary.unpurchased_count = summary.count - summary.purchased_count;
        summary.remaining_value = summary.total_value - summary.purchased_value;
        summary
    }

    /// Whether the list was empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}
