use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product+size row in the cart.
///
/// `id` is the composite `<productId>-<size>`, so the same perfume in two
/// bottle sizes yields two distinct rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    /// Unit price; line total is `price * quantity`.
    pub price: Decimal,
    pub image: String,
    pub category: String,
    pub quantity: u32,
}

/// The in-session shopping cart.
///
/// A single owned instance is passed by reference to every consumer; it
/// has no ambient global. All mutations are synchronous and come from one
/// caller at a time, so there is no interior locking.
#[derive(Debug, Default, Clone)]
pub struct CartStore {
    items: Vec<LineItem>,
}

impl CartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds an item. A row with the same id accumulates the incoming
    /// quantity; otherwise the item is inserted as a new row. A zero
    /// incoming quantity is treated as 1. Always succeeds.
    pub fn add(&mut self, item: LineItem) {
        let quantity = item.quantity.max(1);
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity += quantity;
        } else {
            self.items.push(LineItem { quantity, ..item });
        }
    }

    /// Sets the quantity of the matching row. A quantity of zero removes
    /// the row instead of keeping a dead line around. No-op for an
    /// unknown id.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity;
        }
    }

    /// Removes the row with the given id. No-op when absent.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    /// Empties the cart. Called once, after a successful checkout
    /// hand-off.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Exact sum of `price * quantity` over all rows. No rounding is
    /// applied here; rounding happens only at display time.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items
            .iter()
            .map(|i| i.price * Decimal::from(i.quantity))
            .sum()
    }
}
