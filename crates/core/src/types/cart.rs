//! The session shopping cart.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::id::MenuItemId;

/// A customer's cart: menu item id mapped to requested quantity.
///
/// Lives only in the customer's session - nothing is persisted until
/// checkout converts the cart into an order. Quantities are always at
/// least 1; adding an item already present increments its quantity.
///
/// There is no single-item removal or decrement operation; the cart is
/// only ever added to or cleared wholesale after checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    entries: BTreeMap<MenuItemId, u32>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add `quantity` of an item, incrementing any existing entry.
    ///
    /// Non-positive input is clamped to 1, so every call adds at least one
    /// of the item.
    pub fn add(&mut self, item: MenuItemId, quantity: i64) {
        let quantity = u32::try_from(quantity).unwrap_or(0).max(1);
        let entry = self.entries.entry(item).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }

    /// Quantity of a single item, if present.
    #[must_use]
    pub fn quantity_of(&self, item: MenuItemId) -> Option<u32> {
        self.entries.get(&item).copied()
    }

    /// Iterate the (item, quantity) pairs.
    pub fn entries(&self) -> impl Iterator<Item = (MenuItemId, u32)> + '_ {
        self.entries.iter().map(|(id, qty)| (*id, *qty))
    }

    /// Number of distinct items.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.entries.len()
    }

    /// Total units across all items (the cart badge number).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.entries.values().fold(0, |acc, qty| acc.saturating_add(*qty))
    }

    /// Whether the cart holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty the cart. Called once, after a successful checkout.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn adding_same_item_twice_increments() {
        let mut cart = Cart::new();
        cart.add(MenuItemId::new(7), 1);
        cart.add(MenuItemId::new(7), 1);
        assert_eq!(cart.quantity_of(MenuItemId::new(7)), Some(2));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn non_positive_quantity_clamps_to_one() {
        let mut cart = Cart::new();
        cart.add(MenuItemId::new(1), 0);
        cart.add(MenuItemId::new(2), -4);
        assert_eq!(cart.quantity_of(MenuItemId::new(1)), Some(1));
        assert_eq!(cart.quantity_of(MenuItemId::new(2)), Some(1));
    }

    #[test]
    fn item_count_sums_quantities() {
        let mut cart = Cart::new();
        cart.add(MenuItemId::new(7), 2);
        cart.add(MenuItemId::new(9), 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(MenuItemId::new(3), 5);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn survives_session_serialization() {
        let mut cart = Cart::new();
        cart.add(MenuItemId::new(7), 2);
        cart.add(MenuItemId::new(9), 1);
        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }
}
