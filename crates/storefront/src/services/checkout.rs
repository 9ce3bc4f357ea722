//! Checkout: the cart-to-order transition.
//!
//! The cart only ever holds item ids and quantities; checkout re-resolves
//! every line against the menu table so prices are always the
//! authoritative ones. A cart line whose item has been removed from the
//! menu since it was added is dropped rather than failing the whole
//! checkout - the drop is logged as a warning so desync between menu edits
//! and open carts stays visible.

use std::collections::HashMap;

use sqlx::PgPool;
use thiserror::Error;

use copper_kettle_core::{Cart, MenuItemId, OrderId, OrderLine, Price};

use crate::db::{MenuRepository, OrderRepository, RepositoryError};
use crate::models::menu::MenuItem;

/// What the customer gets back from a successful checkout.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub order_id: OrderId,
    pub customer_name: String,
    pub lines: Vec<OrderLine>,
    pub total: Price,
}

/// Errors that can occur during checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout was attempted with nothing in the cart. Recovered locally
    /// by sending the customer back to the cart view.
    #[error("cart is empty")]
    EmptyCart,

    /// Database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Cart priced against the current menu.
struct PricedCart {
    lines: Vec<OrderLine>,
    total: Price,
    missing: Vec<MenuItemId>,
}

/// Checkout service: owns the cart-to-order transition.
pub struct CheckoutService<'a> {
    pool: &'a PgPool,
}

impl<'a> CheckoutService<'a> {
    /// Create a new checkout service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Convert a cart into a persisted order.
    ///
    /// Creates exactly one order row, in `pending` status, with a
    /// server-assigned creation timestamp. There is no idempotency key: a
    /// retried submission creates a second order.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` for an empty cart (no order is
    /// created) and `CheckoutError::Repository` if the database fails.
    pub async fn checkout(
        &self,
        cart: &Cart,
        customer_name: &str,
    ) -> Result<Receipt, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let catalog: HashMap<MenuItemId, MenuItem> = MenuRepository::new(self.pool)
            .list()
            .await?
            .into_iter()
            .map(|item| (item.id, item))
            .collect();

        let priced = price_cart(cart, &catalog);
        for item_id in &priced.missing {
            tracing::warn!(%item_id, "menu item missing at checkout; line dropped");
        }

        let order_id = OrderRepository::new(self.pool)
            .create(customer_name, &priced.lines)
            .await?;

        tracing::info!(
            %order_id,
            lines = priced.lines.len(),
            total = %priced.total,
            "order created"
        );

        Ok(Receipt {
            order_id,
            customer_name: customer_name.to_owned(),
            lines: priced.lines,
            total: priced.total,
        })
    }
}

/// Resolve every cart entry against the menu catalog.
///
/// Unresolvable entries are collected in `missing` and excluded from the
/// lines; everything else gets `subtotal = price × quantity`.
fn price_cart(cart: &Cart, catalog: &HashMap<MenuItemId, MenuItem>) -> PricedCart {
    let mut lines = Vec::with_capacity(cart.line_count());
    let mut missing = Vec::new();

    for (item_id, quantity) in cart.entries() {
        match catalog.get(&item_id) {
            Some(item) => lines.push(OrderLine {
                name: item.name.clone(),
                quantity,
                subtotal: item.price.times(quantity),
            }),
            None => missing.push(item_id),
        }
    }

    let total = lines.iter().map(|line| line.subtotal).sum();

    PricedCart {
        lines,
        total,
        missing,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(id: i32, name: &str, price: &str) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(id),
            name: name.to_owned(),
            price: Price::new(price.parse().unwrap()),
            category: "Drinks".to_owned(),
            description: None,
            image: None,
        }
    }

    fn catalog(items: Vec<MenuItem>) -> HashMap<MenuItemId, MenuItem> {
        items.into_iter().map(|i| (i.id, i)).collect()
    }

    #[test]
    fn totals_sum_price_times_quantity() {
        let catalog = catalog(vec![item(7, "Latte", "3.50"), item(9, "Cake", "4.00")]);
        let mut cart = Cart::new();
        cart.add(MenuItemId::new(7), 2);
        cart.add(MenuItemId::new(9), 1);

        let priced = price_cart(&cart, &catalog);

        assert_eq!(priced.lines.len(), 2);
        assert_eq!(priced.total, Price::new("11.00".parse().unwrap()));
        assert!(priced.missing.is_empty());

        let latte = priced.lines.iter().find(|l| l.name == "Latte").unwrap();
        assert_eq!(latte.quantity, 2);
        assert_eq!(latte.subtotal, Price::new("7.00".parse().unwrap()));
    }

    #[test]
    fn missing_item_drops_the_line_only() {
        let catalog = catalog(vec![item(7, "Latte", "3.50")]);
        let mut cart = Cart::new();
        cart.add(MenuItemId::new(7), 1);
        cart.add(MenuItemId::new(404), 3);

        let priced = price_cart(&cart, &catalog);

        assert_eq!(priced.lines.len(), 1);
        assert_eq!(priced.missing, vec![MenuItemId::new(404)]);
        assert_eq!(priced.total, Price::new("3.50".parse().unwrap()));
    }

    #[test]
    fn all_missing_yields_no_lines() {
        let priced = price_cart(
            &{
                let mut cart = Cart::new();
                cart.add(MenuItemId::new(1), 1);
                cart
            },
            &HashMap::new(),
        );

        assert!(priced.lines.is_empty());
        assert_eq!(priced.total, Price::zero());
        assert_eq!(priced.missing.len(), 1);
    }
}
