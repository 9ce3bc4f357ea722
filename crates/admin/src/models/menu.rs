//! Menu item domain type.

use sqlx::FromRow;

use copper_kettle_core::{MenuItemId, Price};

/// A menu item as managed in the admin console.
#[derive(Debug, Clone, FromRow)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Price,
    pub category: String,
    pub description: Option<String>,
    pub image: Option<String>,
}
