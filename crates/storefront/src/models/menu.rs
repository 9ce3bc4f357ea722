//! Menu item domain type.

use sqlx::FromRow;

use copper_kettle_core::{MenuItemId, Price};

/// A purchasable menu item.
///
/// `image` is the bare file name under the upload directory, or `None` for
/// items without a photo.
#[derive(Debug, Clone, FromRow)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Price,
    pub category: String,
    pub description: Option<String>,
    pub image: Option<String>,
}
