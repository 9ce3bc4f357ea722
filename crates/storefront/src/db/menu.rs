//! Read-only menu repository.
//!
//! The storefront treats the menu as an authoritative read-only catalog;
//! all mutation happens in the admin binary.

use sqlx::PgPool;

use copper_kettle_core::MenuItemId;

use super::RepositoryError;
use crate::models::menu::MenuItem;

/// Repository for menu lookups.
pub struct MenuRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MenuRepository<'a> {
    /// Create a new menu repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All menu items, ordered for display (category, then name).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        let items = sqlx::query_as::<_, MenuItem>(
            r"
            SELECT id, name, price, category, description, image
            FROM menu_items
            ORDER BY category, name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Look up a single item by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: MenuItemId) -> Result<Option<MenuItem>, RepositoryError> {
        let item = sqlx::query_as::<_, MenuItem>(
            r"
            SELECT id, name, price, category, description, image
            FROM menu_items
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(item)
    }
}
