//! Menu repository: the admin console owns all menu mutation.

use sqlx::PgPool;

use copper_kettle_core::{MenuItemId, Price};

use super::RepositoryError;
use crate::models::menu::MenuItem;

/// Fields for creating or updating a menu item.
#[derive(Debug, Clone)]
pub struct MenuItemDraft {
    pub name: String,
    pub price: Price,
    pub category: String,
    pub description: Option<String>,
    /// Stored image file name, if any.
    pub image: Option<String>,
}

/// Repository for menu management.
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

    /// Insert a new menu item and return its id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, draft: &MenuItemDraft) -> Result<MenuItemId, RepositoryError> {
        let id = sqlx::query_scalar::<_, i32>(
            r"
            INSERT INTO menu_items (name, price, category, description, image)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(&draft.name)
        .bind(draft.price)
        .bind(&draft.category)
        .bind(&draft.description)
        .bind(&draft.image)
        .fetch_one(self.pool)
        .await?;

        Ok(MenuItemId::new(id))
    }

    /// Update an existing menu item. Returns the number of affected rows
    /// (0 when the id does not exist).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: MenuItemId,
        draft: &MenuItemDraft,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE menu_items
            SET name = $1, price = $2, category = $3, description = $4, image = $5
            WHERE id = $6
            ",
        )
        .bind(&draft.name)
        .bind(draft.price)
        .bind(&draft.category)
        .bind(&draft.description)
        .bind(&draft.image)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a menu item by id. Returns the number of affected rows.
    ///
    /// Orders keep their resolved line copies, so deleting an item never
    /// touches order history.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: MenuItemId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
