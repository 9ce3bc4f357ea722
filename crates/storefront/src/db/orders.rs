//! Order creation.
//!
//! The storefront's only write path: checkout inserts one `orders` row per
//! successful submission. The row id and creation timestamp are assigned by
//! the database.

use sqlx::PgPool;
use sqlx::types::Json;

use copper_kettle_core::{OrderId, OrderLine};

use super::RepositoryError;

/// Repository for creating orders.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new order in `pending` status and return its id.
    ///
    /// The line list is stored as a single JSONB array.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        customer_name: &str,
        lines: &[OrderLine],
    ) -> Result<OrderId, RepositoryError> {
        let id = sqlx::query_scalar::<_, i32>(
            r"
            INSERT INTO orders (customer_name, items, status)
            VALUES ($1, $2, 'pending')
            RETURNING id
            ",
        )
        .bind(customer_name)
        .bind(Json(lines))
        .fetch_one(self.pool)
        .await?;

        Ok(OrderId::new(id))
    }
}
