//! Order reads, the status workflow, and analytics aggregation.
//!
//! Orders are created by the storefront; this side only reads them and
//! overwrites their status. Every read re-fetches from the store - no
//! order state is cached between calls.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

use copper_kettle_core::{OrderId, OrderLine, OrderStatus};

use super::RepositoryError;
use crate::models::order::Order;

/// Raw order row; `status` is parsed into the enum on the way out.
#[derive(FromRow)]
struct OrderRow {
    id: OrderId,
    customer_name: String,
    items: Json<Vec<OrderLine>>,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status: OrderStatus = row
            .status
            .parse()
            .map_err(RepositoryError::DataCorruption)?;

        Ok(Self {
            id: row.id,
            customer_name: row.customer_name,
            lines: row.items.0,
            status,
            created_at: row.created_at,
        })
    }
}

/// A menu item name with its appearance count across all order lines.
#[derive(Debug, Clone, FromRow)]
pub struct PopularItem {
    pub name: String,
    pub count: i64,
}

/// Order count for one calendar day (UTC).
#[derive(Debug, Clone, FromRow)]
pub struct DayOrderCount {
    pub day: NaiveDate,
    pub count: i64,
}

/// Repository for order reads, status updates and analytics.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All orders, oldest first (the barista board order).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` for an unknown persisted status.
    pub async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, customer_name, items, status, created_at
            FROM orders
            ORDER BY created_at
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Order::try_from).collect()
    }

    /// Overwrite an order's status.
    ///
    /// No transition validation happens here: any of the four statuses may
    /// replace any other, and concurrent updates are last-write-wins.
    /// Returns the number of affected rows - 0 for an unknown id, which is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query("UPDATE orders SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Most-ordered items: every order's line array is flattened and the
    /// line names counted. Tie order between equal counts is unspecified.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn popular_items(&self) -> Result<Vec<PopularItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, PopularItem>(
            r"
            SELECT COALESCE(line->>'name', '') AS name, COUNT(*) AS count
            FROM orders, jsonb_array_elements(items) AS line
            GROUP BY name
            ORDER BY count DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Orders per calendar day (UTC), oldest day first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn orders_per_day(&self) -> Result<Vec<DayOrderCount>, RepositoryError> {
        let rows = sqlx::query_as::<_, DayOrderCount>(
            r"
            SELECT (created_at AT TIME ZONE 'UTC')::date AS day, COUNT(*) AS count
            FROM orders
            GROUP BY day
            ORDER BY day
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Total number of orders ever taken.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count_orders(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
