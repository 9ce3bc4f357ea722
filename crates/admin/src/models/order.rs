//! Order domain type.

use chrono::{DateTime, Utc};

use copper_kettle_core::{OrderId, OrderLine, OrderStatus};

/// A persisted order.
///
/// Owned by the database once created; this struct is always a fresh read,
/// never a cached copy.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub lines: Vec<OrderLine>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}
