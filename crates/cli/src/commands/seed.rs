//! Menu seeding with sample data.

use rust_decimal::Decimal;

use super::{CommandError, connect};

/// Sample menu: (name, price, category, description).
const SAMPLE_ITEMS: [(&str, &str, &str, &str); 5] = [
    ("Latte", "3.50", "Drinks", "Smooth espresso with steamed milk"),
    ("Cappuccino", "3.20", "Drinks", "Classic Italian coffee with foam"),
    (
        "Strawberry Cake Slice",
        "4.00",
        "Cake",
        "Fresh, sweet strawberry cake",
    ),
    ("Croissant", "2.40", "Cake", "Freshly baked butter croissant"),
    ("Catan Board Game", "2.00", "Board Games", "Rent for 2 hours"),
];

/// Insert the sample menu items, skipping entirely if the menu already has
/// any (prevents duplicates on repeated runs).
///
/// # Errors
///
/// Returns `CommandError::Database` if a query fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM menu_items")
        .fetch_one(&pool)
        .await?;

    if count > 0 {
        tracing::info!(existing = count, "menu already seeded; nothing to do");
        return Ok(());
    }

    for (name, price, category, description) in SAMPLE_ITEMS {
        let price: Decimal = price
            .parse()
            .map_err(|_| CommandError::Invalid(format!("bad sample price for {name}")))?;

        sqlx::query(
            r"
            INSERT INTO menu_items (name, price, category, description)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(name)
        .bind(price)
        .bind(category)
        .bind(description)
        .execute(&pool)
        .await?;
    }

    tracing::info!(items = SAMPLE_ITEMS.len(), "sample menu items added");
    Ok(())
}
