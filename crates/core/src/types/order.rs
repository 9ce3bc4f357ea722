//! Order line items.

use serde::{Deserialize, Serialize};

use super::price::Price;

/// One resolved line of an order.
///
/// Computed at checkout from the authoritative menu price - a client never
/// supplies a price. The full line list is serialized as a single JSON
/// array on the order row, which is also what the popularity analytics
/// flatten over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Menu item name at the time of checkout.
    pub name: String,
    /// Units ordered.
    pub quantity: u32,
    /// Price × quantity for this line.
    pub subtotal: Price,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_stable_field_names() {
        let line = OrderLine {
            name: "Latte".to_owned(),
            quantity: 2,
            subtotal: Price::new("7.00".parse().unwrap()),
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["name"], "Latte");
        assert_eq!(json["quantity"], 2);
        // rust_decimal's serde-with-str writes the amount as a string
        assert_eq!(json["subtotal"], "7.00");
    }
}
