//! Session-held state.
//!
//! The cart is the only thing the storefront keeps in the session. It is
//! read and written through these helpers so no handler touches the raw
//! session key, and its lifetime is exactly the session's (the session
//! layer expires it; checkout removes it explicitly).

use tower_sessions::Session;

use copper_kettle_core::Cart;

/// Session keys for storefront data.
pub mod keys {
    /// Key for storing the customer's cart.
    pub const CART: &str = "cart";
}

/// Read the cart from the session, defaulting to an empty one.
pub async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Write the cart back to the session.
///
/// # Errors
///
/// Returns the session store error if persisting fails.
pub async fn save_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART, cart).await
}

/// Drop the cart from the session. Called once after a successful checkout.
///
/// # Errors
///
/// Returns the session store error if the removal fails.
pub async fn clear_cart(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<Cart>(keys::CART).await.map(|_| ())
}
