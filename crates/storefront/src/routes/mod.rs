//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Home page
//! GET  /about           - About page
//! GET  /menu            - Menu grouped by category
//! GET  /health          - Health check
//!
//! # Cart
//! GET  /cart            - Cart page
//! POST /cart/add        - Add an item (increments existing entries)
//!
//! # Checkout
//! GET  /checkout        - Customer name form (redirects to /cart if empty)
//! POST /checkout        - Create the order, show the receipt
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod menu;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/about", get(home::about))
        .route("/menu", get(menu::index))
        .nest("/cart", cart_routes())
        .route("/checkout", get(checkout::form).post(checkout::submit))
}
