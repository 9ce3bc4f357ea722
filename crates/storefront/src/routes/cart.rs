//! Cart route handlers.
//!
//! The cart is a plain form-post flow: adding an item redirects back to the
//! cart page. All state lives in the session; nothing is persisted until
//! checkout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use copper_kettle_core::{Cart, MenuItemId, Price};

use crate::db::MenuRepository;
use crate::error::{AppError, Result};
use crate::models::session::{load_cart, save_cart};
use crate::state::AppState;

/// One cart line as displayed to the customer.
#[derive(Clone)]
pub struct CartRowView {
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub subtotal: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartTemplate {
    pub active: &'static str,
    pub rows: Vec<CartRowView>,
    pub total: String,
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub item_id: i32,
    /// Defaults to 1 when the form omits it; non-positive values are
    /// clamped to 1 by the cart itself.
    pub quantity: Option<i64>,
}

/// Build display rows by resolving the cart against the current menu.
///
/// Items that have vanished from the menu since they were added are left
/// out here, mirroring what checkout will do with them.
async fn cart_rows(state: &AppState, cart: &Cart) -> Result<(Vec<CartRowView>, String)> {
    let items = MenuRepository::new(state.pool()).list().await?;

    let mut rows = Vec::with_capacity(cart.line_count());
    let mut total = Price::zero();
    for (item_id, quantity) in cart.entries() {
        if let Some(item) = items.iter().find(|item| item.id == item_id) {
            let subtotal = item.price.times(quantity);
            total = total + subtotal;
            rows.push(CartRowView {
                name: item.name.clone(),
                quantity,
                unit_price: item.price.to_string(),
                subtotal: subtotal.to_string(),
            });
        }
    }

    Ok((rows, total.to_string()))
}

/// Display the cart page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Response> {
    let cart = load_cart(&session).await;
    let (rows, total) = cart_rows(&state, &cart).await?;

    Ok(CartTemplate {
        active: "cart",
        rows,
        total,
    }
    .into_response())
}

/// Add an item to the cart.
///
/// Adding an item that is already in the cart increments its quantity.
#[instrument(skip(session))]
pub async fn add(session: Session, Form(form): Form<AddToCartForm>) -> Result<Response> {
    let mut cart = load_cart(&session).await;
    cart.add(MenuItemId::new(form.item_id), form.quantity.unwrap_or(1));
    save_cart(&session, &cart).await.map_err(AppError::Session)?;

    Ok(Redirect::to("/cart").into_response())
}
