//! Checkout route handlers.
//!
//! GET shows the customer-name form; POST runs the checkout service and
//! renders the receipt. An empty cart never reaches the service from the
//! happy path - both handlers bounce it back to the cart page.

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

use crate::error::{AppError, Result};
use crate::models::session::{clear_cart, load_cart};
use crate::services::{CheckoutError, CheckoutService, Receipt};
use crate::state::AppState;

/// Checkout form template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/form.html")]
pub struct CheckoutFormTemplate {
    pub active: &'static str,
    pub error: Option<String>,
}

/// One receipt line.
#[derive(Clone)]
pub struct ReceiptLineView {
    pub name: String,
    pub quantity: u32,
    pub subtotal: String,
}

/// Receipt page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/receipt.html")]
pub struct ReceiptTemplate {
    pub active: &'static str,
    pub order_id: String,
    pub customer_name: String,
    pub lines: Vec<ReceiptLineView>,
    pub total: String,
}

impl From<Receipt> for ReceiptTemplate {
    fn from(receipt: Receipt) -> Self {
        Self {
            active: "cart",
            order_id: receipt.order_id.to_string(),
            customer_name: receipt.customer_name,
            lines: receipt
                .lines
                .into_iter()
                .map(|line| ReceiptLineView {
                    name: line.name,
                    quantity: line.quantity,
                    subtotal: line.subtotal.to_string(),
                })
                .collect(),
            total: receipt.total.to_string(),
        }
    }
}

/// Checkout form data.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    pub customer_name: String,
}

/// Display the checkout form, or bounce an empty cart back to /cart.
#[instrument(skip(session))]
pub async fn form(session: Session) -> Response {
    let cart = load_cart(&session).await;
    if cart.is_empty() {
        return Redirect::to("/cart").into_response();
    }

    CheckoutFormTemplate {
        active: "cart",
        error: None,
    }
    .into_response()
}

/// Create the order and show the receipt.
#[instrument(skip(state, session))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CheckoutForm>,
) -> Result<Response> {
    let customer_name = form.customer_name.trim();
    if customer_name.is_empty() {
        return Ok(CheckoutFormTemplate {
            active: "cart",
            error: Some("Please tell us your name so we can call your order.".to_string()),
        }
        .into_response());
    }

    let cart = load_cart(&session).await;

    let receipt = match CheckoutService::new(state.pool())
        .checkout(&cart, customer_name)
        .await
    {
        Ok(receipt) => receipt,
        // Empty cart is a navigation problem, not a server error
        Err(CheckoutError::EmptyCart) => return Ok(Redirect::to("/cart").into_response()),
        Err(CheckoutError::Repository(e)) => return Err(AppError::Database(e)),
    };

    // The cart is spent once the order exists
    clear_cart(&session).await.map_err(AppError::Session)?;

    Ok(ReceiptTemplate::from(receipt).into_response())
}
