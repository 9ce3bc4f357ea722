//! Barista board: the order status workflow.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use copper_kettle_core::{OrderId, OrderStatus};

use crate::db::{OrderRepository, settings};
use crate::error::{AppError, Result};
use crate::middleware::RequireBarista;
use crate::models::Order;
use crate::state::AppState;

use super::StaffView;

/// One line on an order card.
#[derive(Clone)]
pub struct BaristaLineView {
    pub name: String,
    pub quantity: u32,
}

/// One order card on the board.
#[derive(Clone)]
pub struct OrderCardView {
    pub id: i32,
    pub customer_name: String,
    pub placed_at: String,
    pub status: &'static str,
    /// The workflow's next stage, used for the card's primary button.
    pub next_status: Option<&'static str>,
    pub lines: Vec<BaristaLineView>,
}

impl From<&Order> for OrderCardView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.as_i32(),
            customer_name: order.customer_name.clone(),
            placed_at: order.created_at.format("%d %b %H:%M").to_string(),
            status: order.status.as_str(),
            next_status: order.status.next().map(|s| s.as_str()),
            lines: order
                .lines
                .iter()
                .map(|line| BaristaLineView {
                    name: line.name.clone(),
                    quantity: line.quantity,
                })
                .collect(),
        }
    }
}

/// Barista board template.
#[derive(Template, WebTemplate)]
#[template(path = "barista/board.html")]
pub struct BoardTemplate {
    pub active: &'static str,
    pub staff: StaffView,
    pub theme: String,
    pub orders: Vec<OrderCardView>,
    /// Every status, for the manual override selector.
    pub statuses: Vec<String>,
}

/// Status update form data.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

/// Display the order board, oldest order first.
#[instrument(skip(staff, state))]
pub async fn board(
    RequireBarista(staff): RequireBarista,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let orders = OrderRepository::new(state.pool()).list().await?;
    let theme = settings::active_theme(state.pool()).await?;

    Ok(BoardTemplate {
        active: "barista",
        staff: StaffView::from(&staff),
        theme,
        orders: orders.iter().map(OrderCardView::from).collect(),
        statuses: OrderStatus::ALL.iter().map(ToString::to_string).collect(),
    })
}

/// Overwrite an order's status.
///
/// Any of the four statuses is accepted regardless of the current one; a
/// status outside the four is a 400. An unknown order id updates nothing
/// and still redirects back to the board.
#[instrument(skip(state))]
pub async fn update_status(
    RequireBarista(_staff): RequireBarista,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<StatusForm>,
) -> Result<Response> {
    let status: OrderStatus = form.status.parse().map_err(AppError::BadRequest)?;

    let id = OrderId::new(id);
    let affected = OrderRepository::new(state.pool())
        .update_status(id, status)
        .await?;

    if affected == 0 {
        tracing::warn!(order_id = %id, "status update for unknown order");
    } else {
        tracing::info!(order_id = %id, %status, "order status updated");
    }

    Ok(Redirect::to("/barista").into_response())
}
