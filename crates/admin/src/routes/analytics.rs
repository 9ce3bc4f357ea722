//! Analytics dashboard: read-only aggregation over orders.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::db::{OrderRepository, settings};
use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

use super::StaffView;

/// One row of the popular-items table.
#[derive(Clone)]
pub struct PopularView {
    pub name: String,
    pub count: i64,
}

/// One row of the orders-per-day table.
#[derive(Clone)]
pub struct DayView {
    pub day: String,
    pub count: i64,
}

/// Analytics page template.
#[derive(Template, WebTemplate)]
#[template(path = "analytics.html")]
pub struct AnalyticsTemplate {
    pub active: &'static str,
    pub staff: StaffView,
    pub theme: String,
    pub popular: Vec<PopularView>,
    pub per_day: Vec<DayView>,
    pub total_orders: i64,
}

/// Display the analytics dashboard.
///
/// Every visit re-aggregates over the full order set - there is no caching
/// here, which is fine at café scale.
#[instrument(skip(staff, state))]
pub async fn index(
    RequireAdmin(staff): RequireAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let orders = OrderRepository::new(state.pool());

    let popular = orders
        .popular_items()
        .await?
        .into_iter()
        .map(|row| PopularView {
            name: row.name,
            count: row.count,
        })
        .collect();

    let per_day = orders
        .orders_per_day()
        .await?
        .into_iter()
        .map(|row| DayView {
            day: row.day.format("%Y-%m-%d").to_string(),
            count: row.count,
        })
        .collect();

    let total_orders = orders.count_orders().await?;
    let theme = settings::active_theme(state.pool()).await?;

    Ok(AnalyticsTemplate {
        active: "analytics",
        staff: StaffView::from(&staff),
        theme,
        popular,
        per_day,
        total_orders,
    })
}
