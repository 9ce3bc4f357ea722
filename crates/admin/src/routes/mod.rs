//! HTTP route handlers for the staff console.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Redirect by role (admin/barista/login)
//! GET  /health                   - Health check
//!
//! # Auth
//! GET  /auth/login               - Login page
//! POST /auth/login               - Login action
//! POST /auth/logout              - Logout action
//!
//! # Admin console (admin role)
//! GET  /admin                    - Menu dashboard with search/filter
//! GET  /admin/items/new          - New item form
//! POST /admin/items              - Create item (multipart, optional image)
//! GET  /admin/items/{id}/edit    - Edit item form
//! POST /admin/items/{id}        - Update item (multipart, optional image)
//! POST /admin/items/{id}/delete  - Delete item
//! POST /admin/theme              - Change the console theme
//! GET  /admin/analytics          - Popular items, orders per day, totals
//!
//! # Barista console (barista role)
//! GET  /barista                  - Order board, oldest first
//! POST /barista/orders/{id}/status - Overwrite an order's status
//! ```

pub mod analytics;
pub mod auth;
pub mod barista;
pub mod dashboard;
pub mod items;
pub mod settings;

use axum::{
    Router,
    routing::{get, post},
};

use crate::models::CurrentStaff;
use crate::state::AppState;

/// Staff view for template headers.
#[derive(Debug, Clone)]
pub struct StaffView {
    pub username: String,
    pub is_admin: bool,
}

impl From<&CurrentStaff> for StaffView {
    fn from(staff: &CurrentStaff) -> Self {
        Self {
            username: staff.username.clone(),
            is_admin: staff.role == copper_kettle_core::StaffRole::Admin,
        }
    }
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the admin console router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/items/new", get(items::new_form))
        .route("/items", post(items::create))
        .route("/items/{id}/edit", get(items::edit_form))
        .route("/items/{id}", post(items::update))
        .route("/items/{id}/delete", post(items::delete))
        .route("/theme", post(settings::set_theme))
        .route("/analytics", get(analytics::index))
}

/// Create the barista console router.
pub fn barista_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(barista::board))
        .route("/orders/{id}/status", post(barista::update_status))
}

/// Create all routes for the staff console.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(auth::index))
        .nest("/auth", auth_routes())
        .nest("/admin", admin_routes())
        .nest("/barista", barista_routes())
}
