//! Login and logout handlers.

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

use copper_kettle_core::StaffRole;

use crate::error::{AppError, Result};
use crate::middleware::{OptionalStaff, set_current_staff};
use crate::services::{AuthError, AuthService};
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Login page template (standalone, no console chrome).
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Where a staff member lands after login.
fn redirect_for_role(role: StaffRole) -> Response {
    match role {
        StaffRole::Admin => Redirect::to("/admin").into_response(),
        StaffRole::Barista => Redirect::to("/barista").into_response(),
    }
}

/// Root redirect: send staff to their console, everyone else to login.
pub async fn index(OptionalStaff(staff): OptionalStaff) -> Response {
    match staff {
        Some(staff) => redirect_for_role(staff.role),
        None => Redirect::to("/auth/login").into_response(),
    }
}

/// Display the login page.
pub async fn login_page(OptionalStaff(staff): OptionalStaff) -> Response {
    // Already logged in - straight to the console
    if let Some(staff) = staff {
        return redirect_for_role(staff.role);
    }

    LoginTemplate { error: None }.into_response()
}

/// Handle login form submission.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    match AuthService::new(state.pool())
        .login(&form.username, &form.password)
        .await
    {
        Ok(staff) => {
            set_current_staff(&session, &staff)
                .await
                .map_err(AppError::Session)?;
            tracing::info!(username = %staff.username, role = %staff.role, "staff login");
            Ok(redirect_for_role(staff.role))
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!(username = %form.username, "failed login attempt");
            Ok(LoginTemplate {
                error: Some("Invalid username or password".to_string()),
            }
            .into_response())
        }
        Err(e) => Err(AppError::Auth(e)),
    }
}

/// Clear the session and return to the login page.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Response> {
    session.flush().await.map_err(AppError::Session)?;
    Ok(Redirect::to("/auth/login").into_response())
}
