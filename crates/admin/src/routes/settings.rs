//! Console theme setting.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::db::settings;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Theme form data.
#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    pub theme: String,
}

/// Change the active console theme.
#[instrument(skip(state))]
pub async fn set_theme(
    RequireAdmin(_staff): RequireAdmin,
    State(state): State<AppState>,
    Form(form): Form<ThemeForm>,
) -> Result<Response> {
    let theme = form.theme.trim();
    if theme.is_empty() {
        return Err(AppError::BadRequest("theme is required".to_string()));
    }

    settings::set_setting(state.pool(), settings::THEME_KEY, theme).await?;
    tracing::info!(%theme, "console theme changed");

    Ok(Redirect::to("/admin").into_response())
}
