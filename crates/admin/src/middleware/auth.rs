//! Role-gate extractors for the staff console.
//!
//! Every admin/barista handler starts with one of these extractors, so the
//! role check happens before any handler code runs: a request that fails
//! the gate has no side effects.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use copper_kettle_core::StaffRole;

use crate::models::{CurrentStaff, session};

/// Error returned when a console requires a role the caller lacks.
pub enum StaffAuthRejection {
    /// Not logged in - redirect to the login page.
    RedirectToLogin,
    /// Logged in, but with the wrong role.
    Forbidden,
}

impl IntoResponse for StaffAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/auth/login").into_response(),
            Self::Forbidden => {
                (StatusCode::FORBIDDEN, "This console requires a different role").into_response()
            }
        }
    }
}

/// Read the logged-in staff member from the request's session, if any.
async fn current_staff(parts: &mut Parts) -> Option<CurrentStaff> {
    let session = parts.extensions.get::<Session>()?;
    session
        .get::<CurrentStaff>(session::CURRENT_STAFF)
        .await
        .ok()
        .flatten()
}

/// Shared gate body for the two role extractors.
async fn require_role(parts: &mut Parts, role: StaffRole) -> Result<CurrentStaff, StaffAuthRejection> {
    let staff = current_staff(parts)
        .await
        .ok_or(StaffAuthRejection::RedirectToLogin)?;

    if staff.role != role {
        return Err(StaffAuthRejection::Forbidden);
    }

    Ok(staff)
}

/// Extractor that requires the `admin` role.
///
/// # Example
///
/// ```rust,ignore
/// async fn dashboard(RequireAdmin(staff): RequireAdmin) -> impl IntoResponse {
///     format!("Hello, {}!", staff.username)
/// }
/// ```
pub struct RequireAdmin(pub CurrentStaff);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = StaffAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        require_role(parts, StaffRole::Admin).await.map(Self)
    }
}

/// Extractor that requires the `barista` role.
pub struct RequireBarista(pub CurrentStaff);

impl<S> FromRequestParts<S> for RequireBarista
where
    S: Send + Sync,
{
    type Rejection = StaffAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        require_role(parts, StaffRole::Barista).await.map(Self)
    }
}

/// Extractor that optionally gets the logged-in staff member.
///
/// Never rejects; used by the root redirect and the login page.
pub struct OptionalStaff(pub Option<CurrentStaff>);

impl<S> FromRequestParts<S> for OptionalStaff
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(current_staff(parts).await))
    }
}

/// Store the logged-in staff member in the session.
///
/// # Errors
///
/// Returns the session store error if persisting fails.
pub async fn set_current_staff(
    session: &Session,
    staff: &CurrentStaff,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session::CURRENT_STAFF, staff).await
}
