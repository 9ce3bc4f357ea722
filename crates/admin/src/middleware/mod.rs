//! HTTP middleware and extractors for the staff console.

pub mod auth;
pub mod session;

pub use auth::{OptionalStaff, RequireAdmin, RequireBarista, set_current_staff};
pub use session::session_layer;
