//! Session keys for the staff console.

/// Key for storing the logged-in staff member.
pub const CURRENT_STAFF: &str = "current_staff";
