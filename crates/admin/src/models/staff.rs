//! Staff identity types.

use serde::{Deserialize, Serialize};

use copper_kettle_core::{StaffId, StaffRole};

/// Session-stored staff identity.
///
/// Minimal data kept in the session to identify the logged-in staff member
/// and gate the consoles by role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentStaff {
    /// Staff member's database ID.
    pub id: StaffId,
    /// Login name, shown in the console header.
    pub username: String,
    /// Which console this account may use.
    pub role: StaffRole,
}
