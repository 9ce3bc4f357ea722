//! Staff repository for login lookups.

use sqlx::{FromRow, PgPool};

use copper_kettle_core::StaffId;

use super::RepositoryError;

/// Staff row as needed for authentication. The role stays a raw string
/// here; the auth service parses it.
#[derive(Debug, Clone, FromRow)]
pub struct StaffAuthRow {
    pub id: StaffId,
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

/// Repository for staff accounts.
pub struct StaffRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StaffRepository<'a> {
    /// Create a new staff repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find a staff member by username.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<StaffAuthRow>, RepositoryError> {
        let row = sqlx::query_as::<_, StaffAuthRow>(
            r"
            SELECT id, username, password_hash, role
            FROM staff
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }
}
