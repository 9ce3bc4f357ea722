//! Staff account creation.

use copper_kettle_admin::services::auth::hash_password;
use copper_kettle_core::StaffRole;

use super::{CommandError, connect};

/// Create a staff account with the given role.
///
/// # Errors
///
/// Returns `CommandError::Invalid` for an unknown role or a taken
/// username, and `CommandError::Database` for other database failures.
pub async fn create(username: &str, password: &str, role: &str) -> Result<(), CommandError> {
    let role: StaffRole = role.parse().map_err(CommandError::Invalid)?;

    let password_hash =
        hash_password(password).map_err(|e| CommandError::Invalid(e.to_string()))?;

    let pool = connect().await?;

    let result = sqlx::query(
        r"
        INSERT INTO staff (username, password_hash, role)
        VALUES ($1, $2, $3)
        ",
    )
    .bind(username)
    .bind(&password_hash)
    .bind(role.to_string())
    .execute(&pool)
    .await;

    match result {
        Ok(_) => {
            tracing::info!(%username, %role, "staff account created");
            Ok(())
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
            CommandError::Invalid(format!("username '{username}' is already taken")),
        ),
        Err(e) => Err(CommandError::Database(e)),
    }
}
