//! Settings key/value storage.
//!
//! A single small table of site-wide settings; currently only the console
//! theme lives here.

use sqlx::PgPool;

use super::RepositoryError;

/// Settings key for the console theme.
pub const THEME_KEY: &str = "theme";

/// Theme used when none has been chosen yet.
pub const DEFAULT_THEME: &str = "light";

/// Get a setting value.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn get_setting(pool: &PgPool, key: &str) -> Result<Option<String>, RepositoryError> {
    let value =
        sqlx::query_scalar::<_, String>("SELECT value FROM settings WHERE key = $1")
            .bind(key)
            .fetch_optional(pool)
            .await?;

    Ok(value)
}

/// Set a setting value, inserting or replacing.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the upsert fails.
pub async fn set_setting(pool: &PgPool, key: &str, value: &str) -> Result<(), RepositoryError> {
    sqlx::query(
        r"
        INSERT INTO settings (key, value)
        VALUES ($1, $2)
        ON CONFLICT (key) DO UPDATE SET value = $2, updated_at = NOW()
        ",
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;

    Ok(())
}

/// The active console theme, defaulting when unset.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn active_theme(pool: &PgPool) -> Result<String, RepositoryError> {
    Ok(get_setting(pool, THEME_KEY)
        .await?
        .unwrap_or_else(|| DEFAULT_THEME.to_string()))
}
