//! Database configuration from the environment.

use std::env;

use crate::error::AppError;

/// Resolve the database URL.
///
/// `DATABASE_URL` wins when set; otherwise the URL is assembled from the
/// component variables (`DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`,
/// `DB_NAME`).
pub fn db_url() -> Result<String, AppError> {
    if let Ok(url) = env::var("DATABASE_URL") {
        if !url.is_empty() {
            return Ok(url);
        }
    }

    let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
    let user = env::var("DB_USER")
        .map_err(|_| AppError::config("DATABASE_URL or DB_USER must be set".to_string()))?;
    let password = env::var("DB_PASSWORD")
        .map_err(|_| AppError::config("DB_PASSWORD must be set".to_string()))?;
    let name = env::var("DB_NAME")
        .map_err(|_| AppError::config("DB_NAME must be set".to_string()))?;

    Ok(format!("postgres://{user}:{password}@{host}:{port}/{name}"))
}
