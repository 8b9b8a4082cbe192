use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::auth::revocation::RevokedTokens;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
    /// Process-wide revoked-token store (cleared on restart)
    pub revoked: RevokedTokens,
}

impl AppState {
    /// Create a new AppState with the given database connection and security config
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        Self {
            db,
            security,
            revoked: RevokedTokens::new(),
        }
    }
}
