//! Login and token lifecycle.
//!
//! Passwords are compared as stored; hashing is out of scope for this
//! service. Failed lookups and wrong passwords collapse into the same
//! credential error so login probing can't distinguish them.

use std::time::SystemTime;

use sea_orm::DatabaseTransaction;

use crate::auth::jwt::{mint_access_token, Role};
use crate::auth::revocation::RevokedTokens;
use crate::repos::users;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Authenticate an admin and mint an access token.
pub async fn admin_login(
    txn: &DatabaseTransaction,
    security: &SecurityConfig,
    login: &str,
    password: &str,
) -> Result<String, AppError> {
    let admin = users::admin_by_login(txn, login)
        .await
        .map_err(AppError::from)?
        .ok_or(AppError::IncorrectCredentials)?;

    if admin.password != password {
        return Err(AppError::IncorrectCredentials);
    }

    mint_access_token(&admin.login, Role::Admin, SystemTime::now(), security)
}

/// Authenticate a host and mint an access token.
pub async fn host_login(
    txn: &DatabaseTransaction,
    security: &SecurityConfig,
    login: &str,
    password: &str,
) -> Result<String, AppError> {
    let host = users::host_by_login(txn, login)
        .await
        .map_err(AppError::from)?
        .ok_or(AppError::IncorrectCredentials)?;

    if host.password != password {
        return Err(AppError::IncorrectCredentials);
    }

    mint_access_token(&host.login, Role::Host, SystemTime::now(), security)
}

/// Revoke the presented token for the rest of its lifetime.
pub fn logout(revoked: &RevokedTokens, token: &str) {
    revoked.revoke(token);
    tracing::info!("access token revoked");
}
