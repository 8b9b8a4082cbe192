//! Host account management services.

use sea_orm::DatabaseTransaction;

use crate::errors::domain::DomainError;
use crate::repos::users::{self, HostAccount};

pub async fn create_host(
    txn: &DatabaseTransaction,
    login: String,
    password: String,
) -> Result<HostAccount, DomainError> {
    users::create_host(txn, login, password).await
}

pub async fn list_hosts(txn: &DatabaseTransaction) -> Result<Vec<HostAccount>, DomainError> {
    users::list_hosts(txn).await
}

pub async fn edit_host(
    txn: &DatabaseTransaction,
    host_id: i64,
    login: String,
    password: String,
) -> Result<HostAccount, DomainError> {
    users::update_host(txn, host_id, login, password).await
}

pub async fn delete_host(txn: &DatabaseTransaction, host_id: i64) -> Result<(), DomainError> {
    users::require_host(txn, host_id).await?;
    users::delete_host(txn, host_id).await?;
    Ok(())
}
