//! Admin/host account repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::users_sea as users_adapter;
use crate::entities::{admins, hosts};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Admin account domain model
#[derive(Debug, Clone, PartialEq)]
pub struct AdminAccount {
    pub id: i64,
    pub login: String,
    pub password: String,
}

/// Host account domain model
#[derive(Debug, Clone, PartialEq)]
pub struct HostAccount {
    pub id: i64,
    pub login: String,
    pub password: String,
}

impl From<admins::Model> for AdminAccount {
    fn from(model: admins::Model) -> Self {
        Self {
            id: model.id,
            login: model.login,
            password: model.password,
        }
    }
}

impl From<hosts::Model> for HostAccount {
    fn from(model: hosts::Model) -> Self {
        Self {
            id: model.id,
            login: model.login,
            password: model.password,
        }
    }
}

pub async fn admin_by_login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    login: &str,
) -> Result<Option<AdminAccount>, DomainError> {
    let model = users_adapter::find_admin_by_login(conn, login).await?;
    Ok(model.map(AdminAccount::from))
}

pub async fn host_by_login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    login: &str,
) -> Result<Option<HostAccount>, DomainError> {
    let model = users_adapter::find_host_by_login(conn, login).await?;
    Ok(model.map(HostAccount::from))
}

pub async fn require_host<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    host_id: i64,
) -> Result<HostAccount, DomainError> {
    users_adapter::require_host(conn, host_id)
        .await
        .map(HostAccount::from)
        .map_err(|e| match e {
            sea_orm::DbErr::RecordNotFound(_) => DomainError::not_found(
                NotFoundKind::Host,
                format!("Host with id {host_id} not found"),
            ),
            other => other.into(),
        })
}

pub async fn list_hosts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<HostAccount>, DomainError> {
    let models = users_adapter::list_hosts(conn).await?;
    Ok(models.into_iter().map(HostAccount::from).collect())
}

pub async fn create_host<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    login: String,
    password: String,
) -> Result<HostAccount, DomainError> {
    let model = users_adapter::create_host(conn, login, password).await?;
    Ok(HostAccount::from(model))
}

pub async fn update_host<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    host_id: i64,
    login: String,
    password: String,
) -> Result<HostAccount, DomainError> {
    users_adapter::update_host(conn, host_id, login, password)
        .await
        .map(HostAccount::from)
        .map_err(|e| match e {
            sea_orm::DbErr::RecordNotFound(_) => DomainError::not_found(
                NotFoundKind::Host,
                format!("Host with id {host_id} not found"),
            ),
            other => other.into(),
        })
}

pub async fn delete_host<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    host_id: i64,
) -> Result<bool, DomainError> {
    let rows = users_adapter::delete_host(conn, host_id).await?;
    Ok(rows > 0)
}
