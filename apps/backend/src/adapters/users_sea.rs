//! SeaORM adapter for admin and host accounts - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{admins, hosts};

pub async fn find_admin_by_login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    login: &str,
) -> Result<Option<admins::Model>, sea_orm::DbErr> {
    admins::Entity::find()
        .filter(admins::Column::Login.eq(login))
        .one(conn)
        .await
}

pub async fn find_host_by_login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    login: &str,
) -> Result<Option<hosts::Model>, sea_orm::DbErr> {
    hosts::Entity::find()
        .filter(hosts::Column::Login.eq(login))
        .one(conn)
        .await
}

pub async fn require_host<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    host_id: i64,
) -> Result<hosts::Model, sea_orm::DbErr> {
    hosts::Entity::find_by_id(host_id)
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Host not found".to_string()))
}

pub async fn list_hosts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<hosts::Model>, sea_orm::DbErr> {
    hosts::Entity::find()
        .order_by_asc(hosts::Column::Id)
        .all(conn)
        .await
}

pub async fn create_host<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    login: String,
    password: String,
) -> Result<hosts::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = hosts::ActiveModel {
        id: NotSet,
        login: Set(login),
        password: Set(password),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

pub async fn update_host<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    host_id: i64,
    login: String,
    password: String,
) -> Result<hosts::Model, sea_orm::DbErr> {
    let model = require_host(conn, host_id).await?;
    let mut active: hosts::ActiveModel = model.into();
    active.login = Set(login);
    active.password = Set(password);
    active.updated_at = Set(time::OffsetDateTime::now_utc());
    active.update(conn).await
}

pub async fn delete_host<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    host_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = hosts::Entity::delete_many()
        .filter(hosts::Column::Id.eq(host_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
