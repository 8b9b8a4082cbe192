//! SeaORM adapter for the category catalog - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::categories;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i64,
) -> Result<Option<categories::Model>, sea_orm::DbErr> {
    categories::Entity::find_by_id(category_id).one(conn).await
}

pub async fn require_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i64,
) -> Result<categories::Model, sea_orm::DbErr> {
    find_by_id(conn, category_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Category not found".to_string()))
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<categories::Model>, sea_orm::DbErr> {
    categories::Entity::find()
        .filter(categories::Column::Name.eq(name))
        .one(conn)
        .await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<categories::Model>, sea_orm::DbErr> {
    categories::Entity::find()
        .order_by_asc(categories::Column::Id)
        .all(conn)
        .await
}

pub async fn create_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: String,
    color: String,
) -> Result<categories::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = categories::ActiveModel {
        id: NotSet,
        name: Set(name),
        color: Set(color),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

pub async fn update_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i64,
    name: String,
    color: String,
) -> Result<categories::Model, sea_orm::DbErr> {
    let model = require_category(conn, category_id).await?;
    let mut active: categories::ActiveModel = model.into();
    active.name = Set(name);
    active.color = Set(color);
    active.updated_at = Set(time::OffsetDateTime::now_utc());
    active.update(conn).await
}

/// Delete a category. Its sets, cards and membership rows go with it via
/// FK cascade.
pub async fn delete_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = categories::Entity::delete_many()
        .filter(categories::Column::Id.eq(category_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
