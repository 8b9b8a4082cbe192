//! SeaORM adapter for cards - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::cards;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
) -> Result<Option<cards::Model>, sea_orm::DbErr> {
    cards::Entity::find_by_id(card_id).one(conn).await
}

pub async fn require_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
) -> Result<cards::Model, sea_orm::DbErr> {
    find_by_id(conn, card_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Card not found".to_string()))
}

pub async fn cards_in_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i64,
) -> Result<Vec<cards::Model>, sea_orm::DbErr> {
    cards::Entity::find()
        .filter(cards::Column::CategoryId.eq(category_id))
        .order_by_asc(cards::Column::Number)
        .all(conn)
        .await
}

pub async fn count_in_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    cards::Entity::find()
        .filter(cards::Column::CategoryId.eq(category_id))
        .count(conn)
        .await
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_ids: &[i64],
) -> Result<Vec<cards::Model>, sea_orm::DbErr> {
    if card_ids.is_empty() {
        return Ok(Vec::new());
    }
    cards::Entity::find()
        .filter(cards::Column::Id.is_in(card_ids.iter().copied()))
        .all(conn)
        .await
}

pub async fn create_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    number: i32,
    description: String,
    hashtags: String,
    category_id: i64,
) -> Result<cards::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = cards::ActiveModel {
        id: NotSet,
        number: Set(number),
        description: Set(description),
        hashtags: Set(hashtags),
        category_id: Set(category_id),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

pub async fn update_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
    description: String,
    hashtags: String,
) -> Result<cards::Model, sea_orm::DbErr> {
    let model = require_card(conn, card_id).await?;
    let mut active: cards::ActiveModel = model.into();
    active.description = Set(description);
    active.hashtags = Set(hashtags);
    active.updated_at = Set(time::OffsetDateTime::now_utc());
    active.update(conn).await
}

/// Delete a card. Membership rows go with it via FK cascade.
pub async fn delete_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = cards::Entity::delete_many()
        .filter(cards::Column::Id.eq(card_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Delete several cards at once (set deletion removes the member cards).
pub async fn delete_cards<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_ids: &[i64],
) -> Result<u64, sea_orm::DbErr> {
    if card_ids.is_empty() {
        return Ok(0);
    }
    let result = cards::Entity::delete_many()
        .filter(cards::Column::Id.is_in(card_ids.iter().copied()))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
