//! SeaORM adapter for card sets and set membership - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{set_cards, sets};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    set_id: i64,
) -> Result<Option<sets::Model>, sea_orm::DbErr> {
    sets::Entity::find_by_id(set_id).one(conn).await
}

pub async fn require_set<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    set_id: i64,
) -> Result<sets::Model, sea_orm::DbErr> {
    find_by_id(conn, set_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Set not found".to_string()))
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<sets::Model>, sea_orm::DbErr> {
    sets::Entity::find()
        .filter(sets::Column::Name.eq(name))
        .one(conn)
        .await
}

pub async fn sets_in_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i64,
) -> Result<Vec<sets::Model>, sea_orm::DbErr> {
    sets::Entity::find()
        .filter(sets::Column::CategoryId.eq(category_id))
        .order_by_asc(sets::Column::Id)
        .all(conn)
        .await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<sets::Model>, sea_orm::DbErr> {
    sets::Entity::find()
        .order_by_asc(sets::Column::Id)
        .all(conn)
        .await
}

/// The distinguished main set of a category, if it exists yet.
pub async fn main_set_for_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i64,
) -> Result<Option<sets::Model>, sea_orm::DbErr> {
    sets::Entity::find()
        .filter(sets::Column::CategoryId.eq(category_id))
        .filter(sets::Column::IsMain.eq(true))
        .one(conn)
        .await
}

pub async fn create_set<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: String,
    category_id: i64,
    is_main: bool,
) -> Result<sets::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = sets::ActiveModel {
        id: NotSet,
        name: Set(name),
        category_id: Set(category_id),
        is_main: Set(is_main),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

pub async fn rename_set<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    set_id: i64,
    name: String,
) -> Result<sets::Model, sea_orm::DbErr> {
    let model = require_set(conn, set_id).await?;
    let mut active: sets::ActiveModel = model.into();
    active.name = Set(name);
    active.updated_at = Set(time::OffsetDateTime::now_utc());
    active.update(conn).await
}

pub async fn delete_set<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    set_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = sets::Entity::delete_many()
        .filter(sets::Column::Id.eq(set_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

// ----- set membership -----

pub async fn card_ids_for_set<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    set_id: i64,
) -> Result<Vec<i64>, sea_orm::DbErr> {
    let links = set_cards::Entity::find()
        .filter(set_cards::Column::SetId.eq(set_id))
        .all(conn)
        .await?;
    Ok(links.into_iter().map(|l| l.card_id).collect())
}

pub async fn card_ids_for_sets<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    set_ids: &[i64],
) -> Result<Vec<i64>, sea_orm::DbErr> {
    if set_ids.is_empty() {
        return Ok(Vec::new());
    }
    let links = set_cards::Entity::find()
        .filter(set_cards::Column::SetId.is_in(set_ids.iter().copied()))
        .all(conn)
        .await?;
    Ok(links.into_iter().map(|l| l.card_id).collect())
}

pub async fn add_card_to_set<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    set_id: i64,
    card_id: i64,
) -> Result<(), sea_orm::DbErr> {
    let link = set_cards::ActiveModel {
        set_id: Set(set_id),
        card_id: Set(card_id),
    };
    set_cards::Entity::insert(link).exec(conn).await?;
    Ok(())
}

pub async fn replace_set_cards<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    set_id: i64,
    card_ids: &[i64],
) -> Result<(), sea_orm::DbErr> {
    set_cards::Entity::delete_many()
        .filter(set_cards::Column::SetId.eq(set_id))
        .exec(conn)
        .await?;

    if card_ids.is_empty() {
        return Ok(());
    }

    let rows = card_ids.iter().map(|card_id| set_cards::ActiveModel {
        set_id: Set(set_id),
        card_id: Set(*card_id),
    });
    set_cards::Entity::insert_many(rows).exec(conn).await?;
    Ok(())
}
