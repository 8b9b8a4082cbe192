//! SeaORM adapter for the game repository - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::entities::{game_categories, game_sets, games};
use crate::errors::domain::OPTIMISTIC_LOCK_MARKER;

pub mod dto;

pub use dto::{GameCreate, GameStart, GameUpdateMetadata};

/// Helper: Apply optimistic update with lock version check, then refetch.
///
/// - Adds the lock_version increment and updated_at to the update
/// - Filters by id and current_lock_version
/// - Checks rows_affected to distinguish NotFound vs OptimisticLock
/// - Refetches and returns the updated model
///
/// The caller provides a closure that configures entity-specific columns.
async fn optimistic_update_then_fetch<C, F>(
    conn: &C,
    id: i64,
    current_lock_version: i32,
    configure_update: F,
) -> Result<games::Model, sea_orm::DbErr>
where
    C: ConnectionTrait + Send + Sync,
    F: FnOnce(sea_orm::UpdateMany<games::Entity>) -> sea_orm::UpdateMany<games::Entity>,
{
    use sea_orm::sea_query::Expr;

    let now = time::OffsetDateTime::now_utc();

    let result = configure_update(games::Entity::update_many())
        .col_expr(games::Column::UpdatedAt, Expr::val(now).into())
        .col_expr(
            games::Column::LockVersion,
            Expr::col(games::Column::LockVersion).add(1),
        )
        .filter(games::Column::Id.eq(id))
        .filter(games::Column::LockVersion.eq(current_lock_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        // Either the game doesn't exist or the lock version doesn't match
        let game = games::Entity::find_by_id(id).one(conn).await?;
        if let Some(game) = game {
            let payload = format!(
                "{OPTIMISTIC_LOCK_MARKER}{{\"expected\":{},\"actual\":{}}}",
                current_lock_version, game.lock_version
            );
            return Err(sea_orm::DbErr::Custom(payload));
        } else {
            return Err(sea_orm::DbErr::RecordNotFound("Game not found".to_string()));
        }
    }

    games::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Game not found".to_string()))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::Id.eq(game_id))
        .one(conn)
        .await
}

/// Find game by ID or return RecordNotFound error.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Game not found".to_string()))
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::Name.eq(name))
        .one(conn)
        .await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    use sea_orm::QueryOrder;

    games::Entity::find()
        .order_by_asc(games::Column::Id)
        .all(conn)
        .await
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        status: Set(games::GameStatus::Waiting),
        hashtags: Set(dto.hashtags),
        started_at: NotSet,
        initial_deck: NotSet,
        deck: NotSet,
        lock_version: Set(1),
        created_at: Set(now),
        updated_at: Set(now),
    };

    game_active.insert(conn).await
}

/// Transition waiting → started: stamp the start time and store the freshly
/// built deck as both the immutable snapshot and the remaining deck.
pub async fn start_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameStart,
) -> Result<games::Model, sea_orm::DbErr> {
    use sea_orm::sea_query::{Alias, Expr};

    optimistic_update_then_fetch(conn, dto.id, dto.current_lock_version, |update| {
        update
            .col_expr(
                games::Column::Status,
                Expr::val(games::GameStatus::Started).cast_as(Alias::new("game_status")),
            )
            .col_expr(games::Column::StartedAt, Expr::val(dto.started_at).into())
            .col_expr(games::Column::InitialDeck, Expr::val(dto.deck.clone()).into())
            .col_expr(games::Column::Deck, Expr::val(dto.deck).into())
    })
    .await
}

/// Persist the remaining deck after a successful draw.
pub async fn update_deck<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    current_lock_version: i32,
    deck: String,
) -> Result<games::Model, sea_orm::DbErr> {
    use sea_orm::sea_query::Expr;

    optimistic_update_then_fetch(conn, id, current_lock_version, |update| {
        update.col_expr(games::Column::Deck, Expr::val(deck).into())
    })
    .await
}

/// Return a game to waiting, dropping all deck state. Used by finish and by
/// the expiry sweep; keeps the status/deck invariant intact.
pub async fn reset_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    current_lock_version: i32,
) -> Result<games::Model, sea_orm::DbErr> {
    use sea_orm::sea_query::{Alias, Expr};

    optimistic_update_then_fetch(conn, id, current_lock_version, |update| {
        update
            .col_expr(
                games::Column::Status,
                Expr::val(games::GameStatus::Waiting).cast_as(Alias::new("game_status")),
            )
            .col_expr(
                games::Column::StartedAt,
                Expr::val(None::<time::OffsetDateTime>).into(),
            )
            .col_expr(games::Column::InitialDeck, Expr::val(None::<String>).into())
            .col_expr(games::Column::Deck, Expr::val(None::<String>).into())
    })
    .await
}

/// Update editable game metadata (name, tag filter).
pub async fn update_metadata<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameUpdateMetadata,
) -> Result<games::Model, sea_orm::DbErr> {
    use sea_orm::sea_query::Expr;

    optimistic_update_then_fetch(conn, dto.id, dto.current_lock_version, |update| {
        update
            .col_expr(games::Column::Name, Expr::val(dto.name).into())
            .col_expr(games::Column::Hashtags, Expr::val(dto.hashtags).into())
    })
    .await
}

/// Delete a game. Association rows go with it via FK cascade.
/// Returns the number of rows deleted (0 when the game was already gone).
pub async fn delete_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = games::Entity::delete_many()
        .filter(games::Column::Id.eq(id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

// ----- game_sets / game_categories associations -----

pub async fn set_ids_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<i64>, sea_orm::DbErr> {
    let links = game_sets::Entity::find()
        .filter(game_sets::Column::GameId.eq(game_id))
        .all(conn)
        .await?;
    Ok(links.into_iter().map(|l| l.set_id).collect())
}

pub async fn category_ids_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<i64>, sea_orm::DbErr> {
    let links = game_categories::Entity::find()
        .filter(game_categories::Column::GameId.eq(game_id))
        .all(conn)
        .await?;
    Ok(links.into_iter().map(|l| l.category_id).collect())
}

pub async fn replace_game_sets<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    set_ids: &[i64],
) -> Result<(), sea_orm::DbErr> {
    game_sets::Entity::delete_many()
        .filter(game_sets::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;

    if set_ids.is_empty() {
        return Ok(());
    }

    let rows = set_ids.iter().map(|set_id| game_sets::ActiveModel {
        game_id: Set(game_id),
        set_id: Set(*set_id),
    });
    game_sets::Entity::insert_many(rows).exec(conn).await?;
    Ok(())
}

pub async fn replace_game_categories<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    category_ids: &[i64],
) -> Result<(), sea_orm::DbErr> {
    game_categories::Entity::delete_many()
        .filter(game_categories::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;

    if category_ids.is_empty() {
        return Ok(());
    }

    let rows = category_ids
        .iter()
        .map(|category_id| game_categories::ActiveModel {
            game_id: Set(game_id),
            category_id: Set(*category_id),
        });
    game_categories::Entity::insert_many(rows).exec(conn).await?;
    Ok(())
}
