//! Game repository functions for the domain layer.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::games_sea as games_adapter;
use crate::domain::deck::{decode_deck, decode_tags, encode_deck, encode_tags, DeckEntry};
use crate::entities::games;
use crate::entities::games::GameStatus;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Game domain model.
///
/// Deck columns and the tag filter arrive decoded. The status/deck invariant
/// (started_at and both decks set iff started) is enforced by the services
/// on every transition, not re-checked here.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub status: GameStatus,
    pub tags: Vec<String>,
    pub started_at: Option<OffsetDateTime>,
    pub initial_deck: Option<Vec<DeckEntry>>,
    pub deck: Option<Vec<DeckEntry>>,
    pub lock_version: i32,
}

impl Game {
    /// Decode a database row. A malformed deck column surfaces as
    /// `DomainError::Infra(DataCorruption)`.
    fn try_from_model(model: games::Model) -> Result<Self, DomainError> {
        let initial_deck = model
            .initial_deck
            .as_deref()
            .map(decode_deck)
            .transpose()?;
        let deck = model.deck.as_deref().map(decode_deck).transpose()?;

        Ok(Self {
            id: model.id,
            name: model.name,
            status: model.status,
            tags: decode_tags(&model.hashtags),
            started_at: model.started_at,
            initial_deck,
            deck,
            lock_version: model.lock_version,
        })
    }
}

fn game_not_found(game_id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Game, format!("Game with id {game_id} not found"))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    let model = games_adapter::find_by_id(conn, game_id).await?;
    model.map(Game::try_from_model).transpose()
}

/// Find game by ID or return a Game-kind NotFound.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| game_not_found(game_id))
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<Game>, DomainError> {
    let model = games_adapter::find_by_name(conn, name).await?;
    model.map(Game::try_from_model).transpose()
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Game>, DomainError> {
    let models = games_adapter::list_all(conn).await?;
    models.into_iter().map(Game::try_from_model).collect()
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: String,
    tags: &[String],
) -> Result<Game, DomainError> {
    let model = games_adapter::create_game(
        conn,
        games_adapter::GameCreate {
            name,
            hashtags: encode_tags(tags),
        },
    )
    .await?;
    Game::try_from_model(model)
}

/// Waiting → started with optimistic locking: stamps `started_at` and stores
/// the built deck as both snapshot and remaining deck.
pub async fn start_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    expected_lock_version: i32,
    started_at: OffsetDateTime,
    deck: &[DeckEntry],
) -> Result<Game, DomainError> {
    let model = games_adapter::start_game(
        conn,
        games_adapter::GameStart {
            id: game_id,
            current_lock_version: expected_lock_version,
            started_at,
            deck: encode_deck(deck),
        },
    )
    .await?;
    Game::try_from_model(model)
}

/// Persist the remaining deck after a draw, with optimistic locking.
pub async fn update_deck<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    expected_lock_version: i32,
    deck: &[DeckEntry],
) -> Result<Game, DomainError> {
    let model =
        games_adapter::update_deck(conn, game_id, expected_lock_version, encode_deck(deck))
            .await?;
    Game::try_from_model(model)
}

/// Return the game to waiting and drop all deck state, with optimistic
/// locking. Shared by finish and the expiry sweep.
pub async fn reset_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    expected_lock_version: i32,
) -> Result<Game, DomainError> {
    let model = games_adapter::reset_game(conn, game_id, expected_lock_version).await?;
    Game::try_from_model(model)
}

pub async fn update_metadata<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    expected_lock_version: i32,
    name: String,
    tags: &[String],
) -> Result<Game, DomainError> {
    let model = games_adapter::update_metadata(
        conn,
        games_adapter::GameUpdateMetadata {
            id: game_id,
            current_lock_version: expected_lock_version,
            name,
            hashtags: encode_tags(tags),
        },
    )
    .await?;
    Game::try_from_model(model)
}

/// Delete a game in any state. Returns false when it was already gone.
pub async fn delete_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<bool, DomainError> {
    let rows = games_adapter::delete_game(conn, game_id).await?;
    Ok(rows > 0)
}

pub async fn set_ids_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<i64>, DomainError> {
    Ok(games_adapter::set_ids_for_game(conn, game_id).await?)
}

pub async fn category_ids_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<i64>, DomainError> {
    Ok(games_adapter::category_ids_for_game(conn, game_id).await?)
}

pub async fn replace_game_sets<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    set_ids: &[i64],
) -> Result<(), DomainError> {
    Ok(games_adapter::replace_game_sets(conn, game_id, set_ids).await?)
}

pub async fn replace_game_categories<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    category_ids: &[i64],
) -> Result<(), DomainError> {
    Ok(games_adapter::replace_game_categories(conn, game_id, category_ids).await?)
}
